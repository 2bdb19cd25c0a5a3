//! Identifier case conversion used to derive default SQL column names.

/// Converts an upper-camel identifier to lower snake case.
///
/// A word boundary is placed before an uppercase character that follows a
/// lowercase one, or that precedes a lowercase one (so acronyms stay
/// together). The first two characters never start a new word.
///
/// ```
/// use sqeel::to_snake_case;
///
/// assert_eq!(to_snake_case("HelloThere"), "hello_there");
/// assert_eq!(to_snake_case("SweetIDThatIsAwesome"), "sweet_id_that_is_awesome");
/// assert_eq!(to_snake_case("ID"), "id");
/// ```
pub fn to_snake_case(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut start = 0;

    for i in 2..chars.len() {
        let prev_lower = chars[i - 1].is_lowercase();
        let next_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());

        if chars[i].is_uppercase() && (prev_lower || next_lower) {
            words.push(chars[start..i].iter().collect());
            start = i;
        }
    }

    if start < chars.len() {
        words.push(chars[start..].iter().collect());
    }

    words.join("_").to_lowercase()
}
