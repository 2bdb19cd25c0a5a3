use sqeel::to_snake_case;

#[test]
fn test_snake_case() {
    for (input, expected) in [
        ("HelloThere", "hello_there"),
        ("ID", "id"),
        ("SweetIDThatIsAwesome", "sweet_id_that_is_awesome"),
        ("A", "a"),
        ("AB", "ab"),
        ("UserID", "user_id"),
    ] {
        assert_eq!(to_snake_case(input), expected, "input {input:?}");
    }
}

#[test]
fn test_snake_case_first_two_chars_never_split() {
    // Position 1 is uppercase after a lowercase rune, still no split.
    assert_eq!(to_snake_case("aB"), "ab");
    assert_eq!(to_snake_case("ABc"), "abc");
    assert_eq!(to_snake_case("aBCd"), "ab_cd");
}

#[test]
fn test_snake_case_edges() {
    assert_eq!(to_snake_case(""), "");
    assert_eq!(to_snake_case("already_snake"), "already_snake");
    assert_eq!(to_snake_case("HTTPServer"), "http_server");
    assert_eq!(to_snake_case("Version2Name"), "version2_name");
}
