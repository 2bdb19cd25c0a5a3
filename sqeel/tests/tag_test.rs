use sqeel::{InvalidTagKey, TagSpec};

#[test]
fn test_parse_flags() -> Result<(), Box<dyn std::error::Error>> {
    let spec = TagSpec::parse("type:VARCHAR(64),primary,unique")?;
    assert_eq!(
        spec,
        TagSpec {
            sql_type: "VARCHAR(64)".to_string(),
            attrs: String::new(),
            name_override: String::new(),
            is_primary: true,
            is_unique: true,
        }
    );
    Ok(())
}

#[test]
fn test_parse_values() -> Result<(), Box<dyn std::error::Error>> {
    let spec: TagSpec = "type:INTEGER,attrs:NOT NULL,name:user_id".parse()?;
    assert_eq!(spec.sql_type, "INTEGER");
    assert_eq!(spec.attrs, "NOT NULL");
    assert_eq!(spec.name_override, "user_id");
    assert!(!spec.is_primary);
    assert!(!spec.is_unique);
    Ok(())
}

#[test]
fn test_parse_unknown_key() {
    let err = TagSpec::parse("type:TEXT,bogus").unwrap_err();
    assert_eq!(err, InvalidTagKey { key: "bogus".to_string() });
    assert_eq!(err.to_string(), "invalid sqeel tag key `bogus`");
}

#[test]
fn test_parse_empty() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(TagSpec::parse("")?, TagSpec::default());
    Ok(())
}

#[test]
fn test_parse_primary_aliases() -> Result<(), Box<dyn std::error::Error>> {
    for alias in ["primary", "primarykey", "primary_key", "is_primary"] {
        let spec = TagSpec::parse(&format!("type:INTEGER,{alias}"))?;
        assert!(spec.is_primary, "alias {alias}");
    }
    assert_eq!(TagSpec::parse("column_name:uid")?.name_override, "uid");
    Ok(())
}

#[test]
fn test_parse_value_keeps_inner_colons() -> Result<(), Box<dyn std::error::Error>> {
    let spec = TagSpec::parse("type:TIME,attrs:DEFAULT '00:00:00'")?;
    assert_eq!(spec.attrs, "DEFAULT '00:00:00'");
    Ok(())
}

#[test]
fn test_parse_is_whitespace_and_case_sensitive() {
    assert_eq!(TagSpec::parse("type:TEXT, unique").unwrap_err().key, " unique");
    assert_eq!(TagSpec::parse("TYPE:TEXT").unwrap_err().key, "TYPE");
    assert_eq!(TagSpec::parse("type:TEXT,").unwrap_err().key, "");
}

#[test]
fn test_parse_value_and_flag_arity() -> Result<(), Box<dyn std::error::Error>> {
    let spec = TagSpec::parse("type,primary:yes")?;
    assert_eq!(spec.sql_type, "");
    assert!(spec.is_primary);

    let spec = TagSpec::parse("type:TEXT,type:INTEGER")?;
    assert_eq!(spec.sql_type, "INTEGER");
    Ok(())
}
