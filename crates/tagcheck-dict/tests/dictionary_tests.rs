//! Integration tests for loading and querying the tag dictionary.

use std::io::Write;

use tagcheck_dict::{DictionaryError, TagDictionary};

/// Helper to build a dictionary from inline JSON, panicking on failure
fn dictionary(json: &str) -> TagDictionary {
    TagDictionary::from_json_str(json).expect("dictionary should load")
}

#[test]
fn test_bundled_dictionary_loads() {
    let dict = TagDictionary::bundled().expect("bundled dictionary is valid");
    assert!(!dict.is_empty());
    for tag in ["html", "head", "body", "div", "span", "p", "a", "img", "br"] {
        assert!(dict.contains(tag), "bundled dictionary should know <{tag}>");
    }
}

#[test]
fn test_bundled_void_elements() {
    let dict = TagDictionary::bundled().unwrap();
    for tag in [
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
        "source", "track", "wbr",
    ] {
        assert!(dict.lookup(tag).unwrap().is_void, "<{tag}> should be void");
    }
    assert!(!dict.lookup("div").unwrap().is_void);
    assert!(!dict.lookup("p").unwrap().is_void);
}

#[test]
fn test_bundled_attributes_include_globals() {
    let dict = TagDictionary::bundled().unwrap();
    let img = dict.lookup("img").unwrap();
    assert!(img.allows_attribute("src"));
    assert!(img.allows_attribute("alt"));
    assert!(img.allows_attribute("class"));
    assert!(img.allows_attribute("onclick"));
    assert!(!img.allows_attribute("onfoo"));
    assert!(!img.allows_attribute("href"));

    let meta = dict.lookup("meta").unwrap();
    assert!(meta.allows_attribute("http-equiv"));
}

#[test]
fn test_lookup_is_case_insensitive() {
    let dict = dictionary(r#"{"div": {"void": false, "attributes": ["id"]}}"#);
    assert_eq!(dict.lookup("DIV").map(|d| d.name.as_str()), Some("div"));
    assert_eq!(dict.lookup("Div").map(|d| d.name.as_str()), Some("div"));
    assert!(dict.lookup("span").is_none());
}

#[test]
fn test_keys_and_attributes_are_normalized() {
    let dict = dictionary(r#"{"IMG": {"void": true, "attributes": ["SRC", "Alt"]}}"#);
    let img = dict.lookup("img").unwrap();
    assert_eq!(img.name, "img");
    assert!(img.allowed_attributes.contains("src"));
    assert!(img.allowed_attributes.contains("alt"));
}

#[test]
fn test_optional_fields_default() {
    let dict = dictionary(r#"{"br": {"void": true}}"#);
    let br = dict.lookup("br").unwrap();
    assert!(br.description.is_empty());
    assert!(br.allowed_attributes.is_empty());
}

#[test]
fn test_iter_is_sorted() {
    let dict = dictionary(
        r#"{"span": {"void": false}, "a": {"void": false}, "div": {"void": false}}"#,
    );
    let names: Vec<&str> = dict.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["a", "div", "span"]);
    assert_eq!(dict.len(), 3);
}

#[test]
fn test_missing_void_flag_is_malformed() {
    let err = TagDictionary::from_json_str(r#"{"div": {"attributes": []}}"#).unwrap_err();
    assert!(matches!(err, DictionaryError::Parse(_)));
}

#[test]
fn test_invalid_json_is_malformed() {
    let err = TagDictionary::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, DictionaryError::Parse(_)));
}

#[test]
fn test_empty_dictionary_rejected() {
    let err = TagDictionary::from_json_str("{}").unwrap_err();
    assert!(matches!(err, DictionaryError::Empty));
}

#[test]
fn test_empty_tag_name_rejected() {
    let err = TagDictionary::from_json_str(r#"{" ": {"void": false}}"#).unwrap_err();
    assert!(matches!(err, DictionaryError::EmptyTagName));
}

#[test]
fn test_case_collision_rejected() {
    let err =
        TagDictionary::from_json_str(r#"{"div": {"void": false}, "DIV": {"void": false}}"#)
            .unwrap_err();
    match err {
        DictionaryError::DuplicateTag(name) => assert_eq!(name, "div"),
        other => panic!("Expected DuplicateTag, got {other:?}"),
    }
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"p": {"description": "Paragraph", "void": false, "attributes": ["class"]}}"#)
        .unwrap();

    let dict = TagDictionary::load(file.path()).unwrap();
    let p = dict.lookup("p").unwrap();
    assert_eq!(p.description, "Paragraph");
    assert!(p.allows_attribute("class"));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");
    let err = TagDictionary::load(&path).unwrap_err();
    match &err {
        DictionaryError::Io { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("Expected Io error, got {other:?}"),
    }
    assert!(err.to_string().contains("does-not-exist.json"));
}
