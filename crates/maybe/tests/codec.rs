#![cfg(feature = "serde")]

use maybe::{absent, present, Maybe};

#[test]
fn test_serializes_like_option() {
    assert_eq!(serde_json::to_string(&present(5)).unwrap(), "5");
    assert_eq!(serde_json::to_string(&absent::<i32>()).unwrap(), "null");
    assert_eq!(
        serde_json::to_string(&vec![present("a"), absent()]).unwrap(),
        r#"["a",null]"#
    );
}

#[test]
fn test_deserializes_like_option() {
    let held: Maybe<u32> = serde_json::from_str("17").unwrap();
    assert_eq!(held, present(17));
    let empty: Maybe<u32> = serde_json::from_str("null").unwrap();
    assert!(empty.is_absent());
    assert!(serde_json::from_str::<Maybe<u32>>("\"x\"").is_err());
}
