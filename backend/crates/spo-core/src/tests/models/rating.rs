use crate::Rating;

use std::str::FromStr;

#[test]
fn test_rating_priority_mapping() {
    assert_eq!(Rating::High.priority(), 1);
    assert_eq!(Rating::Medium.priority(), 2);
    assert_eq!(Rating::Low.priority(), 3);
    assert_eq!(Rating::Unrecognized("Critical".into()).priority(), 2);
}

#[test]
fn test_rating_from_str_keeps_unknown_values() {
    assert_eq!(Rating::from_str("High").unwrap(), Rating::High);
    assert_eq!(
        Rating::from_str("high").unwrap(),
        Rating::Unrecognized("high".to_string())
    );
}

#[test]
fn test_rating_serde_uses_plain_strings() {
    let json = serde_json::to_string(&Rating::Low).unwrap();
    assert_eq!(json, "\"Low\"");

    let parsed: Rating = serde_json::from_str("\"Severe\"").unwrap();
    assert_eq!(parsed, Rating::Unrecognized("Severe".to_string()));
    assert_eq!(parsed.to_string(), "Severe");
}
