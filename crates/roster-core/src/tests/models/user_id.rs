use crate::{LOCAL_ID_PREFIX, User, UserId};

#[test]
fn test_numeric_text_parses_to_numeric_id() {
    let id: UserId = "42".parse().unwrap();
    assert_eq!(id, UserId::Numeric(42));
}

#[test]
fn test_non_numeric_text_parses_to_text_id() {
    let id: UserId = "local-abc".parse().unwrap();
    assert_eq!(id, UserId::Text("local-abc".to_string()));
}

#[test]
fn test_key_is_string_coerced() {
    assert_eq!(UserId::Numeric(7).key(), "7");
    assert_eq!(UserId::from("7").key(), UserId::Numeric(7).key());
}

#[test]
fn test_generated_local_ids_carry_prefix_and_differ() {
    let first = UserId::generate_local();
    let second = UserId::generate_local();

    assert!(first.is_local());
    assert!(first.key().starts_with(LOCAL_ID_PREFIX));
    assert_ne!(first, second);
}

#[test]
fn test_server_ids_are_not_local() {
    assert!(!UserId::Numeric(1).is_local());
    assert!(!UserId::from("abc").is_local());
}

#[test]
fn test_json_round_trip_keeps_variant() {
    let ids: Vec<UserId> = serde_json::from_str(r#"[3, "local-x"]"#).unwrap();
    assert_eq!(ids, vec![UserId::Numeric(3), UserId::from("local-x")]);
    assert_eq!(serde_json::to_string(&ids).unwrap(), r#"[3,"local-x"]"#);
}

#[test]
fn test_fractional_and_negative_ids_decode_as_other_numbers() {
    let users: Vec<User> = serde_json::from_str(r#"[{"id":2},{"id":3.5},{"id":-1}]"#).unwrap();

    let keys: Vec<_> = users.iter().filter_map(User::key).collect();
    assert_eq!(keys, vec!["2", "3.5", "-1"]);
    assert!(matches!(users[1].id, Some(UserId::OtherNumber(_))));
    assert!(!users[2].id.as_ref().unwrap().is_local());
}

#[test]
fn test_other_number_id_serializes_as_number() {
    let user: User = serde_json::from_str(r#"{"id":-7,"name":"Neg"}"#).unwrap();

    assert_eq!(serde_json::to_string(&user).unwrap(), r#"{"id":-7,"name":"Neg"}"#);
    assert!(user.has_key("-7"));
}
