use crate::tests::server_user;
use crate::{Address, Company, User, UserId};

use serde_json::json;

#[test]
fn test_deserializes_remote_payload() {
    let payload = json!({
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    });

    let user: User = serde_json::from_value(payload).unwrap();

    assert_eq!(user.id, Some(UserId::Numeric(1)));
    assert_eq!(user.company_name(), Some("Romaguera-Crona"));
    let company = user.company.unwrap();
    assert_eq!(
        company.catch_phrase.as_deref(),
        Some("Multi-layered client-server neural-net")
    );
    let geo = user.address.unwrap().geo.unwrap();
    assert_eq!(geo.lat.as_deref(), Some("-37.3159"));
}

#[test]
fn test_missing_fields_deserialize_as_none() {
    let user: User = serde_json::from_value(json!({ "id": "local-1", "name": "Bob" })).unwrap();

    assert_eq!(user.name.as_deref(), Some("Bob"));
    assert!(user.phone.is_none());
    assert!(user.company.is_none());
}

#[test]
fn test_draft_serializes_without_id() {
    let draft = User {
        name: Some("Bob".to_string()),
        company: Some(Company {
            catch_phrase: Some("Ship it".to_string()),
            ..Company::default()
        }),
        ..User::default()
    };

    let value = serde_json::to_value(&draft).unwrap();

    assert!(value.get("id").is_none());
    assert_eq!(value["company"]["catchPhrase"], "Ship it");
}

#[test]
fn test_merged_with_overrides_present_fields_only() {
    let base = server_user(1, "Alice");
    let edit = User {
        id: Some(UserId::Numeric(1)),
        name: Some("Alicia".to_string()),
        ..User::default()
    };

    let merged = base.merged_with(&edit);

    assert_eq!(merged.name.as_deref(), Some("Alicia"));
    assert_eq!(merged.email, base.email);
    assert_eq!(merged.company, base.company);
}

#[test]
fn test_merged_with_replaces_nested_objects_wholesale() {
    let base = server_user(1, "Alice");
    let edit = User {
        id: Some(UserId::Numeric(1)),
        address: Some(Address {
            street: Some("New Street".to_string()),
            ..Address::default()
        }),
        ..User::default()
    };

    let merged = base.merged_with(&edit);
    let address = merged.address.unwrap();

    assert_eq!(address.street.as_deref(), Some("New Street"));
    assert!(address.city.is_none());
}

#[test]
fn test_has_key_compares_as_strings() {
    let user = User::with_id(UserId::Numeric(5));
    assert!(user.has_key("5"));
    assert!(!user.has_key("50"));
    assert!(!User::default().has_key("5"));
}
