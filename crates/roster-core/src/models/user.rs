//! User record as served by the remote API and kept in the local overlays.

use crate::UserId;

use serde::{Deserialize, Serialize};

/// A user record. Every field except the identifier is optional; the
/// identifier itself is absent only on drafts that have not been added yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catch_phrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bs: Option<String>,
}

impl User {
    /// Create a user with just an identifier set
    pub fn with_id(id: impl Into<UserId>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// String-coerced identifier, if the record has one
    pub fn key(&self) -> Option<String> {
        self.id.as_ref().map(UserId::key)
    }

    /// Whether this record carries the given identifier (compared as strings)
    pub fn has_key(&self, key: &str) -> bool {
        self.id.as_ref().is_some_and(|id| id.key() == key)
    }

    /// Company name, if any
    pub fn company_name(&self) -> Option<&str> {
        self.company.as_ref().and_then(|c| c.name.as_deref())
    }

    /// Shallow merge: every top-level field set on `edit` wins, the rest is
    /// kept from `self`. Nested address and company are replaced wholesale.
    pub fn merged_with(&self, edit: &User) -> User {
        User {
            id: edit.id.clone().or_else(|| self.id.clone()),
            name: edit.name.clone().or_else(|| self.name.clone()),
            username: edit.username.clone().or_else(|| self.username.clone()),
            email: edit.email.clone().or_else(|| self.email.clone()),
            phone: edit.phone.clone().or_else(|| self.phone.clone()),
            website: edit.website.clone().or_else(|| self.website.clone()),
            address: edit.address.clone().or_else(|| self.address.clone()),
            company: edit.company.clone().or_else(|| self.company.clone()),
        }
    }
}
