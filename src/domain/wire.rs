//! Wire shapes of the Deck stacks endpoint
//!
//! These mirror the JSON the server sends, leniently: every field is optional
//! and unknown fields are ignored. Nothing here is ordered or validated; that
//! is the normalizer's job (see [`super::board::build_grouped_model`]).

use serde::Deserialize;

/// A stack (list/column) as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawStack {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub order: Option<i64>,

    /// Cards are omitted (or null) for stacks the endpoint did not expand
    #[serde(default)]
    pub cards: Option<Vec<RawCard>>,
}

/// A card as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCard {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub order: Option<i64>,

    #[serde(default)]
    pub archived: Option<bool>,

    #[serde(default)]
    pub duedate: Option<String>,

    #[serde(default)]
    pub owner: Option<RawUser>,

    #[serde(default, rename = "assignedUsers")]
    pub assigned_users: Option<Vec<RawUser>>,

    #[serde(default)]
    pub labels: Option<Vec<RawLabel>>,
}

/// A label attached to a card
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawLabel {
    #[serde(default)]
    pub title: Option<String>,
}

/// A user reference
///
/// Deck sends owners either as a bare user id or as a user record, and
/// assignments wrap the record in a `participant` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawUser {
    Id(String),
    Record(UserRecord),
}

/// Object form of [`RawUser`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub displayname: Option<String>,

    #[serde(default, rename = "primaryKey")]
    pub primary_key: Option<String>,

    #[serde(default)]
    pub uid: Option<String>,

    #[serde(default)]
    pub participant: Option<Box<RawUser>>,
}
