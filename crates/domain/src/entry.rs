use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct EntryId(i64);

impl EntryId {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::InvalidEntryId(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for EntryId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, DomainError> {
        Self::new(value)
    }
}

impl From<EntryId> for i64 {
    fn from(value: EntryId) -> i64 {
        value.get()
    }
}

/// One catalog entry as the pages see it. Only `id` and `title` are
/// required; the remaining fields default when absent and are dropped
/// from the serialized form when empty, so a minimal entry round-trips
/// without padding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntry {
    pub id: EntryId,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,
    #[serde(default, skip_serializing_if = "rating_is_unset")]
    pub rating: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pic: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub intro: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub press: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub price: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,
}

fn rating_is_unset(rating: &f64) -> bool {
    *rating == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_id_must_be_positive() {
        assert!(EntryId::new(1).is_ok());
        assert!(matches!(
            EntryId::new(0),
            Err(DomainError::InvalidEntryId(0))
        ));
        assert!(matches!(
            EntryId::new(-3),
            Err(DomainError::InvalidEntryId(-3))
        ));
    }

    #[test]
    fn minimal_entry_serializes_without_padding() {
        let entry: BookEntry = serde_json::from_str(r#"{"id":1,"title":"A"}"#).expect("parse");
        assert_eq!(entry.id.get(), 1);
        assert_eq!(entry.title, "A");
        assert!(entry.author.is_empty());

        let json = serde_json::to_string(&entry).expect("serialize");
        assert_eq!(json, r#"{"id":1,"title":"A"}"#);
    }

    #[test]
    fn full_entry_round_trips() {
        let entry: BookEntry = serde_json::from_str(
            r#"{
                "id": 7,
                "title": "The Pragmatic Programmer",
                "author": "Andrew Hunt, David Thomas",
                "rating": 8.9,
                "pic": "https://covers.example/pragprog.jpg",
                "intro": "From journeyman to master.",
                "press": "Addison-Wesley",
                "price": "49.95",
                "tag": "programming"
            }"#,
        )
        .expect("parse");
        assert_eq!(entry.rating, 8.9);

        let json = serde_json::to_string(&entry).expect("serialize");
        let back: BookEntry = serde_json::from_str(&json).expect("reparse");
        assert_eq!(back, entry);
    }

    #[test]
    fn non_positive_id_is_rejected_during_deserialization() {
        let result = serde_json::from_str::<BookEntry>(r#"{"id":0,"title":"A"}"#);
        assert!(result.is_err());
    }
}
