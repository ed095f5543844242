use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Keeps an explicit `null` apart from an absent key: absent is `None`, `null` is `Some(None)`.
fn nullable<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

/// Attributes accepted when creating or updating an author.
///
/// Each field is tri-state: `None` leaves the stored value as is, `Some(None)` clears it,
/// `Some(Some(v))` writes `v`. `name` can never be cleared; the store rejects `Some(None)`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorPayload {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub nationality: Option<Option<String>>,
    #[serde(default, alias = "birthDate", deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub active: Option<Option<bool>>,
}

/// Attributes accepted when creating or updating a book. `title` is required on create.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookPayload {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub isbn: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Option<String>>,
    #[serde(default, alias = "publicationYear", deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub pages: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub price: Option<Option<Decimal>>,
}
