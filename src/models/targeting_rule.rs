//! Targeting rule model
//!
//! A targeting rule scopes one campaign to a set of values of one request
//! dimension. The `values` column has been written in several shapes over
//! time, so decoding it is centralised in [`RuleValues::decode`].

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::{postgres::PgRow, FromRow, Row};

use crate::constants::rule_types;

/// Targeting rule database model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetingRule {
    pub id: String,
    pub campaign_id: String,
    /// `app`, `country` or `os`; compared case-insensitively
    pub dimension: String,
    pub rule_type: RuleType,
    pub values: RuleValues,
}

/// Rule policy
///
/// Stored strings other than `INCLUDE` and `EXCLUDE` are kept verbatim in
/// [`RuleType::Unrecognized`] so they can be reported and failed closed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleType {
    Include,
    Exclude,
    Unrecognized(String),
}

impl RuleType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Include => rule_types::INCLUDE,
            Self::Exclude => rule_types::EXCLUDE,
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for RuleType {
    fn from(raw: &str) -> Self {
        match raw {
            rule_types::INCLUDE => Self::Include,
            rule_types::EXCLUDE => Self::Exclude,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for RuleType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            rule_types::INCLUDE => Self::Include,
            rule_types::EXCLUDE => Self::Exclude,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl From<RuleType> for String {
    fn from(rule_type: RuleType) -> Self {
        match rule_type {
            RuleType::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for RuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `values` column as it comes out of the store
#[derive(Debug, Clone, Copy)]
pub enum StoredValues<'a> {
    /// Native string list (e.g. a `text[]` column); taken as-is
    List(&'a [String]),
    /// Textual column: a JSON array or a comma-separated list
    Text(&'a str),
    /// Raw bytes holding the same two textual shapes
    Bytes(&'a [u8]),
    Null,
}

/// Ordered rule values; evaluated as a case-insensitive set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleValues(Vec<String>);

impl RuleValues {
    pub fn new(values: Vec<String>) -> Self {
        Self(values)
    }

    /// Decode a stored `values` column.
    ///
    /// Precedence:
    /// 1. native lists are used without re-decoding;
    /// 2. text and bytes are first decoded as a JSON array of strings;
    /// 3. when that fails, they are split on `,` and each item is trimmed.
    ///
    /// `NULL` and a JSON `null` both decode to an empty list.
    pub fn decode(stored: StoredValues<'_>) -> Self {
        match stored {
            StoredValues::Null => Self::default(),
            StoredValues::List(values) => Self(values.to_vec()),
            StoredValues::Bytes(raw) => match serde_json::from_slice::<Option<Vec<String>>>(raw) {
                Ok(values) => Self(values.unwrap_or_default()),
                Err(_) => Self::split_delimited(&String::from_utf8_lossy(raw)),
            },
            StoredValues::Text(raw) => match serde_json::from_str::<Option<Vec<String>>>(raw) {
                Ok(values) => Self(values.unwrap_or_default()),
                Err(_) => Self::split_delimited(raw),
            },
        }
    }

    fn split_delimited(raw: &str) -> Self {
        Self(raw.split(',').map(|v| v.trim().to_string()).collect())
    }

    /// Lowercased membership set
    pub fn normalized_set(&self) -> HashSet<String> {
        self.0.iter().map(|v| v.to_lowercase()).collect()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for RuleValues {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl<'de> Deserialize<'de> for RuleValues {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            List(Vec<String>),
            Text(String),
        }

        Ok(match Option::<Repr>::deserialize(deserializer)? {
            None => Self::decode(StoredValues::Null),
            Some(Repr::List(values)) => Self::decode(StoredValues::List(&values)),
            Some(Repr::Text(raw)) => Self::decode(StoredValues::Text(&raw)),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for TargetingRule {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let rule_type: String = row.try_get("rule_type")?;

        Ok(Self {
            id: row.try_get("id")?,
            campaign_id: row.try_get("campaign_id")?,
            dimension: row.try_get("dimension")?,
            rule_type: RuleType::from(rule_type),
            values: decode_values_column(row, "values")?,
        })
    }
}

/// A `values` column read through the first Postgres type it decodes as
#[derive(Debug, Clone, PartialEq)]
enum ValuesColumn {
    /// `text[]` / `varchar[]`
    List(Option<Vec<String>>),
    /// `text` / `varchar`
    Text(Option<String>),
    /// `json` / `jsonb`
    Json(Option<serde_json::Value>),
}

impl ValuesColumn {
    /// Try the column as each supported type in turn; `try_get` rejects incompatible ones
    fn read(row: &PgRow, column: &str) -> Result<Self, sqlx::Error> {
        if let Ok(values) = row.try_get::<Option<Vec<String>>, _>(column) {
            return Ok(Self::List(values));
        }

        if let Ok(raw) = row.try_get::<Option<String>, _>(column) {
            return Ok(Self::Text(raw));
        }

        Ok(Self::Json(row.try_get(column)?))
    }

    fn into_rule_values(self) -> RuleValues {
        match self {
            Self::List(Some(values)) => RuleValues::decode(StoredValues::List(&values)),
            Self::Text(Some(raw)) => RuleValues::decode(StoredValues::Text(&raw)),
            Self::Json(Some(serde_json::Value::String(raw))) => {
                RuleValues::decode(StoredValues::Text(&raw))
            }
            Self::Json(Some(serde_json::Value::Null)) => RuleValues::decode(StoredValues::Null),
            Self::Json(Some(other)) => RuleValues::decode(StoredValues::Text(&other.to_string())),
            Self::List(None) | Self::Text(None) | Self::Json(None) => {
                RuleValues::decode(StoredValues::Null)
            }
        }
    }
}

/// Decode a `values` column whatever its Postgres type is
fn decode_values_column(row: &PgRow, column: &str) -> Result<RuleValues, sqlx::Error> {
    ValuesColumn::read(row, column).map(ValuesColumn::into_rule_values)
}
