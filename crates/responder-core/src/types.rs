//! Core types for Responder

use serde::{Deserialize, Serialize};
use std::collections::hash_map;
use std::collections::HashMap;

use crate::Result;

/// A single security alert under evaluation
///
/// Field names map to field values. Rules may read the alert and enrich it
/// with additional fields while it passes through the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alert {
    fields: HashMap<String, String>,
}

impl Alert {
    /// Create an empty alert
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an alert from a flat JSON object of string fields
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the alert as a JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Get a field value
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Set a field, returning the previous value if there was one
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(field.into(), value.into())
    }

    /// Remove a field
    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.fields.remove(field)
    }

    /// Check whether a field is present
    pub fn contains_key(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over all fields in arbitrary order
    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.fields.iter()
    }
}

impl From<HashMap<String, String>> for Alert {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

impl<K, V> FromIterator<(K, V)> for Alert
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Alert {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Outcome of a single rule evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// The rule matched the alert
    Match,

    /// The rule did not match; evaluation moves on to the next rule
    NoMatch,

    /// The rule matched and decided the alert should be dropped
    Filtered,
}

impl Verdict {
    /// Whether this verdict ends the rule chain
    pub fn is_terminal(self) -> bool {
        !matches!(self, Verdict::NoMatch)
    }
}
