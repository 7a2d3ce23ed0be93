//! Per-invocation field values supplied by the form-collection layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A mapping from field name to field value for a single assembly call.
///
/// Values live only for the call; nothing is persisted. The map serializes
/// transparently as a JSON object, which is the shape the CLI and demos read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(BTreeMap<String, String>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion, convenient for demos and tests.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    /// Returns the raw value of a field, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// True when the field is absent or holds only whitespace.
    ///
    /// This is the presence test document validation uses; values themselves
    /// are never trimmed on substitution.
    pub fn is_blank(&self, name: &str) -> bool {
        match self.0.get(name) {
            Some(value) => value.trim().is_empty(),
            None => true,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, String>> for FieldValues {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        let fields = FieldValues::new()
            .with("officerName", "Insp. Rao")
            .with("offence", "   ");
        assert!(!fields.is_blank("officerName"));
        assert!(fields.is_blank("offence"));
        assert!(fields.is_blank("missing"));
    }

    #[test]
    fn values_are_kept_verbatim() {
        let fields = FieldValues::new().with("offence", "  theft  ");
        assert_eq!(fields.get("offence"), Some("  theft  "));
    }
}
