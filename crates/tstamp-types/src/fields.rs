use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered export columns plus their display names.
///
/// The order drives CSV columns and JSON key order; labels are only used for
/// the CSV header row and JSON keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    #[serde(default = "default_order")]
    pub order: Vec<String>,
    #[serde(default = "default_labels")]
    pub labels: BTreeMap<String, String>,
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self {
            order: default_order(),
            labels: default_labels(),
        }
    }
}

impl FieldSpec {
    pub fn new<K, L>(order: impl IntoIterator<Item = K>, labels: impl IntoIterator<Item = (K, L)>) -> Self
    where
        K: Into<String>,
        L: Into<String>,
    {
        Self {
            order: order.into_iter().map(Into::into).collect(),
            labels: labels
                .into_iter()
                .map(|(k, l)| (k.into(), l.into()))
                .collect(),
        }
    }

    /// Display name for `key`, falling back to the key itself.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.get(key).map(String::as_str).unwrap_or(key)
    }

    /// `(key, label)` pairs in output order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().map(|key| (key.as_str(), self.label(key)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn default_order() -> Vec<String> {
    ["file_path", "provider", "file_version"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_labels() -> BTreeMap<String, String> {
    [
        ("provider", "Provider"),
        ("file_id", "File ID"),
        ("file_path", "File Path"),
        ("file_version", "Version"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
