use serde::{Deserialize, Serialize};

use crate::util::opaque_or_empty;

/// Body returned by the verify-list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyListResponse {
    #[serde(default)]
    pub provider_list: Vec<ProviderFiles>,
}

impl VerifyListResponse {
    /// Number of files across every provider group.
    pub fn total_files(&self) -> usize {
        self.provider_list
            .iter()
            .map(|group| group.provider_file_list.len())
            .sum()
    }
}

/// Files stored under one storage provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderFiles {
    #[serde(default, deserialize_with = "opaque_or_empty")]
    pub provider: String,
    #[serde(default)]
    pub provider_file_list: Vec<FileDescriptor>,
}

/// A stored file as listed for verification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    #[serde(default, deserialize_with = "opaque_or_empty")]
    pub file_id: String,
    #[serde(default, deserialize_with = "opaque_or_empty")]
    pub file_path: String,
    #[serde(default, deserialize_with = "opaque_or_empty")]
    pub size: String,
    #[serde(default, deserialize_with = "opaque_or_empty")]
    pub created: String,
    #[serde(default, deserialize_with = "opaque_or_empty")]
    pub modified: String,
    #[serde(default, deserialize_with = "opaque_or_empty")]
    pub file_version: String,
}
