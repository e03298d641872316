use serde::{Deserialize, Serialize};

use crate::util::opaque;

/// Every key a [`FileRecord`] answers to, in table column order.
///
/// `file_name` is derived from `file_path` and is not stored.
pub const FIELD_KEYS: [&str; 23] = [
    "provider",
    "creator_name",
    "creator_email",
    "creator_id",
    "creator_institution",
    "file_path",
    "file_name",
    "file_id",
    "file_create_date_on_upload",
    "file_create_date_on_verify",
    "file_modify_date_on_upload",
    "file_modify_date_on_verify",
    "file_size_on_upload",
    "file_size_on_verify",
    "file_version",
    "project_id",
    "organization_id",
    "organization_name",
    "verify_user_id",
    "verify_user_name",
    "verify_date",
    "verify_result_title",
    "verify_user_name_id",
];

/// One row of the timestamp table, as delivered by the server.
///
/// Values are opaque: numbers are kept in their textual form and nothing is
/// validated locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub creator_name: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub creator_email: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub creator_institution: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub file_create_date_on_upload: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub file_create_date_on_verify: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub file_modify_date_on_upload: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub file_modify_date_on_verify: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub file_size_on_upload: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub file_size_on_verify: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub file_version: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub verify_user_id: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub verify_user_name: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub verify_date: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub verify_result_title: Option<String>,
    #[serde(default, deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub verify_user_name_id: Option<String>,
}

impl FileRecord {
    /// Look a field up by key, including the derived `file_name`.
    ///
    /// Unknown keys and absent values both yield `None`.
    pub fn value(&self, key: &str) -> Option<&str> {
        let field = match key {
            "provider" => &self.provider,
            "creator_name" => &self.creator_name,
            "creator_email" => &self.creator_email,
            "creator_id" => &self.creator_id,
            "creator_institution" => &self.creator_institution,
            "file_path" => &self.file_path,
            "file_name" => return self.file_name(),
            "file_id" => &self.file_id,
            "file_create_date_on_upload" => &self.file_create_date_on_upload,
            "file_create_date_on_verify" => &self.file_create_date_on_verify,
            "file_modify_date_on_upload" => &self.file_modify_date_on_upload,
            "file_modify_date_on_verify" => &self.file_modify_date_on_verify,
            "file_size_on_upload" => &self.file_size_on_upload,
            "file_size_on_verify" => &self.file_size_on_verify,
            "file_version" => &self.file_version,
            "project_id" => &self.project_id,
            "organization_id" => &self.organization_id,
            "organization_name" => &self.organization_name,
            "verify_user_id" => &self.verify_user_id,
            "verify_user_name" => &self.verify_user_name,
            "verify_date" => &self.verify_date,
            "verify_result_title" => &self.verify_result_title,
            "verify_user_name_id" => &self.verify_user_name_id,
            _ => return None,
        };
        field.as_deref()
    }

    /// Last `/`-separated segment of `file_path`.
    pub fn file_name(&self) -> Option<&str> {
        self.file_path
            .as_deref()
            .and_then(|path| path.rsplit('/').next())
    }

    /// Value of `key`, or the empty string when absent.
    pub fn text(&self, key: &str) -> &str {
        self.value(key).unwrap_or("")
    }

    /// Parse a JSON array of records.
    pub fn parse_list(json: &str) -> crate::Result<Vec<FileRecord>> {
        Ok(serde_json::from_str(json)?)
    }
}
