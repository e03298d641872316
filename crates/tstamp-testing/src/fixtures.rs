//! Sample records and verify listings.
//!
//! Records are numbered so tests can refer to them by index: record `n`
//! has file id `F{n}` and path `/data/file{n}.txt`.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tstamp_types::{FileDescriptor, FileRecord, ProviderFiles};

/// A fully populated record.
pub fn sample_record(n: usize) -> FileRecord {
    FileRecord {
        provider: Some("osfstorage".to_string()),
        creator_name: Some(format!("Creator {}", n)),
        creator_email: Some(format!("creator{}@example.org", n)),
        creator_id: Some(format!("c{}", n)),
        creator_institution: Some("NII".to_string()),
        file_path: Some(format!("/data/file{}.txt", n)),
        file_id: Some(format!("F{}", n)),
        file_create_date_on_upload: Some("2024-01-01 09:00:00".to_string()),
        file_create_date_on_verify: Some("2024-01-01 09:00:00".to_string()),
        file_modify_date_on_upload: Some("2024-01-02 10:00:00".to_string()),
        file_modify_date_on_verify: Some("2024-01-02 10:00:00".to_string()),
        file_size_on_upload: Some(format!("{}", 1024 * n)),
        file_size_on_verify: Some(format!("{}", 1024 * n)),
        file_version: Some(n.to_string()),
        project_id: Some("P1".to_string()),
        organization_id: Some("O1".to_string()),
        organization_name: Some("Org".to_string()),
        verify_user_id: Some("U1".to_string()),
        verify_user_name: Some("Verifier".to_string()),
        verify_date: Some(format!("2024-01-{:02} 03:04:05", n.clamp(1, 28))),
        verify_result_title: Some("OK".to_string()),
        verify_user_name_id: Some("Verifier (U1)".to_string()),
    }
}

/// Records `1..=count`.
pub fn sample_records(count: usize) -> Vec<FileRecord> {
    (1..=count).map(sample_record).collect()
}

/// One provider group listing `paths`; file ids follow the path order.
pub fn provider_group(provider: &str, paths: &[&str]) -> ProviderFiles {
    ProviderFiles {
        provider: provider.to_string(),
        provider_file_list: paths
            .iter()
            .enumerate()
            .map(|(i, path)| FileDescriptor {
                file_id: format!("{}-{}", provider, i + 1),
                file_path: path.to_string(),
                size: "10".to_string(),
                created: "2024-01-01 00:00:00".to_string(),
                modified: "2024-01-01 00:00:00".to_string(),
                file_version: "1".to_string(),
            })
            .collect(),
    }
}

/// Write `records` as a JSON array to `dir/name` and return its path.
pub fn write_records(dir: &Path, name: &str, records: &[FileRecord]) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(records)?)?;
    Ok(path)
}
