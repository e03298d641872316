use serde_json::Value;
use tstamp_engine::export::{CONTENT_TYPE, timestamp_id};
use tstamp_engine::{ExportFormat, render};
use tstamp_types::{FieldSpec, FileRecord, LineEnding};

fn sample_records() -> Vec<FileRecord> {
    (1..=4)
        .map(|i| FileRecord {
            provider: Some(if i % 2 == 0 { "s3" } else { "osfstorage" }.to_string()),
            file_id: Some(format!("file-{}", i)),
            file_path: Some(format!("/project/data/sample_{}.dat", i)),
            file_version: Some(i.to_string()),
            project_id: Some("proj1".to_string()),
            verify_user_id: Some("user7".to_string()),
            verify_date: Some(format!("2024/05/0{} 12:00:0{}", i, i)),
            ..Default::default()
        })
        .collect()
}

fn wide_fields() -> FieldSpec {
    FieldSpec::new(
        ["file_id", "file_name", "provider", "file_version", "verify_date"],
        [
            ("file_id", "File ID"),
            ("file_name", "File Name"),
            ("provider", "Provider"),
            ("file_version", "Version"),
            ("verify_date", "Verified At"),
        ],
    )
}

#[test]
fn test_csv_columns_follow_field_order() {
    let records = sample_records();
    let refs: Vec<&FileRecord> = records.iter().collect();
    let fields = wide_fields();

    let csv = render(ExportFormat::Csv, &refs, &fields, LineEnding::Lf).unwrap();
    let lines: Vec<&str> = csv.split('\n').collect();

    assert_eq!(lines.len(), records.len() + 1);
    let header: Vec<&str> = lines[0].split(',').collect();
    let expected_header: Vec<&str> = fields.order.iter().map(|k| fields.label(k)).collect();
    assert_eq!(header, expected_header);

    for (line, record) in lines[1..].iter().zip(&records) {
        let cells: Vec<&str> = line.split(',').collect();
        assert_eq!(cells.len(), fields.len());
        for (cell, key) in cells.iter().zip(&fields.order) {
            assert_eq!(*cell, record.text(key));
        }
    }
}

#[test]
fn test_json_objects_keyed_by_labels_in_order() {
    let records = sample_records();
    let refs: Vec<&FileRecord> = records.iter().collect();
    let fields = wide_fields();

    let json = render(ExportFormat::JsonLd, &refs, &fields, LineEnding::CrLf).unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), records.len());

    let labels: Vec<&str> = fields.order.iter().map(|k| fields.label(k)).collect();
    for (row, record) in rows.iter().zip(&records) {
        let object = row.as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, labels);
        for key in &fields.order {
            assert_eq!(object[fields.label(key)], record.text(key));
        }
    }
}

#[test]
fn test_rdf_contains_one_timestamp_per_record() {
    let records = sample_records();
    let refs: Vec<&FileRecord> = records.iter().collect();

    let rdf = render(ExportFormat::RdfXml, &refs, &FieldSpec::default(), LineEnding::Lf).unwrap();
    assert_eq!(rdf.matches("<rdmr:Timestamp ").count(), records.len());
    for record in &records {
        assert!(rdf.contains(&timestamp_id(record)));
    }
    assert!(rdf.contains(
        "https://rdf.rdm.nii.ac.jp/resource/ts/proj1/file-1/user7/2024-05-01_12-00-01"
    ));
}

#[test]
fn test_rdf_identifier_for_space_separated_date() {
    let record = FileRecord {
        project_id: Some("P1".to_string()),
        file_id: Some("F1".to_string()),
        verify_user_id: Some("U1".to_string()),
        verify_date: Some("2024-01-02 03:04:05".to_string()),
        ..Default::default()
    };
    assert_eq!(
        timestamp_id(&record),
        "https://rdf.rdm.nii.ac.jp/resource/ts/P1/F1/U1/2024-01-02_03-04-05"
    );
}

#[test]
fn test_content_type_is_plain_utf8() {
    assert_eq!(CONTENT_TYPE, "text/plain; charset=utf-8");
}
