use serde_json::{Map, Value};
use tstamp_types::{FieldSpec, FileRecord, LineEnding};

/// Array of objects keyed by display label, pretty-printed with two spaces.
///
/// Key order follows the field order. Fields without a value are left out of
/// the object rather than written as `null`.
pub fn generate_json(
    records: &[&FileRecord],
    fields: &FieldSpec,
    line_ending: LineEnding,
) -> crate::Result<String> {
    let rows: Vec<Value> = records
        .iter()
        .map(|record| {
            let mut object = Map::new();
            for (key, label) in fields.columns() {
                if let Some(value) = record.value(key) {
                    object.insert(label.to_string(), Value::String(value.to_string()));
                }
            }
            Value::Object(object)
        })
        .collect();

    let text = serde_json::to_string_pretty(&rows)?;
    Ok(line_ending.apply(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_become_keys() {
        let record = FileRecord {
            file_path: Some("/a.txt".to_string()),
            provider: Some("osfstorage".to_string()),
            file_version: Some("3".to_string()),
            file_id: Some("ignored".to_string()),
            ..Default::default()
        };
        let json = generate_json(&[&record], &FieldSpec::default(), LineEnding::Lf).unwrap();

        insta::assert_snapshot!(json, @r#"
        [
          {
            "File Path": "/a.txt",
            "Provider": "osfstorage",
            "Version": "3"
          }
        ]
        "#);
    }

    #[test]
    fn test_absent_values_are_omitted() {
        let record = FileRecord {
            provider: Some("s3".to_string()),
            ..Default::default()
        };
        let json = generate_json(&[&record], &FieldSpec::default(), LineEnding::Lf).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        let object = parsed[0].as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["Provider"], "s3");
    }

    #[test]
    fn test_empty_selection_is_empty_array() {
        let json = generate_json(&[], &FieldSpec::default(), LineEnding::CrLf).unwrap();
        assert_eq!(json, "[]");
    }

    #[test]
    fn test_crlf_applied_after_serialization() {
        let record = FileRecord {
            provider: Some("s3".to_string()),
            ..Default::default()
        };
        let json = generate_json(&[&record], &FieldSpec::default(), LineEnding::CrLf).unwrap();
        assert!(json.contains("[\r\n  {\r\n"));
        assert!(!json.replace("\r\n", "").contains('\n'));
    }
}
