use tstamp_types::{FieldSpec, FileRecord, LineEnding};

/// Header row of labels, then one unquoted row per record.
///
/// The header is always followed by a line terminator; the last data row is
/// not. Values are written verbatim, so embedded commas or newlines are not
/// escaped. Absent values become empty cells, and a row with no values at all
/// is an empty line.
pub fn generate_csv(
    records: &[&FileRecord],
    fields: &FieldSpec,
    line_ending: LineEnding,
) -> crate::Result<String> {
    let newline = line_ending.as_str();

    let header: Vec<&str> = fields.columns().map(|(_, label)| label).collect();
    let rows: Vec<String> = records
        .iter()
        .map(|record| {
            let cells: Vec<&str> = fields.order.iter().map(|key| record.text(key)).collect();
            cells.join(",")
        })
        .collect();

    Ok(format!("{}{}{}", header.join(","), newline, rows.join(newline)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, provider: &str, version: &str) -> FileRecord {
        FileRecord {
            file_path: Some(path.to_string()),
            provider: Some(provider.to_string()),
            file_version: Some(version.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_header_and_rows_in_field_order() {
        let a = record("/a.txt", "osfstorage", "1");
        let b = record("/dir/b.txt", "s3", "4");
        let csv = generate_csv(&[&a, &b], &FieldSpec::default(), LineEnding::Lf).unwrap();

        insta::assert_snapshot!(csv, @r"
        File Path,Provider,Version
        /a.txt,osfstorage,1
        /dir/b.txt,s3,4
        ");
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_empty_record_list_keeps_header_terminator() {
        let csv = generate_csv(&[], &FieldSpec::default(), LineEnding::Lf).unwrap();
        assert_eq!(csv, "File Path,Provider,Version\n");
    }

    #[test]
    fn test_crlf_terminators() {
        let a = record("/a.txt", "osfstorage", "1");
        let b = record("/b.txt", "osfstorage", "2");
        let csv = generate_csv(&[&a, &b], &FieldSpec::default(), LineEnding::CrLf).unwrap();
        assert_eq!(
            csv,
            "File Path,Provider,Version\r\n/a.txt,osfstorage,1\r\n/b.txt,osfstorage,2"
        );
    }

    #[test]
    fn test_values_are_not_quoted() {
        let a = record("/with,comma.txt", "osfstorage", "1");
        let csv = generate_csv(&[&a], &FieldSpec::default(), LineEnding::Lf).unwrap();
        assert_eq!(csv.lines().nth(1), Some("/with,comma.txt,osfstorage,1"));
    }

    #[test]
    fn test_missing_value_is_empty_cell() {
        let a = FileRecord {
            file_path: Some("/a.txt".to_string()),
            ..Default::default()
        };
        let csv = generate_csv(&[&a], &FieldSpec::default(), LineEnding::Lf).unwrap();
        assert_eq!(csv.lines().nth(1), Some("/a.txt,,"));
    }

    #[test]
    fn test_single_column_missing_value_is_an_empty_line() {
        let fields = FieldSpec::new(["file_version"], [("file_version", "Version")]);
        let a = FileRecord {
            file_path: Some("/a".to_string()),
            ..Default::default()
        };
        let b = FileRecord {
            file_version: Some("2".to_string()),
            ..Default::default()
        };

        let csv = generate_csv(&[&a, &b], &fields, LineEnding::Lf).unwrap();
        assert_eq!(csv, "Version\n\n2");
    }
}
