//! In-memory model of the timestamp table: filtering, sorting, paging and
//! row selection.

mod filter;
mod page;
mod sort;

pub use filter::{RecordFilter, parse_day, user_options};
pub use page::{DEFAULT_PAGE_SIZE, PageRequest, PageView, paginate};
pub use sort::{SortColumn, SortOrder, natural_cmp, sort_records};

use tstamp_types::FileRecord;

/// Rows of the table together with their checkbox state.
#[derive(Debug, Clone, Default)]
pub struct TimestampTable {
    records: Vec<FileRecord>,
    checked: Vec<bool>,
}

impl TimestampTable {
    pub fn new(records: Vec<FileRecord>) -> Self {
        let checked = vec![false; records.len()];
        Self { records, checked }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn set_checked(&mut self, index: usize, checked: bool) {
        if let Some(slot) = self.checked.get_mut(index) {
            *slot = checked;
        }
    }

    /// The "select all" checkbox.
    pub fn check_all(&mut self, checked: bool) {
        self.checked.iter_mut().for_each(|slot| *slot = checked);
    }

    /// Check every row whose `file_id` is listed; returns how many rows were
    /// checked.
    pub fn check_file_ids<S: AsRef<str>>(&mut self, file_ids: &[S]) -> usize {
        let mut count = 0;
        for (record, slot) in self.records.iter().zip(self.checked.iter_mut()) {
            let listed = record
                .value("file_id")
                .is_some_and(|id| file_ids.iter().any(|wanted| wanted.as_ref() == id));
            if listed {
                *slot = true;
                count += 1;
            }
        }
        count
    }

    /// Checked rows in table order.
    pub fn checked_records(&self) -> Vec<&FileRecord> {
        self.records
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(record, _)| record)
            .collect()
    }

    /// Users offered by the user filter.
    pub fn user_options(&self) -> Vec<String> {
        user_options(&self.records)
    }

    /// Filter, optionally sort, then paginate.
    pub fn view(
        &self,
        filter: &RecordFilter,
        sort: Option<(SortColumn, SortOrder)>,
        request: PageRequest,
    ) -> PageView<'_> {
        let mut matching: Vec<&FileRecord> = self
            .records
            .iter()
            .filter(|record| filter.matches(record))
            .collect();
        if let Some((column, order)) = sort {
            sort_records(&mut matching, column, order);
        }
        paginate(&matching, self.records.len(), request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TimestampTable {
        let records = (1..=3)
            .map(|i| FileRecord {
                file_id: Some(format!("f{}", i)),
                provider: Some("osfstorage".to_string()),
                file_path: Some(format!("/file{}.txt", i)),
                verify_user_name_id: Some(if i == 2 { "bob" } else { "alice" }.to_string()),
                ..Default::default()
            })
            .collect();
        TimestampTable::new(records)
    }

    #[test]
    fn test_selection() {
        let mut table = table();
        assert!(table.checked_records().is_empty());

        assert_eq!(table.check_file_ids(&["f3", "f1", "missing"]), 2);
        let ids: Vec<_> = table
            .checked_records()
            .iter()
            .map(|r| r.text("file_id"))
            .collect();
        assert_eq!(ids, vec!["f1", "f3"]);

        table.set_checked(0, false);
        assert_eq!(table.checked_records().len(), 1);

        table.check_all(true);
        assert_eq!(table.checked_records().len(), 3);
        table.check_all(false);
        assert!(table.checked_records().is_empty());
    }

    #[test]
    fn test_view_filters_and_sorts() {
        let table = table();
        let view = table.view(
            &RecordFilter::new().user("alice"),
            Some((SortColumn::FilePath, SortOrder::Desc)),
            PageRequest::default(),
        );
        let paths: Vec<_> = view.items.iter().map(|r| r.text("file_path")).collect();
        assert_eq!(paths, vec!["/file3.txt", "/file1.txt"]);
        assert_eq!(view.matching, 2);
        assert_eq!(table.user_options(), vec!["alice", "bob"]);
    }
}
