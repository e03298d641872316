use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tstamp_types::FileRecord;

const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Calendar day of a server or user supplied date string.
///
/// Time of day is discarded so that a record verified at any time on the
/// filter day matches that day.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Row filter combining the user selector and the date range inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub user: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        let user = user.into();
        self.user = (!user.is_empty()).then_some(user);
        self
    }

    pub fn start(mut self, day: NaiveDate) -> Self {
        self.start = Some(day);
        self
    }

    pub fn end(mut self, day: NaiveDate) -> Self {
        self.end = Some(day);
        self
    }

    /// Every active filter must accept the record.
    pub fn matches(&self, record: &FileRecord) -> bool {
        self.user_matches(record) && self.date_matches(record)
    }

    fn user_matches(&self, record: &FileRecord) -> bool {
        let Some(user) = &self.user else {
            return true;
        };
        match record.value("verify_user_name_id") {
            None | Some("") => true,
            Some(record_user) => record_user == user,
        }
    }

    fn date_matches(&self, record: &FileRecord) -> bool {
        if self.start.is_none() && self.end.is_none() {
            return true;
        }
        let verify_date = match record.value("verify_date") {
            None | Some("") => return true,
            Some(date) => date,
        };
        // unparseable dates never satisfy an active range bound
        let Some(day) = parse_day(verify_date) else {
            return false;
        };
        self.start.is_none_or(|start| day >= start) && self.end.is_none_or(|end| day <= end)
    }
}

/// Distinct non-empty `verify_user_name_id` values, in first-seen order.
pub fn user_options<'a>(records: impl IntoIterator<Item = &'a FileRecord>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for record in records {
        if let Some(user) = record.value("verify_user_name_id")
            && !user.is_empty()
            && !seen.iter().any(|s| s == user)
        {
            seen.push(user.to_string());
        }
    }
    seen
}
