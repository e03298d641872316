use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tstamp_types::FileRecord;

/// Columns the table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Provider,
    FilePath,
    VerifyUserNameId,
    VerifyDate,
    VerifyResultTitle,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Provider,
        SortColumn::FilePath,
        SortColumn::VerifyUserNameId,
        SortColumn::VerifyDate,
        SortColumn::VerifyResultTitle,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SortColumn::Provider => "provider",
            SortColumn::FilePath => "file_path",
            SortColumn::VerifyUserNameId => "verify_user_name_id",
            SortColumn::VerifyDate => "verify_date",
            SortColumn::VerifyResultTitle => "verify_result_title",
        }
    }
}

impl FromStr for SortColumn {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortColumn::ALL
            .into_iter()
            .find(|column| column.key() == s)
            .ok_or_else(|| crate::Error::InvalidInput(format!("Unknown sort column: {}", s)))
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Order rows by provider first, then by `column`.
///
/// Both comparisons are case-insensitive natural comparisons. Descending
/// order reverses the whole comparison, provider grouping included. The sort
/// is stable.
pub fn sort_records(records: &mut [&FileRecord], column: SortColumn, order: SortOrder) {
    records.sort_by(|a, b| {
        let provider = natural_cmp(a.text("provider"), b.text("provider"));
        let ordering = if a.text("provider") != b.text("provider") {
            provider
        } else {
            natural_cmp(a.text(column.key()), b.text(column.key()))
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(String),
}

fn chunks(value: &str) -> Vec<Chunk<'_>> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_digits: Option<bool> = None;

    for (index, c) in value.char_indices() {
        let is_digit = c.is_ascii_digit();
        if let Some(current) = in_digits
            && current != is_digit
        {
            chunks.push(make_chunk(&value[start..index], current));
            start = index;
        }
        in_digits = Some(is_digit);
    }
    if let Some(current) = in_digits {
        chunks.push(make_chunk(&value[start..], current));
    }
    chunks
}

fn make_chunk(part: &str, digits: bool) -> Chunk<'_> {
    if digits {
        Chunk::Digits(part)
    } else {
        Chunk::Text(part.to_lowercase())
    }
}

fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a_trim = a.trim_start_matches('0');
    let b_trim = b.trim_start_matches('0');
    a_trim
        .len()
        .cmp(&b_trim.len())
        .then_with(|| a_trim.cmp(b_trim))
        .then_with(|| a.len().cmp(&b.len()))
}

/// Case-insensitive natural comparison: digit runs compare by numeric value,
/// so `file2` sorts before `file10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left = chunks(a);
    let right = chunks(b);

    for (l, r) in left.iter().zip(right.iter()) {
        let ordering = match (l, r) {
            (Chunk::Digits(x), Chunk::Digits(y)) => cmp_digits(x, y),
            (Chunk::Text(x), Chunk::Text(y)) => x.cmp(y),
            (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    left.len().cmp(&right.len())
}
