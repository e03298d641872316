use super::selection::load_table;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tstamp_engine::table::parse_day;
use tstamp_engine::{PageRequest, PageView, RecordFilter, SortColumn, SortOrder};
use tstamp_runtime::Config;

const COLUMNS: [(&str, &str); 6] = [
    ("file_id", "FILE ID"),
    ("provider", "PROVIDER"),
    ("file_path", "FILE PATH"),
    ("verify_user_name_id", "USER"),
    ("verify_date", "VERIFY DATE"),
    ("verify_result_title", "RESULT"),
];

pub struct ListOptions {
    pub records: PathBuf,
    pub user: Option<String>,
    pub since: Option<String>,
    pub until: Option<String>,
    pub sort: Option<SortColumn>,
    pub desc: bool,
    pub page: usize,
    pub page_size: Option<usize>,
}

pub fn handle(config: &Config, options: ListOptions) -> Result<()> {
    let table = load_table(&options.records)?;

    let mut filter = RecordFilter::new();
    if let Some(user) = options.user {
        filter = filter.user(user);
    }
    if let Some(since) = options.since.as_deref() {
        let day = parse_day(since).with_context(|| format!("Invalid --since date: {}", since))?;
        filter = filter.start(day);
    }
    if let Some(until) = options.until.as_deref() {
        let day = parse_day(until).with_context(|| format!("Invalid --until date: {}", until))?;
        filter = filter.end(day);
    }

    let order = if options.desc {
        SortOrder::Desc
    } else {
        SortOrder::Asc
    };
    let request = PageRequest::new(
        options.page,
        options.page_size.unwrap_or(config.table.page_size),
    );

    let view = table.view(&filter, options.sort.map(|column| (column, order)), request);
    print!("{}", render(&view));
    Ok(())
}

fn render(view: &PageView<'_>) -> String {
    if view.items.is_empty() {
        return "No matching rows\n".to_string();
    }

    let mut widths: Vec<usize> = COLUMNS.iter().map(|(_, title)| title.len()).collect();
    for record in &view.items {
        for (width, (key, _)) in widths.iter_mut().zip(COLUMNS) {
            *width = (*width).max(record.text(key).chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<&str> = COLUMNS.iter().map(|(_, title)| *title).collect();
    push_row(&mut out, &header, &widths);
    for record in &view.items {
        let cells: Vec<&str> = COLUMNS.iter().map(|(key, _)| record.text(key)).collect();
        push_row(&mut out, &cells, &widths);
    }

    let end = view.start + view.items.len() - 1;
    out.push_str(&format!("\nShowing {}-{} of {}", view.start, end, view.matching));
    if view.show_pagination {
        out.push_str(&format!(" (page {}/{})", view.page, view.page_count));
    }
    out.push('\n');
    out
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
