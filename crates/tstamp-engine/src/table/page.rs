use tstamp_types::FileRecord;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Which page of the matching rows to show. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }
}

/// One page of matching rows plus the state of the pager controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    pub items: Vec<&'a FileRecord>,
    /// 1-based index of the first item on this page.
    pub start: usize,
    pub page: usize,
    pub page_count: usize,
    pub matching: usize,
    pub is_first: bool,
    pub is_last: bool,
    /// Pager is only shown when the whole table exceeds one page.
    pub show_pagination: bool,
}

/// Cut `matching` down to the requested page.
///
/// `total_items` is the unfiltered table size and only decides whether the
/// pager is shown. A page past the end is clamped to the last page.
pub fn paginate<'a>(
    matching: &[&'a FileRecord],
    total_items: usize,
    request: PageRequest,
) -> PageView<'a> {
    let page_size = request.page_size.max(1);
    let page_count = matching.len().div_ceil(page_size).max(1);
    let page = request.page.clamp(1, page_count);
    let start = (page - 1) * page_size + 1;

    let items = matching
        .iter()
        .skip(start - 1)
        .take(page_size)
        .copied()
        .collect();

    PageView {
        items,
        start,
        page,
        page_count,
        matching: matching.len(),
        is_first: start == 1,
        is_last: start as isize > matching.len() as isize - page_size as isize,
        show_pagination: total_items > page_size,
    }
}
