//! Listing engine: filter, sort, paginate, summarize.
//!
//! Runs over borrowed records and returns borrowed records, so the caller
//! decides when to copy and map them.

use std::cmp::Ordering;

use mailport_core::{EmailFilter, EmailQuery, EmailSort, PageRequest, PaginationSummary};

use crate::record::EmailRecord;

/// Result of running a query: the page slice plus its summary.
pub struct Selection<'a, T> {
    pub items: Vec<&'a T>,
    pub pagination: PaginationSummary,
}

/// Run `query` over `records`.
pub fn select_emails<'a>(
    records: &'a [EmailRecord],
    query: &EmailQuery,
) -> Selection<'a, EmailRecord> {
    let criteria = Criteria::new(&query.filter);
    let mut matched: Vec<&EmailRecord> = records.iter().filter(|r| criteria.matches(r)).collect();

    let sort = query.sort;
    matched.sort_by(|a, b| compare(sort, a, b));

    paginate(matched, query.page)
}

/// Slice an ordered sequence and summarize it.
///
/// Pages past the end are empty; the summary still counts every item.
pub fn paginate<T>(ordered: Vec<&T>, page: PageRequest) -> Selection<'_, T> {
    let total = ordered.len();
    let window = page.window(total);
    let items = ordered
        .into_iter()
        .skip(window.start)
        .take(window.len())
        .collect();

    Selection {
        items,
        pagination: PaginationSummary::new(page, u64::try_from(total).unwrap_or(u64::MAX)),
    }
}

/// Filter with the search text lowercased once up front.
struct Criteria<'f> {
    filter: &'f EmailFilter,
    needle: Option<String>,
}

impl<'f> Criteria<'f> {
    fn new(filter: &'f EmailFilter) -> Self {
        Self {
            filter,
            needle: filter.search_text().map(str::to_lowercase),
        }
    }

    fn matches(&self, record: &EmailRecord) -> bool {
        if let Some(folder_id) = &self.filter.folder_id
            && record.folder != folder_id.as_str()
        {
            return false;
        }
        if let Some(is_read) = self.filter.is_read
            && record.is_read() != is_read
        {
            return false;
        }
        if let Some(is_flagged) = self.filter.is_flagged
            && record.is_flagged() != is_flagged
        {
            return false;
        }
        self.needle.as_deref().is_none_or(|needle| {
            [&record.subject, &record.from, &record.body]
                .into_iter()
                .any(|field| field.to_lowercase().contains(needle))
        })
    }
}

/// Receive time in the requested direction, ties by ascending id.
fn compare(sort: EmailSort, a: &EmailRecord, b: &EmailRecord) -> Ordering {
    let by_time = match sort {
        EmailSort::NewestFirst => b.received_at_ns.cmp(&a.received_at_ns),
        EmailSort::OldestFirst => a.received_at_ns.cmp(&b.received_at_ns),
    };
    by_time.then_with(|| a.id.cmp(&b.id))
}
