//! Pagination requests, summaries and the page envelope.
//!
//! Every adapter must produce summaries through [`PaginationSummary::new`] so
//! that `total_pages = ceil(total_items / limit)` holds no matter where the
//! data comes from.

use std::num::NonZeroU32;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Page size used when a list request does not specify one.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// A validated pagination cursor.
///
/// Both fields are at least 1. The only way to obtain one is through
/// validation, so gateways can take it without re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: NonZeroU32,
    limit: NonZeroU32,
}

impl PageRequest {
    /// Validate a raw page/limit pair.
    ///
    /// # Errors
    ///
    /// Returns `ZeroPage` or `ZeroLimit` if either value is zero.
    pub const fn new(page: u32, limit: u32) -> Result<Self, ValidationError> {
        let Some(page) = NonZeroU32::new(page) else {
            return Err(ValidationError::ZeroPage);
        };
        let Some(limit) = NonZeroU32::new(limit) else {
            return Err(ValidationError::ZeroLimit);
        };
        Ok(Self { page, limit })
    }

    /// Fill in missing fields (page 1, `default_limit`) and validate.
    ///
    /// # Errors
    ///
    /// Returns `ZeroPage` or `ZeroLimit` if a supplied value is zero.
    pub fn resolve(
        page: Option<u32>,
        limit: Option<u32>,
        default_limit: NonZeroU32,
    ) -> Result<Self, ValidationError> {
        Self::new(page.unwrap_or(1), limit.unwrap_or(default_limit.get()))
    }

    /// First page with the given size.
    #[must_use]
    pub const fn first(limit: NonZeroU32) -> Self {
        Self {
            page: NonZeroU32::MIN,
            limit,
        }
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page.get()
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit.get()
    }

    /// Number of items that precede this page.
    ///
    /// Saturates rather than overflowing for absurd page numbers.
    #[must_use]
    pub fn offset(&self) -> usize {
        let offset = u64::from(self.page.get() - 1) * u64::from(self.limit.get());
        usize::try_from(offset).unwrap_or(usize::MAX)
    }

    /// Zero-based index range of this page within a sequence of `len` items.
    ///
    /// The range `[(page-1)*limit, page*limit)` is clamped to `0..len`; pages
    /// past the end yield an empty range.
    #[must_use]
    pub fn window(&self, len: usize) -> Range<usize> {
        let start = self.offset().min(len);
        let limit = usize::try_from(self.limit.get()).unwrap_or(usize::MAX);
        let end = start.saturating_add(limit).min(len);
        start..end
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(default_limit())
    }
}

/// The default page size as a non-zero value.
#[must_use]
pub const fn default_limit() -> NonZeroU32 {
    match NonZeroU32::new(DEFAULT_PAGE_LIMIT) {
        Some(limit) => limit,
        None => NonZeroU32::MIN,
    }
}

/// Metadata describing how a list result was sliced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationSummary {
    /// 1-based page number that was requested.
    pub page: u32,
    /// Page size that was requested.
    pub limit: u32,
    /// Number of items matching the query before slicing.
    pub total_items: u64,
    /// `ceil(total_items / limit)`, zero when there are no items.
    pub total_pages: u64,
}

impl PaginationSummary {
    /// Summarize a query that matched `total_items` items.
    #[must_use]
    pub fn new(request: PageRequest, total_items: u64) -> Self {
        Self {
            page: request.page(),
            limit: request.limit(),
            total_items,
            total_pages: total_pages(total_items, request.limit),
        }
    }

    /// Returns true if a page after this one contains items.
    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages
    }
}

/// `ceil(total_items / limit)`.
#[must_use]
pub fn total_pages(total_items: u64, limit: NonZeroU32) -> u64 {
    total_items.div_ceil(u64::from(limit.get()))
}

/// One page of a list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page, in query order.
    pub items: Vec<T>,
    /// How the full result was sliced.
    pub pagination: PaginationSummary,
}

impl<T> Page<T> {
    /// Creates a page from already-sliced items.
    #[must_use]
    pub const fn new(items: Vec<T>, pagination: PaginationSummary) -> Self {
        Self { items, pagination }
    }

    /// Returns true if the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Convert every item, keeping the summary.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        let items = self.items.into_iter().map(f).collect::<Result<Vec<_>, E>>()?;
        Ok(Page {
            items,
            pagination: self.pagination,
        })
    }
}
