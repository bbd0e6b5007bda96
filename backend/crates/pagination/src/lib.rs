//! Page-based pagination primitives shared by the tea-api endpoints.
//!
//! A [`PageRequest`] names a one-based page and a page size. Adapters slice a
//! fully filtered and ordered result set with [`paginate`], then wrap the
//! returned [`Page`] in a [`Paginated`] envelope for the wire:
//!
//! ```
//! use pagination::{PageRequest, Paginated, paginate};
//!
//! let request = PageRequest::new(2, 2).expect("valid request");
//! let page = paginate(vec![1, 2, 3, 4, 5], &request);
//! assert_eq!(page.items, vec![3, 4]);
//!
//! let envelope = Paginated::from_page(page, &request);
//! assert_eq!(envelope.pagination.total, 5);
//! assert_eq!(envelope.pagination.total_pages, 3);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page number applied when the caller omits one or sends `0`.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size applied when the caller omits one or sends `0`.
pub const DEFAULT_LIMIT: u32 = 20;
/// Largest page size a caller may request.
pub const MAX_LIMIT: u32 = 100;

/// Validation failures raised when building a [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// The page number is below one.
    #[error("page must be at least 1")]
    PageOutOfRange {
        /// Rejected page number.
        page: i64,
    },
    /// The page size falls outside `1..=MAX_LIMIT`.
    #[error("limit must be between 1 and 100")]
    LimitOutOfRange {
        /// Rejected page size.
        limit: i64,
    },
}

impl PageRequestError {
    /// Name of the query parameter that failed validation.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::PageOutOfRange { .. } => "page",
            Self::LimitOutOfRange { .. } => "limit",
        }
    }
}

/// A validated one-based page window.
///
/// ## Invariants
/// - `page >= 1`
/// - `1 <= limit <= MAX_LIMIT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Build a page request, rejecting out-of-range values.
    ///
    /// # Errors
    /// Returns [`PageRequestError`] when `page` is zero or `limit` is outside
    /// `1..=MAX_LIMIT`.
    pub const fn new(page: u32, limit: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::PageOutOfRange { page: 0 });
        }
        if limit == 0 || limit > MAX_LIMIT {
            return Err(PageRequestError::LimitOutOfRange {
                limit: limit as i64,
            });
        }
        Ok(Self { page, limit })
    }

    /// Build a page request from raw query parameters.
    ///
    /// Absent or zero values take [`DEFAULT_PAGE`] and [`DEFAULT_LIMIT`].
    /// Any other value must lie within the documented ranges.
    ///
    /// # Errors
    /// Returns [`PageRequestError`] for negative pages or limits outside
    /// `1..=MAX_LIMIT`.
    ///
    /// # Examples
    /// ```
    /// use pagination::{PageRequest, DEFAULT_LIMIT};
    ///
    /// let request = PageRequest::from_query(None, Some(0)).expect("defaults apply");
    /// assert_eq!(request.page(), 1);
    /// assert_eq!(request.limit(), DEFAULT_LIMIT);
    /// assert!(PageRequest::from_query(Some(1), Some(101)).is_err());
    /// ```
    pub fn from_query(page: Option<i64>, limit: Option<i64>) -> Result<Self, PageRequestError> {
        let page = match page.unwrap_or(0) {
            0 => DEFAULT_PAGE,
            raw => u32::try_from(raw)
                .map_err(|_| PageRequestError::PageOutOfRange { page: raw })?,
        };
        let limit = match limit.unwrap_or(0) {
            0 => DEFAULT_LIMIT,
            raw => u32::try_from(raw)
                .ok()
                .filter(|value| *value <= MAX_LIMIT)
                .ok_or(PageRequestError::LimitOutOfRange { limit: raw })?,
        };
        Ok(Self { page, limit })
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items preceding the window.
    #[must_use]
    pub fn offset(&self) -> usize {
        let skipped = u64::from(self.page.saturating_sub(1)) * u64::from(self.limit);
        usize::try_from(skipped).unwrap_or(usize::MAX)
    }
}

/// A window cut from a filtered result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items inside the requested window.
    pub items: Vec<T>,
    /// Number of matching items before the window was applied.
    pub total: usize,
}

impl<T> Page<T> {
    /// Convert the items while keeping the total.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

/// Cut the `request` window out of an already filtered and ordered set.
///
/// A window starting past the end yields no items but still reports the
/// true total.
#[must_use]
pub fn paginate<T>(items: Vec<T>, request: &PageRequest) -> Page<T> {
    let total = items.len();
    let limit = usize::try_from(request.limit()).unwrap_or(usize::MAX);
    let items = items
        .into_iter()
        .skip(request.offset())
        .take(limit)
        .collect();
    Page { items, total }
}

/// Number of pages needed to show `total` items `limit` at a time.
///
/// A zero `limit` yields zero pages.
#[must_use]
pub fn total_pages(total: usize, limit: u32) -> usize {
    match usize::try_from(limit) {
        Ok(0) | Err(_) => 0,
        Ok(limit) => total.div_ceil(limit),
    }
}

/// Pagination metadata returned alongside list payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// One-based page number that was served.
    pub page: u32,
    /// Page size that was applied.
    pub limit: u32,
    /// Number of matching items across all pages.
    pub total: usize,
    /// Number of pages available at this page size.
    pub total_pages: usize,
}

impl Pagination {
    /// Describe `total` matches served through `request`.
    #[must_use]
    pub fn new(request: &PageRequest, total: usize) -> Self {
        Self {
            page: request.page(),
            limit: request.limit(),
            total,
            total_pages: total_pages(total, request.limit()),
        }
    }
}

/// Envelope pairing a page of data with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    /// Items on the current page.
    pub data: Vec<T>,
    /// Metadata describing the page.
    pub pagination: Pagination,
}

impl<T> Paginated<T> {
    /// Wrap a [`Page`] served through `request`.
    #[must_use]
    pub fn from_page(page: Page<T>, request: &PageRequest) -> Self {
        Self {
            pagination: Pagination::new(request, page.total),
            data: page.items,
        }
    }
}
