use serde::Serialize;
use utoipa::ToSchema;

pub const MAX_PAGE_LIMIT: u64 = 100;

/// Highest page for which `offset()` still fits a Postgres `BIGINT`.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_PAGE_LIMIT;

/// Normalised page window. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Out-of-range values fall back instead of failing: a page below 1 becomes 1
    /// and pages past `MAX_PAGE` are capped. The limit is clamped to `1..=MAX_PAGE_LIMIT`.
    pub fn new(page: Option<i64>, limit: Option<i64>, default_limit: u64) -> Self {
        let page = match page {
            Some(p) if p >= 1 => (p as u64).min(MAX_PAGE),
            _ => 1,
        };

        let limit = match limit {
            Some(l) if l >= 1 => (l as u64).min(MAX_PAGE_LIMIT),
            Some(_) => 1,
            None => default_limit,
        };

        Self { page, limit }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

impl<T> PageResult<T> {
    pub fn empty(page: PageRequest) -> Self {
        Self {
            items: Vec::new(),
            page: page.page,
            limit: page.limit,
            total: 0,
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit, self.total)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Pagination {
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        }
    }
}
