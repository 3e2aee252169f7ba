use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Pagination block attached to every list response.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub current_page: u64,
    pub items_per_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
}

impl PaginationDto {
    pub fn new(page: u64, per_page: u64, total_items: u64, total_pages: u64) -> Self {
        Self {
            current_page: page,
            items_per_page: per_page,
            total_pages,
            total_items,
        }
    }
}

/// Query parameters for paginated listings.
#[derive(Deserialize, ToSchema, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

/// Default page size when the query omits one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

impl PageQuery {
    /// Resolves the query into a (page, page_size) pair, clamping page to 1
    /// and applying the default size.
    pub fn resolve(&self) -> (u64, u64) {
        let page = self.page.unwrap_or(1).max(1);
        let page_size = match self.page_size {
            Some(0) | None => DEFAULT_PAGE_SIZE,
            Some(size) => size,
        };
        (page, page_size)
    }
}
