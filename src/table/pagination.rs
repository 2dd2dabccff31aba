use serde::{Deserialize, Serialize};

/// Pagination input state: the current cursor plus the caller-supplied total.
/// The page count is always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl Pagination {
    pub fn new(page: u32, page_size: u32, total: u64) -> Self {
        Self {
            page,
            page_size,
            total,
        }
    }

    /// `ceil(total / page_size)`; zero when either input is zero.
    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size)) as u32
    }

    pub fn view(&self) -> PaginationView {
        let total_pages = self.total_pages();
        PaginationView {
            page: self.page,
            total_pages,
            label: format!("Page {} of {}", self.page, total_pages),
            prev_enabled: self.page > 1,
            next_enabled: self.page < total_pages,
        }
    }
}

/// The rendered pagination strip: label text plus button enablement. The
/// engine never moves the page itself; buttons only request a page change
/// from the owning page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub page: u32,
    pub total_pages: u32,
    pub label: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}
