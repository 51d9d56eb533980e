use serde::{Deserialize, Serialize};

/// Envelope every backend endpoint wraps its payload in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Paginated list payload as returned by the `/all` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

impl<T> Paginated<T> {
    pub fn total_pages(&self) -> usize {
        if self.total == 0 || self.limit == 0 {
            1
        } else {
            (self.total + self.limit - 1) / self.limit
        }
    }
}

pub const DEFAULT_PAGE_SIZE: usize = 25;
pub const DEFAULT_PAGE_NO: usize = 1;
