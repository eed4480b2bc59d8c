//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

// Clamps applied by `ListQuery::sanitized`
const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

/// Offset/limit query parameters for list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListQuery {
    /// Number of leading entries to skip
    #[serde(default)]
    pub offset: u32,

    /// Maximum number of entries to return
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Substring filter (empty matches all)
    #[serde(default)]
    pub search: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: default_limit(),
            search: String::new(),
        }
    }
}

impl ListQuery {
    /// Create a new query with explicit values
    pub fn new(offset: u32, limit: u32, search: impl Into<String>) -> Self {
        Self {
            offset,
            limit,
            search: search.into(),
        }
    }

    /// Clamp the limit into `[1, MAX_LIMIT]` and trim the search term
    pub fn sanitized(mut self) -> Self {
        self.limit = self.limit.clamp(1, MAX_LIMIT);
        self.search = self.search.trim().to_string();
        self
    }

    /// Offset as i64 for SQL queries
    pub fn offset_i64(&self) -> i64 {
        self.offset as i64
    }

    /// Limit as i64 for SQL queries
    pub fn limit_i64(&self) -> i64 {
        self.limit as i64
    }
}

/// Paginated response wrapper with totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The actual data items
    pub data: Vec<T>,

    /// Offset this page starts at
    pub offset: u32,

    /// Requested page size
    pub limit: u32,

    /// Total number of matching items
    pub total: u64,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(data: Vec<T>, query: &ListQuery, total: u64) -> Self {
        Self {
            data,
            offset: query.offset,
            limit: query.limit,
            total,
        }
    }

    /// Transform the data items using a function
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            data: self.data.into_iter().map(f).collect(),
            offset: self.offset,
            limit: self.limit,
            total: self.total,
        }
    }

    /// Number of items in this page
    pub fn count(&self) -> usize {
        self.data.len()
    }
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_clamps_limit() {
        let q = ListQuery::new(0, 10_000, "  +1 ").sanitized();
        assert_eq!(q.limit, MAX_LIMIT);
        assert_eq!(q.search, "+1");

        let q = ListQuery::new(5, 0, "").sanitized();
        assert_eq!(q.limit, 1);
        assert_eq!(q.offset, 5);
    }

    #[test]
    fn test_default_query() {
        let q = ListQuery::default();
        assert_eq!(q.offset, 0);
        assert_eq!(q.limit, DEFAULT_LIMIT);
        assert!(q.search.is_empty());
    }

    #[test]
    fn test_paginated_response_map() {
        let q = ListQuery::new(0, 2, "");
        let page = PaginatedResponse::new(vec![1, 2], &q, 5).map(|n| n * 10);
        assert_eq!(page.data, vec![10, 20]);
        assert_eq!(page.total, 5);
        assert_eq!(page.count(), 2);
    }
}
