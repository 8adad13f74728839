//! Search query types.

/// Query type for search.
#[derive(Debug, Clone)]
pub enum SearchQuery {
    /// Fuzzy matching search.
    Fuzzy(String),
}
