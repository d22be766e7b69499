//! Search, pagination and other types shared across resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Core search parameters for querying data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Search {
    /// Main search query string (e.g. `name.ends_with: example.com`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Additional field-specific filter criteria
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<String>,
}

impl Search {
    /// Create a search from a query string
    #[must_use]
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            filters: None,
        }
    }

    /// Add filter criteria to the search
    #[must_use]
    pub fn filters(mut self, filters: impl Into<String>) -> Self {
        self.filters = Some(filters.into());
        self
    }
}

/// Pagination window for search requests.
///
/// The API contract accepts `limit` in `1..=500` and `offset` in
/// `0..=9999`; the server rejects values outside those ranges.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Pagination {
    /// Maximum number of items to return per page
    pub limit: u32,

    /// Number of items to skip before the first returned item
    pub offset: u32,
}

/// Request body for POST-style search endpoints: search criteria plus
/// the pagination window, flattened into one JSON object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Search criteria
    #[serde(flatten)]
    pub search: Search,

    /// Pagination window
    #[serde(flatten)]
    pub pagination: Pagination,
}

/// Total result count for a query, with metadata about its accuracy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TotalItems {
    /// Number of items found (exact or approximate per `relation`)
    #[serde(default)]
    pub value: i64,

    /// Relation of `value` to the true total, e.g. `"eq"` or `"gte"`
    #[serde(default)]
    pub relation: String,
}

/// Pagination metadata echoed back with every search response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total result count for the query
    #[serde(default)]
    pub total_items: TotalItems,

    /// Limit the server applied to this page
    #[serde(default)]
    pub limit: u32,

    /// Offset of this page
    #[serde(default)]
    pub offset: u32,
}

/// One page of search results.
///
/// Implemented by each resource's search response so the client can
/// drive exhaustive pagination generically: the response type supplies
/// the decode shape, `into_items` hands the page's records to the
/// aggregator in server order.
pub trait SearchPage {
    /// Record type carried by the page
    type Item;

    /// Consume the page, yielding its items in server-returned order
    fn into_items(self) -> Vec<Self::Item>;
}

/// A technology detected on a host or domain
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Technology {
    /// Product name (e.g. "nginx")
    #[serde(default)]
    pub name: Option<String>,

    /// Detected version string
    #[serde(default)]
    pub version: Option<String>,

    /// Numeric representation of the version, for range queries
    #[serde(default)]
    pub version_representation: Option<i64>,

    /// Port the technology was observed on
    #[serde(default)]
    pub port: Option<i64>,
}

/// Vulnerability counts bucketed by severity
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SeverityDetails {
    /// Number of high-severity findings
    #[serde(default)]
    pub high: i32,

    /// Number of medium-severity findings
    #[serde(default)]
    pub medium: i32,

    /// Number of low-severity findings
    #[serde(default)]
    pub low: i32,
}

impl SeverityDetails {
    /// Total findings across all severities
    #[must_use]
    pub const fn total(&self) -> i32 {
        self.high + self.medium + self.low
    }
}

/// Exploit Prediction Scoring System data for a vulnerability
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Epss {
    /// Probability of exploitation in the next 30 days
    #[serde(default)]
    pub score: f64,

    /// Percentile of the score among all scored CVEs
    #[serde(default)]
    pub percentile: f64,

    /// Date the score was computed
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}
