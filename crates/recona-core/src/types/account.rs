//! Account and quota resource types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer profile including permissions and current quota usage
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Core customer data
    #[serde(flatten)]
    pub customer: Customer,

    /// Access controls and limits for this customer
    #[serde(default)]
    pub permissions: Permissions,

    /// Requests made within the current daily period
    #[serde(default)]
    pub request_count: i64,

    /// Maximum requests allowed per day
    #[serde(default)]
    pub request_limit_per_day: i64,

    /// Start of the current daily counting period
    #[serde(default)]
    pub start_at: Option<DateTime<Utc>>,

    /// End of the current daily counting period
    #[serde(default)]
    pub end_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Requests remaining in the current daily period
    #[must_use]
    pub fn requests_remaining(&self) -> i64 {
        (self.request_limit_per_day - self.request_count).max(0)
    }
}

/// Limits and access controls applied to a customer
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Permissions {
    /// Maximum rows shown in UI data views
    #[serde(default)]
    pub ui_rows_limit: i64,

    /// Maximum rows returned in a single API response
    #[serde(default)]
    pub api_rows_limit: i64,

    /// Maximum API requests per 24-hour period
    #[serde(default)]
    pub request_limit_per_day: i64,

    /// Maximum filters applicable in one query
    #[serde(default, rename = "filter_limit")]
    pub filter_limits: i64,

    /// Maximum request rate granted to this customer
    #[serde(default)]
    pub request_rate_limit: i64,
}

/// Core customer information and metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer identifier
    #[serde(default)]
    pub id: i64,

    /// Username used for authentication
    #[serde(default)]
    pub login: String,

    /// Account status code
    #[serde(default)]
    pub status: i32,

    /// Display name
    #[serde(default)]
    pub nickname: String,

    /// Current subscription plan identifier
    #[serde(default)]
    pub subscription_id: i64,

    /// Human-readable subscription plan name
    #[serde(default)]
    pub subscription_name: Option<String>,

    /// Customer group identifier
    #[serde(default)]
    pub group_id: i64,

    /// Human-readable group name
    #[serde(default)]
    pub group_title: Option<String>,

    /// Permission role: 1 super admin, 2 admin, 3 user
    #[serde(default)]
    pub role_id: i32,

    /// When the current subscription began
    #[serde(default, rename = "subscription_start_at")]
    pub subscription_started_at: Option<DateTime<Utc>>,

    /// When the current subscription expires
    #[serde(default)]
    pub subscription_expires_at: Option<DateTime<Utc>>,

    /// Organization identifier
    #[serde(default)]
    pub organization_id: i64,

    /// Human-readable organization name
    #[serde(default)]
    pub organization_title: Option<String>,

    /// When the account was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the account was last modified
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// When the customer was last active
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,

    /// Total API requests made since account creation
    #[serde(default)]
    pub total_request_count: i64,

    /// Requests made in the current day
    #[serde(default)]
    pub daily_request_count: i64,

    /// Requests made in the current week
    #[serde(default)]
    pub week_request_count: i64,

    /// Two-factor authentication is enabled
    #[serde(default)]
    pub enabled_two_fa: bool,

    /// Per-product access flags
    #[serde(default)]
    pub products_permission: Option<ProductsPermission>,
}

/// Access flags for individual products
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProductsPermission {
    /// Access to the Recona product
    #[serde(default)]
    pub recona: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_profile_with_quota() {
        let json = r#"{
            "id": 42,
            "login": "analyst@example.com",
            "subscription_name": "Pro",
            "permissions": {"api_rows_limit": 500, "request_rate_limit": 10},
            "request_count": 120,
            "request_limit_per_day": 1000,
            "start_at": "2026-08-29T00:00:00Z",
            "products_permission": {"recona": true}
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.customer.id, 42);
        assert_eq!(profile.customer.subscription_name.as_deref(), Some("Pro"));
        assert_eq!(profile.permissions.api_rows_limit, 500);
        assert_eq!(profile.requests_remaining(), 880);
        assert!(profile.customer.products_permission.unwrap().recona);
    }
}
