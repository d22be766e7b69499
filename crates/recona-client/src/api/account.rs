//! Account API endpoints.

use recona_core::{Profile, Result};

use crate::ReconaClient;

/// Account and quota endpoints
pub struct AccountApi<'a> {
    client: &'a ReconaClient,
}

impl<'a> AccountApi<'a> {
    pub(crate) fn new(client: &'a ReconaClient) -> Self {
        Self { client }
    }

    /// Get the authenticated customer's profile, including permissions
    /// and current daily quota usage
    pub async fn details(&self) -> Result<Profile> {
        self.client
            .get("/customers/account")
            .await
            .map_err(|e| e.in_operation("failed to get account details"))
    }
}
