//! Autonomous system API endpoints.

use recona_core::{AsResponse, AutonomousSystem, Host, Result, Search, SearchRequest};

use crate::ReconaClient;

/// Autonomous system endpoints
pub struct AutonomousSystemsApi<'a> {
    client: &'a ReconaClient,
}

impl<'a> AutonomousSystemsApi<'a> {
    pub(crate) fn new(client: &'a ReconaClient) -> Self {
        Self { client }
    }

    /// Get details for an autonomous system by number.
    ///
    /// The backend serves a host-shaped record for this endpoint, so
    /// that is what the method returns.
    pub async fn details(&self, number: &str) -> Result<Host> {
        self.client
            .get(&format!("/autonomous-system/{number}"))
            .await
            .map_err(|e| e.in_operation(format!("failed to get AS details for number {number}")))
    }

    /// Search autonomous systems, returning one page of results
    pub async fn search(&self, params: SearchRequest) -> Result<AsResponse> {
        self.client
            .post("/autonomous-system/search", &params)
            .await
            .map_err(|e| e.in_operation("failed to search AS records"))
    }

    /// Retrieve all autonomous systems matching the search, paginating
    /// automatically up to the collection cap
    pub async fn search_all(&self, params: Search) -> Result<Vec<AutonomousSystem>> {
        self.client
            .search_all::<AsResponse>("/autonomous-system/search", params)
            .await
            .map_err(|e| e.in_operation("failed to search AS records"))
    }
}
