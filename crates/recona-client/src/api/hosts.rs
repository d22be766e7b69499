//! Host API endpoints.

use recona_core::{Host, HostsResponse, Result, Search, SearchRequest};

use crate::ReconaClient;

/// Host scanning and port analysis endpoints
pub struct HostsApi<'a> {
    client: &'a ReconaClient,
}

impl<'a> HostsApi<'a> {
    pub(crate) fn new(client: &'a ReconaClient) -> Self {
        Self { client }
    }

    /// Get detailed information for a host by IP address
    pub async fn details(&self, ip: &str) -> Result<Host> {
        self.client
            .get(&format!("/hosts/{ip}"))
            .await
            .map_err(|e| e.in_operation(format!("failed to get host details for ID {ip}")))
    }

    /// Search hosts, returning one page of results.
    ///
    /// All supported search parameters are listed at
    /// <https://recona.io/docs/host-filters>.
    pub async fn search(&self, params: SearchRequest) -> Result<HostsResponse> {
        self.client
            .post("/hosts/search", &params)
            .await
            .map_err(|e| e.in_operation("failed to search host records"))
    }

    /// Retrieve all hosts matching the search, paginating
    /// automatically up to the collection cap
    pub async fn search_all(&self, params: Search) -> Result<Vec<Host>> {
        self.client
            .search_all::<HostsResponse>("/hosts/search", params)
            .await
            .map_err(|e| e.in_operation("failed to search host records"))
    }
}
