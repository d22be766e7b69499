//! Domain API endpoints.

use recona_core::{Domain, DomainsResponse, Result, Search, SearchRequest};

use crate::ReconaClient;

/// Domain analysis endpoints
pub struct DomainsApi<'a> {
    client: &'a ReconaClient,
}

impl<'a> DomainsApi<'a> {
    pub(crate) fn new(client: &'a ReconaClient) -> Self {
        Self { client }
    }

    /// Get detailed information for a domain by name
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let domain = client.domains().details("example.com").await?;
    /// println!("Updated: {:?}", domain.updated_at);
    /// ```
    pub async fn details(&self, name: &str) -> Result<Domain> {
        self.client
            .get(&format!("/domains/{name}"))
            .await
            .map_err(|e| e.in_operation(format!("failed to get domain details for ID {name}")))
    }

    /// Search domains, returning one page of results.
    ///
    /// All supported search parameters are listed at
    /// <https://recona.io/docs/domain-filters>.
    pub async fn search(&self, params: SearchRequest) -> Result<DomainsResponse> {
        self.client
            .post("/domains/search", &params)
            .await
            .map_err(|e| e.in_operation("failed to search domain records"))
    }

    /// Retrieve all domains matching the search, paginating
    /// automatically up to the collection cap
    pub async fn search_all(&self, params: Search) -> Result<Vec<Domain>> {
        self.client
            .search_all::<DomainsResponse>("/domains/search", params)
            .await
            .map_err(|e| e.in_operation("failed to search domain records"))
    }
}
