//! CVE and CWE API endpoints.

use recona_core::{
    CveResponse, CweParams, CweResponse, NistCveData, Result, Search, SearchRequest,
};

use crate::ReconaClient;

/// Vulnerability data endpoints
pub struct CvesApi<'a> {
    client: &'a ReconaClient,
}

impl<'a> CvesApi<'a> {
    pub(crate) fn new(client: &'a ReconaClient) -> Self {
        Self { client }
    }

    /// Get detailed information for a CVE by its identifier
    /// (e.g. "CVE-2021-44228")
    pub async fn details(&self, id: &str) -> Result<NistCveData> {
        self.client
            .get(&format!("/cve/{id}"))
            .await
            .map_err(|e| e.in_operation(format!("failed to get CVE details for ID {id}")))
    }

    /// Search CVE records, returning one page of results.
    ///
    /// All supported search parameters are listed at
    /// <https://recona.io/docs/cve-filters>.
    pub async fn search(&self, params: SearchRequest) -> Result<CveResponse> {
        self.client
            .post("/cve/search", &params)
            .await
            .map_err(|e| e.in_operation("failed to search CVE records"))
    }

    /// Retrieve all CVE records matching the search, paginating
    /// automatically up to the collection cap.
    ///
    /// CVE data sets can be very large; prefer [`Self::search`] with
    /// manual pagination unless the criteria are narrow.
    pub async fn search_all(&self, params: Search) -> Result<Vec<NistCveData>> {
        self.client
            .search_all::<CveResponse>("/cve/search", params)
            .await
            .map_err(|e| e.in_operation("failed to search CVE records"))
    }

    /// Look up Common Weakness Enumeration entries by ID
    pub async fn cwe(&self, params: CweParams) -> Result<CweResponse> {
        self.client
            .post("/cwe", &params)
            .await
            .map_err(|e| e.in_operation("failed to get CWE data"))
    }
}
