//! Certificate API endpoints.

use recona_core::{Certificate, CertificatesResponse, Result, Search, SearchRequest};

use crate::ReconaClient;

/// SSL/TLS certificate endpoints
pub struct CertificatesApi<'a> {
    client: &'a ReconaClient,
}

impl<'a> CertificatesApi<'a> {
    pub(crate) fn new(client: &'a ReconaClient) -> Self {
        Self { client }
    }

    /// Get detailed information for a certificate by its SHA-256
    /// fingerprint
    pub async fn details(&self, fingerprint: &str) -> Result<Certificate> {
        self.client
            .get(&format!("/certificates/{fingerprint}"))
            .await
            .map_err(|e| {
                e.in_operation(format!("failed to get certificate details for ID {fingerprint}"))
            })
    }

    /// Search certificates, returning one page of results.
    ///
    /// All supported search parameters are listed at
    /// <https://recona.io/docs/certificate-filters>.
    pub async fn search(&self, params: SearchRequest) -> Result<CertificatesResponse> {
        self.client
            .post("/certificates/search", &params)
            .await
            .map_err(|e| e.in_operation("failed to search certificate records"))
    }

    /// Retrieve all certificates matching the search, paginating
    /// automatically up to the collection cap
    pub async fn search_all(&self, params: Search) -> Result<Vec<Certificate>> {
        self.client
            .search_all::<CertificatesResponse>("/certificates/search", params)
            .await
            .map_err(|e| e.in_operation("failed to search certificate records"))
    }
}
