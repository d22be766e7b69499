//! Domain resource types.

use serde::{Deserialize, Serialize};

use super::certificate::{IssuerDn, SubjectDn};
use super::common::{PageInfo, SearchPage, SeverityDetails, Technology};
use super::host::Location;

/// Comprehensive information about a domain name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Domain {
    /// Primary domain name (e.g. "example.com")
    #[serde(default)]
    pub name: Option<String>,

    /// Domain name in reverse label order, used for indexing
    #[serde(default)]
    pub name_reversed: Option<String>,

    /// Structured WHOIS data
    #[serde(default)]
    pub whois_parsed: Option<WhoisParsed>,

    /// Error message if the WHOIS lookup failed
    #[serde(default)]
    pub whois_error: Option<String>,

    /// Timestamp of the last WHOIS refresh
    #[serde(default)]
    pub whois_updated_at: Option<String>,

    /// Raw WHOIS response text
    #[serde(default)]
    pub whois: Option<String>,

    /// Complete DNS record information
    #[serde(default)]
    pub dns_records: Option<DnsRecords>,

    /// Content extracted from the domain's website
    #[serde(default)]
    pub extract: Option<Extract>,

    /// Screenshot metadata for the domain's main page
    #[serde(default)]
    pub screenshot: Option<Screenshot>,

    /// Summary of the SSL certificate served by the domain
    #[serde(default)]
    pub certificate_summaries: Option<CertSummary>,

    /// Has Name Server records
    #[serde(default)]
    pub is_ns: bool,

    /// Has Mail Exchange records
    #[serde(default)]
    pub is_mx: bool,

    /// Has Pointer records (reverse DNS)
    #[serde(default)]
    pub is_ptr: bool,

    /// Has Canonical Name records
    #[serde(default)]
    pub is_cname: bool,

    /// This is a subdomain rather than a registrable domain
    #[serde(default)]
    pub is_subdomain: bool,

    /// Public suffix (TLD)
    #[serde(default)]
    pub suffix: Option<String>,

    /// Complete reversed domain name
    #[serde(default)]
    pub name_full_reverse: Option<String>,

    /// Domain name excluding the TLD
    #[serde(default)]
    pub name_without_tld: Option<String>,

    /// The subdomain portion only
    #[serde(default)]
    pub subdomain_part: Option<String>,

    /// HTTP response captured when probing the domain
    #[serde(default)]
    pub request_answer: Option<RequestAnswer>,

    /// Detected web technologies and frameworks
    #[serde(default)]
    pub technologies: Vec<Technology>,

    /// Geographic location data for the domain's IPs
    #[serde(default)]
    pub geo: Vec<DomainGeoInfo>,

    /// Network provider information for the domain's IPs
    #[serde(default)]
    pub isp: Vec<DomainIspInfo>,

    /// Security severity assessment
    #[serde(default)]
    pub severity_details: Option<SeverityDetails>,

    /// Known vulnerabilities affecting the domain
    #[serde(default)]
    pub cve_list: Vec<DomainCve>,

    /// Timestamp of the last user-initiated scan
    #[serde(default)]
    pub user_scan_at: Option<String>,

    /// Last update timestamp for this record
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A vulnerability associated with a domain's detected technologies
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainCve {
    /// CVE identifier (e.g. "CVE-2021-44228")
    #[serde(default)]
    pub id: Option<String>,

    /// CVSS base score
    #[serde(default)]
    pub base_score: f32,

    /// Severity label derived from the score
    #[serde(default)]
    pub severity: Option<String>,

    /// CVSS vector string
    #[serde(default)]
    pub vector: Option<String>,

    /// Vulnerability description
    #[serde(default)]
    pub description: Option<String>,

    /// Technologies the CVE applies to
    #[serde(default)]
    pub technologies: Vec<String>,

    /// Proof-of-concept exploit code is known to exist
    #[serde(default)]
    pub has_poc: bool,
}

/// Geographic location of one of the domain's IPs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainGeoInfo {
    /// City name
    #[serde(default)]
    pub city_name: Option<String>,

    /// Country name
    #[serde(default)]
    pub country: Option<String>,

    /// ISO 3166-1 country code
    #[serde(default)]
    pub country_iso_code: Option<String>,

    /// Coordinates
    #[serde(default)]
    pub location: Option<Location>,

    /// The IP this location belongs to
    #[serde(default)]
    pub ip: Option<String>,
}

/// Network provider details for one of the domain's IPs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainIspInfo {
    /// Autonomous system number
    #[serde(default)]
    pub as_num: Option<u32>,

    /// Autonomous system organization
    #[serde(default)]
    pub as_org: Option<String>,

    /// Autonomous system name
    #[serde(default)]
    pub as_name: Option<String>,

    /// The IP this record belongs to
    #[serde(default)]
    pub ip: Option<String>,

    /// Announced network in CIDR notation
    #[serde(default)]
    pub network: Option<String>,
}

/// Structured WHOIS data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WhoisParsed {
    /// Parser error code, zero on success
    #[serde(default)]
    pub error_code: i32,

    /// Registrar block
    #[serde(default)]
    pub registrar: Option<Registrar>,

    /// Registrant contact
    #[serde(default)]
    pub registrant: Option<Registrant>,

    /// Administrative contact
    #[serde(default)]
    pub admin: Option<Registrant>,

    /// Technical contact
    #[serde(default)]
    pub tech: Option<Registrant>,

    /// Billing contact
    #[serde(default)]
    pub bill: Option<Registrant>,

    /// When the parsed data was last refreshed
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Registrar section of a WHOIS record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registrar {
    /// Domain creation date
    #[serde(default)]
    pub created_date: Option<String>,

    /// DNSSEC status
    #[serde(default)]
    pub domain_dnssec: Option<String>,

    /// Registry domain ID
    #[serde(default)]
    pub domain_id: Option<String>,

    /// Domain name as recorded by the registrar
    #[serde(default)]
    pub domain_name: Option<String>,

    /// EPP status codes
    #[serde(default)]
    pub domain_status: Option<String>,

    /// Registration expiration date
    #[serde(default)]
    pub expiration_date: Option<String>,

    /// Authoritative name servers
    #[serde(default)]
    pub name_servers: Option<String>,

    /// Registrar ID
    #[serde(default)]
    pub registrar_id: Option<String>,

    /// Registrar display name
    #[serde(default)]
    pub registrar_name: Option<String>,

    /// Last update date
    #[serde(default)]
    pub updated_date: Option<String>,

    /// WHOIS server the record came from
    #[serde(default)]
    pub whois_server: Option<String>,

    /// Registrar contact email addresses
    #[serde(default)]
    pub emails: Option<String>,
}

/// A WHOIS contact (registrant, admin, tech or billing)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registrant {
    /// Contact handle
    #[serde(default)]
    pub id: Option<String>,

    /// Contact name
    #[serde(default)]
    pub name: Option<String>,

    /// Organization
    #[serde(default)]
    pub organization: Option<String>,

    /// Street address
    #[serde(default)]
    pub street: Option<String>,

    /// City
    #[serde(default)]
    pub city: Option<String>,

    /// State or province
    #[serde(default)]
    pub province: Option<String>,

    /// Postal code
    #[serde(default)]
    pub postal_code: Option<String>,

    /// Country
    #[serde(default)]
    pub country: Option<String>,

    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,

    /// Email address
    #[serde(default)]
    pub email: Option<String>,
}

/// DNS records observed for a domain
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[allow(clippy::struct_field_names)]
pub struct DnsRecords {
    /// IPv4 address records
    #[serde(default, rename = "A")]
    pub a: Vec<String>,

    /// IPv6 address records
    #[serde(default, rename = "AAAA")]
    pub aaaa: Vec<String>,

    /// Canonical name records
    #[serde(default, rename = "CNAME")]
    pub cname: Vec<String>,

    /// Text records
    #[serde(default, rename = "TXT")]
    pub txt: Vec<String>,

    /// Name server records
    #[serde(default, rename = "NS")]
    pub ns: Vec<String>,

    /// Mail exchange records
    #[serde(default, rename = "MX")]
    pub mx: Vec<String>,

    /// Parsed SPF policies from TXT records
    #[serde(default, rename = "SPF")]
    pub spf: Vec<Spf>,

    /// Start-of-authority record
    #[serde(default, rename = "SOA")]
    pub soa: Option<SoaRecord>,

    /// Certification authority authorization records
    #[serde(default, rename = "CAA")]
    pub caa: Vec<String>,

    /// When the records were last resolved
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Parsed SPF policy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spf {
    /// SPF version tag
    #[serde(default)]
    pub version: Option<String>,

    /// Mechanisms in policy order
    #[serde(default)]
    pub mechanisms: Vec<SpfMechanism>,

    /// Validation problems found while parsing
    #[serde(default)]
    pub validation_errors: Vec<SpfValidationError>,

    /// Raw TXT record value
    #[serde(default)]
    pub raw: Option<String>,
}

/// A single SPF mechanism (e.g. `include:_spf.example.com`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpfMechanism {
    /// Mechanism name (all, ip4, include, ...)
    #[serde(default)]
    pub name: Option<String>,

    /// Qualifier prefix (+, -, ~, ?)
    #[serde(default)]
    pub qualifier: Option<String>,

    /// Mechanism argument
    #[serde(default)]
    pub value: Option<String>,
}

/// A problem found while validating an SPF policy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpfValidationError {
    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// The mechanism or target that failed validation
    #[serde(default)]
    pub target: Option<String>,
}

/// Start-of-authority DNS record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoaRecord {
    /// Primary name server
    #[serde(default)]
    pub ns: Option<String>,

    /// Responsible party email
    #[serde(default)]
    pub email: Option<String>,

    /// Zone serial number
    #[serde(default)]
    pub serial: i64,

    /// Refresh interval in seconds
    #[serde(default)]
    pub refresh: i64,

    /// Retry interval in seconds
    #[serde(default)]
    pub retry: i64,

    /// Expiry interval in seconds
    #[serde(default)]
    pub expire: i64,

    /// Minimum TTL in seconds
    #[serde(default)]
    pub min_ttl: i64,
}

/// Content extracted from a domain's website
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Extract {
    /// Page title
    #[serde(default)]
    pub title: Option<String>,

    /// Meta description
    #[serde(default)]
    pub description: Option<String>,

    /// Hyperlinks found in the page
    #[serde(default)]
    pub links: Vec<Link>,

    /// Email addresses found in the page
    #[serde(default)]
    pub emails: Vec<String>,

    /// Errors encountered during extraction
    #[serde(default)]
    pub errors: Vec<String>,

    /// Meta tags from the page head
    #[serde(default)]
    pub meta_tags: Vec<MetaTag>,

    /// Redirect hops leading to the final response
    #[serde(default)]
    pub response_chain: Vec<ResponseChainLink>,

    /// HTTP status code of the final response
    #[serde(default)]
    pub status_code: i64,

    /// Response headers as name/value pairs
    #[serde(default)]
    pub headers: Vec<HttpHeader>,

    /// Complete HTTP response including headers and body
    #[serde(default)]
    pub raw_response: Option<String>,

    /// Redirect target outside the probed site, for 3xx responses
    #[serde(default)]
    pub external_redirect_uri: Option<Uri>,

    /// robots.txt contents
    #[serde(default)]
    pub robots_txt: Option<String>,

    /// Paths disallowed by robots.txt
    #[serde(default)]
    pub robots_disallow: Vec<String>,

    /// Script sources referenced by the page
    #[serde(default)]
    pub scripts: Vec<String>,

    /// Stylesheet sources referenced by the page
    #[serde(default)]
    pub styles: Vec<String>,

    /// Favicon location
    #[serde(default)]
    pub favicon_uri: Option<Uri>,

    /// SHA-256 of the favicon
    #[serde(default)]
    pub favicon_sha256: Option<String>,

    /// Cookies set by the response
    #[serde(default)]
    pub cookies: Vec<Cookie>,

    /// Google AdSense publisher ID found in the page
    #[serde(default)]
    pub adsense_id: Option<String>,

    /// Google Analytics tracking key found in the page
    #[serde(default)]
    pub google_analytics_key: Option<String>,

    /// Google site verification token found in the page
    #[serde(default)]
    pub google_site_verification: Option<String>,

    /// Google Play app reference found in the page
    #[serde(default)]
    pub google_play_app: Option<String>,

    /// Apple iTunes app reference found in the page
    #[serde(default)]
    pub apple_itunes_app: Option<String>,

    /// When the content was extracted
    #[serde(default)]
    pub extracted_at: Option<String>,
}

/// A hyperlink extracted from a page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Link {
    /// Anchor text
    #[serde(default)]
    pub anchor: Option<String>,

    /// Link attributes
    #[serde(default)]
    pub attributes: Option<LinkAttributes>,
}

/// Attributes of an extracted hyperlink
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkAttributes {
    /// The link carries rel="nofollow"
    #[serde(default)]
    pub no_follow: bool,

    /// Link target
    #[serde(default)]
    pub uri: Option<Uri>,
}

/// A URI split into its components
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Uri {
    /// Complete URI string
    #[serde(default)]
    pub full_uri: Option<String>,

    /// Host component
    #[serde(default)]
    pub host: Option<String>,

    /// Path component
    #[serde(default)]
    pub path: Option<String>,
}

/// A meta tag from the page head
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaTag {
    /// Tag name
    #[serde(default)]
    pub name: Option<String>,

    /// Tag content
    #[serde(default)]
    pub value: Option<String>,
}

/// One hop in the redirect chain leading to the final response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseChainLink {
    /// HTTP status code of this hop
    #[serde(default)]
    pub status_code: i64,

    /// Response headers of this hop
    #[serde(default)]
    pub headers: Vec<HttpHeader>,
}

/// An HTTP header captured during extraction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpHeader {
    /// Header name
    #[serde(default)]
    pub name: Option<String>,

    /// Header value
    #[serde(default)]
    pub value: Option<String>,
}

/// A cookie set by the probed site
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cookie {
    /// Cookie name
    #[serde(default)]
    pub key: Option<String>,

    /// Cookie value
    #[serde(default)]
    pub value: Option<String>,

    /// Expiry timestamp
    #[serde(default)]
    pub expire: Option<String>,

    /// Max-Age attribute in seconds
    #[serde(default)]
    pub max_age: i64,

    /// Path attribute
    #[serde(default)]
    pub path: Option<String>,

    /// HttpOnly attribute
    #[serde(default)]
    pub http_only: bool,

    /// Secure attribute
    #[serde(default)]
    pub security: bool,
}

/// Screenshot capture metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Screenshot {
    /// A screenshot was captured
    #[serde(default, rename = "IsScreenshotted")]
    pub is_screenshotted: bool,

    /// When the screenshot was taken
    #[serde(default, rename = "ScreenshotTime")]
    pub screenshot_time: Option<String>,

    /// Error message if the capture failed
    #[serde(default, rename = "ScreenshotError")]
    pub screenshot_error: Option<String>,
}

/// Summary of the SSL certificate served by a domain
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertSummary {
    /// SHA-256 fingerprint, links to the full certificate resource
    #[serde(default)]
    pub fingerprint_sha256: Option<String>,

    /// Issuer distinguished name
    #[serde(default)]
    pub issuer_dn: Option<IssuerDn>,

    /// Subject distinguished name
    #[serde(default)]
    pub subject_dn: Option<SubjectDn>,

    /// Negotiated TLS version
    #[serde(default)]
    pub tls_version: Option<String>,

    /// End of the validity period
    #[serde(default)]
    pub validity_end: Option<String>,

    /// DNS names the certificate covers
    #[serde(default)]
    pub dns_names: Vec<String>,

    /// When the summary was last refreshed
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// HTTP response data captured while probing a target
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestAnswer {
    /// Resolved IP that was actually contacted
    #[serde(default)]
    pub ip: Option<String>,

    /// Original hostname that was requested
    #[serde(default)]
    pub host: Option<String>,

    /// Complete HTTP response including headers and body
    #[serde(default)]
    pub raw_response: Option<String>,

    /// Response headers in "Key: Value" form
    #[serde(default)]
    pub headers: Vec<String>,

    /// HTTP status code returned by the server
    #[serde(default)]
    pub status_code: i64,

    /// Error message if the probe failed
    #[serde(default)]
    pub error: Option<String>,

    /// Redirect target for 3xx responses
    #[serde(default)]
    pub external_redirect_url: Option<String>,
}

/// Response shape for `/domains/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainsResponse {
    /// Pagination metadata
    #[serde(flatten)]
    pub page: PageInfo,

    /// Matching domain records for this page
    #[serde(default)]
    pub domains: Vec<Domain>,
}

impl SearchPage for DomainsResponse {
    type Item = Domain;

    fn into_items(self) -> Vec<Domain> {
        self.domains
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_search_response() {
        let json = r#"{
            "total_items": {"value": 2, "relation": "eq"},
            "limit": 100,
            "offset": 0,
            "domains": [
                {
                    "name": "mail.example.com",
                    "is_subdomain": true,
                    "dns_records": {"A": ["93.184.216.34"], "SOA": {"ns": "ns1.example.com", "serial": 7}},
                    "certificate_summaries": {"subject_dn": {"O": "Example Org"}}
                },
                {"name": "example.com"}
            ]
        }"#;

        let response: DomainsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.page.total_items.value, 2);
        assert_eq!(response.domains.len(), 2);

        let first = &response.domains[0];
        assert_eq!(first.name.as_deref(), Some("mail.example.com"));
        assert!(first.is_subdomain);
        assert_eq!(first.dns_records.as_ref().unwrap().a, ["93.184.216.34"]);
        assert_eq!(
            first
                .certificate_summaries
                .as_ref()
                .and_then(|c| c.subject_dn.as_ref())
                .and_then(|dn| dn.o.as_deref()),
            Some("Example Org")
        );
    }

    #[test]
    fn decodes_extracted_page_content() {
        let json = r#"{
            "title": "Example Domain",
            "links": [
                {"anchor": "Docs", "attributes": {"no_follow": true, "uri": {"full_uri": "https://example.com/docs", "host": "example.com", "path": "/docs"}}}
            ],
            "meta_tags": [{"name": "generator", "value": "Hugo"}],
            "response_chain": [{"status_code": 301}, {"status_code": 200}],
            "favicon_uri": {"full_uri": "https://example.com/favicon.ico"},
            "google_analytics_key": "UA-12345-6",
            "robots_disallow": ["/admin"]
        }"#;

        let extract: Extract = serde_json::from_str(json).unwrap();
        assert_eq!(extract.links.len(), 1);
        let attrs = extract.links[0].attributes.as_ref().unwrap();
        assert!(attrs.no_follow);
        assert_eq!(attrs.uri.as_ref().unwrap().path.as_deref(), Some("/docs"));
        assert_eq!(extract.meta_tags[0].name.as_deref(), Some("generator"));
        assert_eq!(extract.response_chain[0].status_code, 301);
        assert_eq!(
            extract.favicon_uri.unwrap().full_uri.as_deref(),
            Some("https://example.com/favicon.ico")
        );
        assert_eq!(extract.google_analytics_key.as_deref(), Some("UA-12345-6"));
        assert_eq!(extract.robots_disallow, ["/admin"]);
    }
}
