//! SSL/TLS certificate resource types.

use serde::{Deserialize, Serialize};

use super::common::{PageInfo, SearchPage};

/// A certificate record indexed by its SHA-256 fingerprint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Certificate {
    /// Structured certificate information
    #[serde(default)]
    pub parsed: Option<Parsed>,

    /// Raw certificate in PEM or DER form
    #[serde(default)]
    pub raw: Option<String>,

    /// SHA-256 fingerprint identifying the certificate
    #[serde(default)]
    pub fingerprint_sha256: Option<String>,

    /// Chain validation result
    #[serde(default)]
    pub validation: Option<Validation>,

    /// Timestamp of the last update to this record
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Certificate chain validation result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Validation {
    /// The chain validated successfully
    #[serde(default)]
    pub valid: bool,

    /// Reason for a failed validation
    #[serde(default)]
    pub reason: Option<String>,
}

/// Parsed certificate contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parsed {
    /// X.509 extensions
    #[serde(default)]
    pub extensions: Option<Extensions>,

    /// MD5 fingerprint
    #[serde(default)]
    pub fingerprint_md5: Option<String>,

    /// SHA-1 fingerprint
    #[serde(default)]
    pub fingerprint_sha1: Option<String>,

    /// SHA-256 fingerprint
    #[serde(default)]
    pub fingerprint_sha256: Option<String>,

    /// Issuer name attributes
    #[serde(default)]
    pub issuer: Option<Issuer>,

    /// Issuer distinguished name as a string
    #[serde(default)]
    pub issuer_dn: Option<String>,

    /// All names the certificate covers
    #[serde(default)]
    pub names: Vec<String>,

    /// The certificate is CT-redacted
    #[serde(default)]
    pub redacted: bool,

    /// Serial number
    #[serde(default)]
    pub serial_number: Option<String>,

    /// Signature over the TBS certificate
    #[serde(default)]
    pub signature: Option<Signature>,

    /// Signature algorithm
    #[serde(default)]
    pub signature_algorithm: Option<SignatureAlgorithm>,

    /// Subject name attributes
    #[serde(default)]
    pub subject: Option<Subject>,

    /// Subject distinguished name as a string
    #[serde(default)]
    pub subject_dn: Option<String>,

    /// Subject public key information
    #[serde(default)]
    pub subject_key_info: Option<SubjectKeyInfo>,

    /// Validation level (DV, OV, EV)
    #[serde(default)]
    pub validation_level: Option<String>,

    /// Validity period
    #[serde(default)]
    pub validity: Option<Validity>,

    /// X.509 version
    #[serde(default)]
    pub version: i64,
}

/// X.509 extensions relevant to reconnaissance
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Extensions {
    /// Authority Information Access URLs
    #[serde(default)]
    pub authority_info_access: Option<AuthorityInfoAccess>,

    /// Authority key identifier
    #[serde(default)]
    pub authority_key_id: Option<String>,

    /// Basic constraints
    #[serde(default)]
    pub basic_constraints: Option<BasicConstraints>,

    /// CRL distribution point URLs
    #[serde(default)]
    pub crl_distribution_points: Vec<String>,

    /// Extended key usage flags
    #[serde(default)]
    pub extended_key_usage: Option<ExtendedKeyUsage>,

    /// Key usage flags
    #[serde(default)]
    pub key_usage: Option<KeyUsage>,

    /// Embedded certificate transparency timestamps
    #[serde(default)]
    pub signed_certificate_timestamps: Vec<SignedCertificateTimestamp>,

    /// Subject alternative names
    #[serde(default)]
    pub subject_alt_name: Option<SubjectAltName>,

    /// Subject key identifier
    #[serde(default)]
    pub subject_key_id: Option<String>,
}

/// Authority Information Access extension
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorityInfoAccess {
    /// CA issuer certificate URLs
    #[serde(default)]
    pub issuer_urls: Vec<String>,

    /// OCSP responder URLs
    #[serde(default)]
    pub ocspurls: Vec<String>,
}

/// Basic constraints extension
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BasicConstraints {
    /// The certificate may sign other certificates
    #[serde(default)]
    pub is_ca: bool,
}

/// Extended key usage extension
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ExtendedKeyUsage {
    /// TLS client authentication
    #[serde(default)]
    pub client_auth: bool,

    /// TLS server authentication
    #[serde(default)]
    pub server_auth: bool,
}

/// Key usage extension
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct KeyUsage {
    /// Content commitment (non-repudiation)
    #[serde(default)]
    pub content_commitment: bool,

    /// Digital signature
    #[serde(default)]
    pub digital_signature: bool,

    /// Key encipherment
    #[serde(default)]
    pub key_encipherment: bool,

    /// Raw usage bits
    #[serde(default)]
    pub value: i64,
}

/// Subject alternative name extension
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectAltName {
    /// DNS names
    #[serde(default)]
    pub dns_names: Vec<String>,

    /// IP addresses
    #[serde(default)]
    pub ip_addresses: Vec<String>,
}

/// An embedded certificate transparency timestamp
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignedCertificateTimestamp {
    /// CT log identifier
    #[serde(default)]
    pub log_id: Option<String>,

    /// Log signature
    #[serde(default)]
    pub signature: Option<String>,

    /// Unix timestamp of the log entry
    #[serde(default)]
    pub timestamp: i64,

    /// SCT version
    #[serde(default)]
    pub version: i64,
}

/// Issuer name attributes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Issuer {
    /// Common names
    #[serde(default)]
    pub common_name: Vec<String>,

    /// Countries
    #[serde(default)]
    pub country: Vec<String>,

    /// Localities
    #[serde(default)]
    pub locality: Vec<String>,

    /// Organizations
    #[serde(default)]
    pub organization: Vec<String>,

    /// Organizational units
    #[serde(default)]
    pub organizational_unit: Vec<String>,

    /// Provinces
    #[serde(default)]
    pub province: Vec<String>,
}

/// Subject name attributes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subject {
    /// Common names
    #[serde(default)]
    pub common_name: Vec<String>,

    /// Countries
    #[serde(default)]
    pub country: Vec<String>,

    /// Localities
    #[serde(default)]
    pub locality: Vec<String>,

    /// Organizations
    #[serde(default)]
    pub organization: Vec<String>,

    /// Organizational units
    #[serde(default)]
    pub organizational_unit: Vec<String>,

    /// Postal codes
    #[serde(default)]
    pub postal_code: Vec<String>,

    /// Provinces
    #[serde(default)]
    pub province: Vec<String>,
}

/// Signature over the TBS certificate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Signature {
    /// The certificate is self-signed
    #[serde(default)]
    pub self_signed: bool,

    /// Algorithm used to produce the signature
    #[serde(default)]
    pub signature_algorithm: Option<SignatureAlgorithm>,

    /// The signature verified successfully
    #[serde(default)]
    pub valid: bool,

    /// Signature bytes, base64 encoded
    #[serde(default)]
    pub value: Option<String>,
}

/// A signature algorithm name and OID
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignatureAlgorithm {
    /// Algorithm name (e.g. "SHA256-RSA")
    #[serde(default)]
    pub name: Option<String>,

    /// Algorithm OID
    #[serde(default)]
    pub oid: Option<String>,
}

/// Subject public key information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectKeyInfo {
    /// SHA-256 fingerprint of the public key
    #[serde(default)]
    pub fingerprint_sha256: Option<String>,

    /// Key algorithm
    #[serde(default)]
    pub key_algorithm: Option<KeyAlgorithm>,

    /// RSA public key parameters, when applicable
    #[serde(default)]
    pub rsapublic_key: Option<RsaPublicKey>,
}

/// Public key algorithm name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyAlgorithm {
    /// Algorithm name (e.g. "RSA")
    #[serde(default)]
    pub name: Option<String>,
}

/// RSA public key parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RsaPublicKey {
    /// Public exponent
    #[serde(default)]
    pub exponent: i64,

    /// Modulus length in bits
    #[serde(default)]
    pub length: i64,

    /// Modulus, base64 encoded
    #[serde(default)]
    pub modulus: Option<String>,
}

/// Certificate validity period
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Validity {
    /// Start of the validity period
    #[serde(default)]
    pub start: Option<String>,

    /// End of the validity period
    #[serde(default)]
    pub end: Option<String>,

    /// Period length in seconds
    #[serde(default)]
    pub length: i64,
}

/// Issuer distinguished name in attribute form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssuerDn {
    /// Raw DN string
    #[serde(default)]
    pub raw: Option<String>,

    /// Country
    #[serde(default, rename = "C")]
    pub c: Option<String>,

    /// Common name
    #[serde(default, rename = "CN")]
    pub cn: Option<String>,

    /// Locality
    #[serde(default, rename = "L")]
    pub l: Option<String>,

    /// Organization
    #[serde(default, rename = "O")]
    pub o: Option<String>,

    /// Organizational unit
    #[serde(default, rename = "OU")]
    pub ou: Option<String>,

    /// State or province
    #[serde(default, rename = "ST")]
    pub st: Option<String>,
}

/// Subject distinguished name in attribute form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectDn {
    /// Raw DN string
    #[serde(default)]
    pub raw: Option<String>,

    /// Country
    #[serde(default, rename = "C")]
    pub c: Option<String>,

    /// Common name
    #[serde(default, rename = "CN")]
    pub cn: Option<String>,

    /// Locality
    #[serde(default, rename = "L")]
    pub l: Option<String>,

    /// Organization
    #[serde(default, rename = "O")]
    pub o: Option<String>,

    /// Organizational unit
    #[serde(default, rename = "OU")]
    pub ou: Option<String>,

    /// State or province
    #[serde(default, rename = "ST")]
    pub st: Option<String>,

    /// Business category (EV certificates)
    #[serde(default, rename = "businessCategory")]
    pub business_category: Option<String>,

    /// Jurisdiction country (EV certificates)
    #[serde(default, rename = "jurisdictionCountry")]
    pub jurisdiction_country: Option<String>,

    /// Serial number attribute
    #[serde(default, rename = "serialNumber")]
    pub serial_number: Option<String>,
}

/// Response shape for `/certificates/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificatesResponse {
    /// Pagination metadata
    #[serde(flatten)]
    pub page: PageInfo,

    /// Matching certificate records for this page
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

impl SearchPage for CertificatesResponse {
    type Item = Certificate;

    fn into_items(self) -> Vec<Certificate> {
        self.certificates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_parsed_certificate() {
        let json = r#"{
            "fingerprint_sha256": "ab12",
            "validation": {"valid": true},
            "parsed": {
                "issuer_dn": "C=US, O=Let's Encrypt, CN=R11",
                "names": ["example.com", "www.example.com"],
                "validity": {"start": "2026-01-01T00:00:00Z", "end": "2026-03-31T23:59:59Z", "length": 7775999},
                "extensions": {"subject_alt_name": {"dns_names": ["example.com"]}}
            }
        }"#;

        let cert: Certificate = serde_json::from_str(json).unwrap();
        assert!(cert.validation.unwrap().valid);
        let parsed = cert.parsed.unwrap();
        assert_eq!(parsed.names.len(), 2);
        assert_eq!(
            parsed.extensions.unwrap().subject_alt_name.unwrap().dns_names,
            ["example.com"]
        );
    }
}
