//! Fetch details for a single domain.
//!
//! Usage: RECONA_TOKEN=... cargo run --example domain_details [domain]

use recona::ReconaClient;

#[tokio::main]
async fn main() -> recona::Result<()> {
    let token = std::env::var("RECONA_TOKEN").expect("RECONA_TOKEN must be set");
    let domain_name = std::env::args().nth(1).unwrap_or_else(|| "google.com".to_string());

    let client = ReconaClient::new(token)?;
    let details = client.domains().details(&domain_name).await?;

    println!("Details about {domain_name}");
    if let Some(records) = &details.dns_records {
        for a in &records.a {
            println!("DNS A record: {a}");
        }
    }
    if let Some(title) = details.extract.as_ref().and_then(|e| e.title.as_ref()) {
        println!("Website title: {title}");
    }
    if let Some(summary) = &details.certificate_summaries {
        if let Some(o) = summary.subject_dn.as_ref().and_then(|dn| dn.o.as_ref()) {
            println!("Certificate subject org: {o}");
        }
        if let Some(o) = summary.issuer_dn.as_ref().and_then(|dn| dn.o.as_ref()) {
            println!("Certificate issuer org: {o}");
        }
    }
    if let Some(updated) = &details.updated_at {
        println!("Updated at: {updated}");
    }

    Ok(())
}
