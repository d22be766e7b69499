//! Collect every known subdomain of a domain with an exhaustive
//! paginated search.
//!
//! Usage: RECONA_TOKEN=... cargo run --example subdomains [domain]

use recona::{ReconaClient, Search};

#[tokio::main]
async fn main() -> recona::Result<()> {
    let token = std::env::var("RECONA_TOKEN").expect("RECONA_TOKEN must be set");
    let domain_name = std::env::args().nth(1).unwrap_or_else(|| "google.com".to_string());

    let client = ReconaClient::new(token)?;
    let results = client
        .domains()
        .search_all(Search::query(format!("name.ends_with: {domain_name}")))
        .await?;

    for domain in &results {
        if let Some(name) = &domain.name {
            println!("{name}");
        }
    }
    if results.is_empty() {
        println!("Subdomains for domain {domain_name} not found");
    } else {
        println!("-- {} subdomains", results.len());
    }

    Ok(())
}
