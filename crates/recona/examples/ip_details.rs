//! Fetch details for a single host by IP address.
//!
//! Usage: RECONA_TOKEN=... cargo run --example ip_details [ip]

use recona::ReconaClient;

#[tokio::main]
async fn main() -> recona::Result<()> {
    let token = std::env::var("RECONA_TOKEN").expect("RECONA_TOKEN must be set");
    let ip = std::env::args().nth(1).unwrap_or_else(|| "8.8.8.8".to_string());

    let client = ReconaClient::new(token)?;
    let host = client.hosts().details(&ip).await?;

    println!("Details about {ip}");
    if let Some(geo) = &host.geo {
        println!(
            "Location: {} {}",
            geo.country.as_deref().unwrap_or("?"),
            geo.city_name.as_deref().unwrap_or("")
        );
    }
    if let Some(isp) = host.isp.as_ref().and_then(|i| i.isp.as_ref()) {
        println!("ISP: {isp}");
    }
    for port in &host.ports {
        println!(
            "Port {}: {} {}",
            port.port,
            port.product.as_deref().unwrap_or("unknown"),
            port.version.as_deref().unwrap_or("")
        );
    }
    if let Some(severity) = &host.severity_details {
        println!(
            "Findings: {} high / {} medium / {} low",
            severity.high, severity.medium, severity.low
        );
    }

    Ok(())
}
