//! List hosts exposing a given port, paginating through all results.
//!
//! Usage: RECONA_TOKEN=... cargo run --example ips_with_open_port [port]

use recona::{ReconaClient, Search};

#[tokio::main]
async fn main() -> recona::Result<()> {
    let token = std::env::var("RECONA_TOKEN").expect("RECONA_TOKEN must be set");
    let port = std::env::args().nth(1).unwrap_or_else(|| "9200".to_string());

    let client = ReconaClient::new(token)?;
    let hosts = client
        .hosts()
        .search_all(Search::query(format!("ports.port: {port}")))
        .await?;

    for host in &hosts {
        if let Some(ip) = &host.ip {
            println!("{ip} open ports: {:?}", host.open_ports());
        }
    }
    println!("-- {} hosts with port {port} open", hosts.len());

    Ok(())
}
