//! Print the authenticated account's profile and quota usage.
//!
//! Usage: RECONA_TOKEN=... cargo run --example account

use recona::ReconaClient;

#[tokio::main]
async fn main() -> recona::Result<()> {
    let token = std::env::var("RECONA_TOKEN").expect("RECONA_TOKEN must be set");
    let client = ReconaClient::new(token)?;

    let profile = client.account().details().await?;

    println!("Login: {}", profile.customer.login);
    if let Some(plan) = &profile.customer.subscription_name {
        println!("Plan: {plan}");
    }
    println!(
        "Requests today: {}/{} ({} remaining)",
        profile.request_count,
        profile.request_limit_per_day,
        profile.requests_remaining()
    );

    Ok(())
}
