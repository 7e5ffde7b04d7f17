//! Example: query a local node gateway for chain and account information.
//!
//! Run with: cargo run --example gateway -- [gateway-url] [base64-namespace-id]

use std::time::Duration;

use celestia_node_client::{Context, NodeClient, Result, namespace_id};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let url = args
        .next()
        .unwrap_or_else(|| "http://localhost:26659".to_string());
    let namespace = args.next().unwrap_or_else(|| "DCBNOWAP3dM=".to_string());

    let client = NodeClient::new(&url)?;
    let ctx = Context::background().with_timeout(Duration::from_secs(30));

    println!("=== Node gateway at {url} ===\n");

    // 1. Chain head
    println!("1. Fetching chain head...");
    let head = client.head(&ctx).await?;
    let height = head.header.height;
    println!("   Chain ID: {}", head.header.chain_id);
    println!("   Height: {height}");
    println!("   Time: {}", head.header.time);
    println!("   Validators: {}", head.validator_set.validators.len());
    println!("   DAH rows: {}", head.dah.row_roots.len());
    println!();

    // 2. Availability of the head block
    println!("2. Checking data availability...");
    let available = client.data_available(&ctx, height).await?;
    println!("   Available: {}", available.available);
    println!("   Probability: {}", available.probability_of_availability);
    println!();

    // 3. Namespace data
    println!("3. Fetching namespaced data...");
    let namespace = namespace_id(&namespace)?;
    let data = client.namespaced_data(&ctx, &namespace, height).await?;
    let messages = data.get_bytes()?;
    println!("   Namespace: {namespace}");
    println!("   Messages: {}", messages.len());
    for (i, message) in messages.iter().enumerate() {
        println!("   #{i}: {} bytes", message.len());
    }
    println!();

    // 4. Balance
    println!("4. Fetching node balance...");
    let balance = client.balance(&ctx).await?;
    println!("   Balance: {} {}", balance.amount, balance.denom);

    println!("\n=== Done! ===");
    Ok(())
}
