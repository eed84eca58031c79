// Rollcall - main GraphQL server
// Run with: cargo run --bin server

use dotenv::dotenv;
use rollcall::GraphQLServerBuilder;
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional; variables may also come from the environment
    let _ = dotenv();

    tracing_subscriber::fmt::init();

    info!("🎲 Starting Rollcall server...");

    let server_port = env::var("SERVER_PORT")
        .unwrap_or_else(|_| "4000".to_string())
        .parse::<u16>()
        .unwrap_or(4000);

    GraphQLServerBuilder::new()
        .with_port(server_port)
        .build_and_run()
        .await?;

    Ok(())
}
