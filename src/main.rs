//! FitCoach
//!
//! An MCP server for fitness chat assistance.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

mod analysis;
mod api;
mod build_info;
mod catalog;
mod mcp;
mod tools;

use mcp::FitCoachService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fitcoach=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    // Remote lookup client
    let api = api::ApiClient::from_env();
    if api.has_key() {
        eprintln!("Remote lookups: configured ({})", api.base_url());
    } else {
        eprintln!("Remote lookups: no API key set, using built-in catalog");
    }

    // Create the FitCoach service
    let service = FitCoachService::new(api);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
