//! Kleros Court MCP Server
//!
//! Exposes Kleros dispute data to AI agents via MCP protocol.
//!
//! ## Tools
//!
//! - `get_dispute_data` - Retrieve a dispute's meta-evidence and evidence
//!   submissions, aggregated from the court API, the per-chain evidence
//!   subgraph and the IPFS content gateway
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "kleros-court": {
//!       "command": "kleros-court-mcp"
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod format;
mod tools;

use tools::KlerosCourtService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting Kleros Court MCP server");

    let service = KlerosCourtService::new()?;
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("Kleros Court MCP server stopped");
    Ok(())
}
