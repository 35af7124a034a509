//! MCP tools for Kleros Court dispute data.

use std::sync::Arc;

use kleros_court_core::{CourtConfig, DisputeInput, DisputeService};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;

use crate::format::render_dispute_data;

/// Kleros Court MCP service
#[derive(Clone)]
pub struct KlerosCourtService {
    /// Aggregation orchestrator
    disputes: Arc<DisputeService>,
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl KlerosCourtService {
    pub fn new() -> anyhow::Result<Self> {
        let config = CourtConfig::from_env();
        Ok(Self {
            disputes: Arc::new(DisputeService::new(config)?),
            tool_router: Self::tool_router(),
        })
    }
}

#[tool_handler]
impl ServerHandler for KlerosCourtService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("Kleros Court dispute data for AI agents. Use 'get_dispute_data' to retrieve a dispute's meta-evidence and evidence submissions on Ethereum Mainnet (chain 1) or Gnosis Chain (chain 100).".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetDisputeDataRequest {
    /// Dispute identifier, an opaque string scoped to one network
    #[schemars(description = "The dispute ID to retrieve data for")]
    pub dispute_id: String,

    /// Network the dispute lives on
    #[schemars(description = "The chain ID (1 for Ethereum Mainnet, 100 for Gnosis Chain)")]
    pub chain_id: u64,
}

#[tool_router]
impl KlerosCourtService {
    #[tool(description = "Retrieve comprehensive dispute data from Kleros including meta-evidence and evidence submissions from multiple blockchain networks")]
    pub async fn get_dispute_data(
        &self,
        Parameters(request): Parameters<GetDisputeDataRequest>,
    ) -> Result<CallToolResult, McpError> {
        let input = DisputeInput {
            dispute_id: request.dispute_id,
            chain_id: request.chain_id,
        };

        match self.disputes.get_dispute_data(&input).await {
            Ok(data) => Ok(CallToolResult::success(vec![Content::text(
                render_dispute_data(&data),
            )])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error retrieving dispute data: {e}"
            ))])),
        }
    }
}
