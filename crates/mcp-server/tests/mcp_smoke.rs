//! Protocol-level smoke test: spawn the server binary over stdio, list the
//! tools, and exercise input validation through a real MCP round trip.
//! No upstream network calls are made (validation rejects before any fetch).

use std::time::Duration;

use anyhow::{Context, Result};
use rmcp::{model::CallToolRequestParam, service::ServiceExt, transport::TokioChildProcess};
use tokio::process::Command;

#[tokio::test]
async fn mcp_exposes_get_dispute_data_and_validates_input() -> Result<()> {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_kleros-court-mcp"));
    cmd.env("RUST_LOG", "warn");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    let service = tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")??;

    let tools = tokio::time::timeout(
        Duration::from_secs(10),
        service.list_tools(Default::default()),
    )
    .await
    .context("timeout listing tools")??;
    let tool_names: Vec<&str> = tools.tools.iter().map(|t| t.name.as_ref()).collect();
    assert!(
        tool_names.contains(&"get_dispute_data"),
        "missing tool 'get_dispute_data' (available: {tool_names:?})"
    );

    // An unsupported chain is rejected before any upstream call, so this
    // round trip stays hermetic.
    let args = serde_json::json!({
        "dispute_id": "42",
        "chain_id": 999,
    });
    let result = tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: "get_dispute_data".into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .context("timeout calling get_dispute_data")??;

    assert_eq!(result.is_error, Some(true));
    let text = result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .context("missing text output")?;
    assert!(
        text.contains("unsupported chain ID: 999"),
        "unexpected error text: {text}"
    );

    service.cancel().await.context("shutdown")?;
    Ok(())
}
