//! Upstream endpoint configuration.
//!
//! Built once at startup and passed by reference into each fetcher, so tests
//! can substitute every endpoint with a local mock server.

use std::env;
use std::time::Duration;

use crate::chains::SupportedChain;

/// Immutable configuration for all upstream calls.
#[derive(Debug, Clone)]
pub struct CourtConfig {
    /// Centralized meta-evidence API.
    pub meta_evidence_endpoint: String,
    /// HTTP gateway for content-addressed evidence files.
    pub ipfs_gateway: String,
    /// Per-network evidence index (subgraph) endpoints.
    pub mainnet_subgraph: Option<String>,
    pub gnosis_subgraph: Option<String>,
    /// Per-request timeouts. Expiry of one content fetch fails that item only.
    pub meta_evidence_timeout: Duration,
    pub subgraph_timeout: Duration,
    pub content_timeout: Duration,
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self {
            meta_evidence_endpoint:
                "https://kleros-api.netlify.app/.netlify/functions/get-dispute-metaevidence"
                    .to_string(),
            ipfs_gateway: "https://cdn.kleros.link".to_string(),
            mainnet_subgraph: Some(
                "https://gateway.thegraph.com/api/d1d19cef4bc7647cc6cfad4ad2662628/subgraphs/id/BqbBhB4R5pNAtdYya2kcojMrQMp8nVHioUnP22qN8JoN"
                    .to_string(),
            ),
            gnosis_subgraph: Some(
                "https://gateway.thegraph.com/api/d1d19cef4bc7647cc6cfad4ad2662628/subgraphs/id/FxhLntVBELrZ4t1c2HNNvLWEYfBjpB8iKZiEymuFSPSr"
                    .to_string(),
            ),
            meta_evidence_timeout: Duration::from_secs(15),
            subgraph_timeout: Duration::from_secs(10),
            content_timeout: Duration::from_secs(10),
        }
    }
}

impl CourtConfig {
    /// Production defaults with optional environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = env_override("KLEROS_META_EVIDENCE_ENDPOINT") {
            config.meta_evidence_endpoint = endpoint;
        }
        if let Some(gateway) = env_override("KLEROS_IPFS_GATEWAY") {
            config.ipfs_gateway = gateway;
        }
        if let Some(endpoint) = env_override("KLEROS_MAINNET_SUBGRAPH") {
            config.mainnet_subgraph = Some(endpoint);
        }
        if let Some(endpoint) = env_override("KLEROS_GNOSIS_SUBGRAPH") {
            config.gnosis_subgraph = Some(endpoint);
        }
        config
    }

    pub fn subgraph_endpoint(&self, chain: SupportedChain) -> Option<&str> {
        match chain {
            SupportedChain::Mainnet => self.mainnet_subgraph.as_deref(),
            SupportedChain::Gnosis => self.gnosis_subgraph.as_deref(),
        }
    }
}

fn env_override(key: &str) -> Option<String> {
    let value = env::var(key).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_covers_all_chains() {
        let config = CourtConfig::default();
        for chain in SupportedChain::ALL {
            assert!(config.subgraph_endpoint(chain).is_some());
        }
        assert!(config.meta_evidence_endpoint.starts_with("https://"));
        assert!(config.ipfs_gateway.starts_with("https://"));
    }

    #[test]
    fn env_override_applies_trimmed_values() {
        env::set_var("KLEROS_IPFS_GATEWAY", "  https://ipfs.example.org  ");
        let config = CourtConfig::from_env();
        assert_eq!(config.ipfs_gateway, "https://ipfs.example.org");
        env::remove_var("KLEROS_IPFS_GATEWAY");
    }

    #[test]
    fn blank_env_override_is_ignored() {
        env::set_var("KLEROS_GNOSIS_SUBGRAPH", "   ");
        let config = CourtConfig::from_env();
        assert_eq!(
            config.gnosis_subgraph,
            CourtConfig::default().gnosis_subgraph
        );
        env::remove_var("KLEROS_GNOSIS_SUBGRAPH");
    }
}
