//! Fetcher for the centralized meta-evidence API.

use std::sync::Arc;

use log::debug;
use reqwest::{Client, StatusCode};

use crate::chains::SupportedChain;
use crate::config::CourtConfig;
use crate::error::FetchError;
use crate::types::MetaEvidence;

/// One GET per request against a single fixed endpoint. Absence of
/// meta-evidence is a valid state, not an error.
#[derive(Clone)]
pub struct MetaEvidenceFetcher {
    client: Client,
    config: Arc<CourtConfig>,
}

impl MetaEvidenceFetcher {
    pub fn new(client: Client, config: Arc<CourtConfig>) -> Self {
        Self { client, config }
    }

    /// Returns `None` when the upstream reports 404 or an empty body. Any
    /// other failure (timeout, 5xx, malformed JSON) is surfaced to the
    /// caller as fatal.
    pub async fn fetch(
        &self,
        dispute_id: &str,
        chain: SupportedChain,
    ) -> Result<Option<MetaEvidence>, FetchError> {
        let endpoint = self.config.meta_evidence_endpoint.as_str();
        let chain_id = chain.chain_id().to_string();

        let response = self
            .client
            .get(endpoint)
            .query(&[("disputeId", dispute_id), ("chainId", chain_id.as_str())])
            .timeout(self.config.meta_evidence_timeout)
            .send()
            .await
            .map_err(|source| FetchError::Http {
                endpoint: endpoint.to_string(),
                source,
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(
                "no meta-evidence for dispute {dispute_id} on {}",
                chain.name()
            );
            return Ok(None);
        }

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Http {
            endpoint: endpoint.to_string(),
            source,
        })?;

        // Some deployments answer 200 with an empty body instead of 404.
        if body.trim().is_empty() {
            return Ok(None);
        }

        let meta_evidence =
            serde_json::from_str(&body).map_err(|source| FetchError::Deserialization {
                endpoint: endpoint.to_string(),
                source,
            })?;

        Ok(Some(meta_evidence))
    }
}
