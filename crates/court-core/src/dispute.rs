//! Aggregation orchestrator for dispute data.

use std::sync::Arc;

use log::{info, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

use crate::chains::SupportedChain;
use crate::config::CourtConfig;
use crate::error::{CourtError, FetchError, Result};
use crate::ipfs::ContentFetcher;
use crate::meta_evidence::MetaEvidenceFetcher;
use crate::subgraph::SubgraphFetcher;
use crate::types::{DisputeData, DisputeInput, EvidenceError};

const USER_AGENT: &str = concat!("kleros-court-mcp/", env!("CARGO_PKG_VERSION"));

/// Assembles everything known about a dispute's evidentiary record from
/// three independent upstreams: the meta-evidence API, the evidence index
/// and the content gateway.
pub struct DisputeService {
    meta_evidence: MetaEvidenceFetcher,
    subgraph: SubgraphFetcher,
    content: ContentFetcher,
}

impl DisputeService {
    pub fn new(config: CourtConfig) -> Result<Self> {
        let config = Arc::new(config);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            meta_evidence: MetaEvidenceFetcher::new(client.clone(), config.clone()),
            subgraph: SubgraphFetcher::new(client.clone(), config.clone()),
            content: ContentFetcher::new(client, config),
        })
    }

    /// Fails only on invalid input or when the meta-evidence or index fetch
    /// itself fails. Individual content fetch failures are recorded in the
    /// envelope instead of aborting the request.
    pub async fn get_dispute_data(&self, input: &DisputeInput) -> Result<DisputeData> {
        if input.dispute_id.trim().is_empty() {
            return Err(CourtError::EmptyDisputeId);
        }
        let chain = SupportedChain::from_chain_id(input.chain_id)
            .ok_or(CourtError::UnsupportedChain(input.chain_id))?;
        let dispute_id = input.dispute_id.as_str();

        // Neither result feeds the other, so both upstreams are queried
        // concurrently. Either one failing aborts the whole request.
        let (meta_evidence, submissions) = tokio::try_join!(
            self.meta_evidence.fetch(dispute_id, chain),
            self.subgraph.fetch(dispute_id, chain),
        )
        .map_err(|source: FetchError| CourtError::Upstream {
            dispute_id: dispute_id.to_string(),
            network: chain.name(),
            source,
        })?;

        // Fan out one content fetch per submission. All tasks are spawned
        // before the first join, and every task is joined regardless of the
        // others' outcomes: a slow or failing item must not sink the rest.
        let mut handles = Vec::with_capacity(submissions.len());
        for submission in &submissions {
            let fetcher = self.content.clone();
            let uri = submission.uri.clone();
            handles.push(tokio::spawn(
                async move { fetcher.fetch_content(&uri).await },
            ));
        }

        let mut evidence_contents = Vec::new();
        let mut evidence_errors = Vec::new();
        for (submission, handle) in submissions.iter().zip(handles) {
            match handle.await {
                Ok(Ok(content)) => evidence_contents.push(content),
                Ok(Err(err)) => {
                    warn!("evidence fetch failed for {}: {err}", submission.uri);
                    evidence_errors.push(EvidenceError {
                        evidence_uri: submission.uri.clone(),
                        error: err.to_string(),
                    });
                }
                Err(err) => {
                    evidence_errors.push(EvidenceError {
                        evidence_uri: submission.uri.clone(),
                        error: format!("evidence fetch task failed: {err}"),
                    });
                }
            }
        }

        info!(
            "dispute {dispute_id} on {}: meta-evidence {}, {} evidence items fetched, {} failed",
            chain.name(),
            if meta_evidence.is_some() { "present" } else { "absent" },
            evidence_contents.len(),
            evidence_errors.len()
        );

        Ok(DisputeData {
            dispute_id: input.dispute_id.clone(),
            chain_id: chain.chain_id(),
            meta_evidence,
            evidence_contents,
            evidence_errors,
        })
    }
}
