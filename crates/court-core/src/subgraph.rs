//! Fetcher for the decentralized evidence index (subgraph).

use std::sync::Arc;

use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::chains::SupportedChain;
use crate::config::CourtConfig;
use crate::error::FetchError;
use crate::types::EvidenceSubmission;

const EVIDENCE_QUERY: &str = r#"
  query getDispute($id: String!) {
    dispute(id: $id) {
      evidenceGroup {
        evidence {
          URI
          sender
          creationTime
        }
      }
    }
  }
"#;

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'static str,
    variables: QueryVariables<'a>,
}

#[derive(Debug, Serialize)]
struct QueryVariables<'a> {
    id: &'a str,
}

#[derive(Debug, Deserialize)]
struct SubgraphResponse {
    data: Option<SubgraphData>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct SubgraphData {
    dispute: Option<DisputeRecord>,
}

#[derive(Debug, Deserialize)]
struct DisputeRecord {
    #[serde(rename = "evidenceGroup")]
    evidence_group: Option<EvidenceGroup>,
}

#[derive(Debug, Deserialize)]
struct EvidenceGroup {
    #[serde(default)]
    evidence: Vec<EvidenceSubmission>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// One GraphQL POST per request against the chain-specific index endpoint.
#[derive(Clone)]
pub struct SubgraphFetcher {
    client: Client,
    config: Arc<CourtConfig>,
}

impl SubgraphFetcher {
    pub fn new(client: Client, config: Arc<CourtConfig>) -> Self {
        Self { client, config }
    }

    /// Returns the ordered evidence submission list for the dispute. A
    /// dispute unknown to the index yields an empty list, never an error;
    /// query-level errors are fatal even when partial data is present.
    pub async fn fetch(
        &self,
        dispute_id: &str,
        chain: SupportedChain,
    ) -> Result<Vec<EvidenceSubmission>, FetchError> {
        let endpoint = self
            .config
            .subgraph_endpoint(chain)
            .ok_or(FetchError::MissingEndpoint(chain.name()))?;

        let request = GraphQlRequest {
            query: EVIDENCE_QUERY,
            variables: QueryVariables { id: dispute_id },
        };

        let response = self
            .client
            .post(endpoint)
            .json(&request)
            .timeout(self.config.subgraph_timeout)
            .send()
            .await
            .map_err(|source| FetchError::Http {
                endpoint: endpoint.to_string(),
                source,
            })?;

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
        let parsed: SubgraphResponse =
            serde_json::from_str(&body).map_err(|source| FetchError::Deserialization {
                endpoint: endpoint.to_string(),
                source,
            })?;

        if let Some(errors) = parsed.errors {
            if !errors.is_empty() {
                let joined = errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(FetchError::SubgraphErrors(joined));
            }
        }

        let submissions = parsed
            .data
            .and_then(|data| data.dispute)
            .and_then(|dispute| dispute.evidence_group)
            .map(|group| group.evidence)
            .unwrap_or_default();

        debug!(
            "subgraph returned {} evidence submissions for dispute {dispute_id} on {}",
            submissions.len(),
            chain.name()
        );

        Ok(submissions)
    }
}
