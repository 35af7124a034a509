//! Fetcher for evidence content behind an IPFS HTTP gateway.

use std::sync::Arc;

use log::debug;
use reqwest::Client;

use crate::config::CourtConfig;
use crate::error::FetchError;
use crate::types::EvidenceContent;

/// Resolve an evidence URI to a fetchable HTTP URL.
///
/// Recognized dialects, first match wins: `ipfs://` scheme, root-relative
/// `/ipfs/` path, bare CIDv0/CIDv1 hash, absolute HTTP(S) URL. Anything else
/// falls back to being treated as a bare hash.
pub fn resolve_uri(gateway: &str, uri: &str) -> String {
    if let Some(path) = uri.strip_prefix("ipfs://") {
        return format!("{gateway}/ipfs/{path}");
    }
    if uri.starts_with("/ipfs/") {
        return format!("{gateway}{uri}");
    }
    if uri.starts_with("Qm") || uri.starts_with("bafy") {
        return format!("{gateway}/ipfs/{uri}");
    }
    if uri.starts_with("http") {
        return uri.to_string();
    }
    format!("{gateway}/ipfs/{uri}")
}

/// One GET per evidence item. Content is third-party-hosted and individually
/// unreliable, so every failure is surfaced per-item for the orchestrator to
/// record instead of aborting the request.
#[derive(Clone)]
pub struct ContentFetcher {
    client: Client,
    config: Arc<CourtConfig>,
}

impl ContentFetcher {
    pub fn new(client: Client, config: Arc<CourtConfig>) -> Self {
        Self { client, config }
    }

    pub async fn fetch_content(&self, uri: &str) -> Result<EvidenceContent, FetchError> {
        if uri.is_empty() {
            return Err(FetchError::EmptyUri);
        }

        let url = resolve_uri(&self.config.ipfs_gateway, uri);
        debug!("fetching evidence content from {url}");

        let response = self
            .client
            .get(&url)
            .timeout(self.config.content_timeout)
            .send()
            .await
            .map_err(|source| FetchError::Http {
                endpoint: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                endpoint: url,
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Http {
            endpoint: url.clone(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| FetchError::Deserialization {
            endpoint: url,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GATEWAY: &str = "https://cdn.kleros.link";

    #[test]
    fn resolves_ipfs_scheme() {
        assert_eq!(
            resolve_uri(GATEWAY, "ipfs://QmHash/evidence.json"),
            "https://cdn.kleros.link/ipfs/QmHash/evidence.json"
        );
    }

    #[test]
    fn resolves_root_relative_path() {
        assert_eq!(
            resolve_uri(GATEWAY, "/ipfs/QmHash"),
            "https://cdn.kleros.link/ipfs/QmHash"
        );
    }

    #[test]
    fn resolves_bare_cid_v0_and_v1() {
        assert_eq!(
            resolve_uri(GATEWAY, "QmHash"),
            "https://cdn.kleros.link/ipfs/QmHash"
        );
        assert_eq!(
            resolve_uri(GATEWAY, "bafybeigdyrhash"),
            "https://cdn.kleros.link/ipfs/bafybeigdyrhash"
        );
    }

    #[test]
    fn passes_absolute_urls_through() {
        for url in [
            "http://example.com/evidence.json",
            "https://example.com/evidence.json",
        ] {
            assert_eq!(resolve_uri(GATEWAY, url), url);
        }
    }

    #[test]
    fn resolution_is_idempotent_for_absolute_urls() {
        let resolved = resolve_uri(GATEWAY, "/ipfs/QmHash");
        assert_eq!(resolve_uri(GATEWAY, &resolved), resolved);
    }

    #[test]
    fn unrecognized_dialect_falls_back_to_bare_hash() {
        assert_eq!(
            resolve_uri(GATEWAY, "zb2rhsomething"),
            "https://cdn.kleros.link/ipfs/zb2rhsomething"
        );
    }
}
