//! Read-only aggregation of Kleros dispute data.
//!
//! Given a dispute ID and a supported chain, [`DisputeService`] assembles the
//! dispute's evidentiary record from three independent upstreams: the
//! centralized meta-evidence API, the per-chain evidence index (subgraph)
//! and the IPFS content gateway. Per-item content failures are isolated in
//! the result envelope; only input validation and the two index-level
//! fetches can fail the whole request.

pub mod chains;
pub mod config;
pub mod dispute;
pub mod error;
pub mod ipfs;
pub mod meta_evidence;
pub mod subgraph;
pub mod types;

pub use chains::SupportedChain;
pub use config::CourtConfig;
pub use dispute::DisputeService;
pub use error::{CourtError, FetchError, Result};
pub use ipfs::{resolve_uri, ContentFetcher};
pub use meta_evidence::MetaEvidenceFetcher;
pub use subgraph::SubgraphFetcher;
pub use types::{
    DisputeData, DisputeInput, EvidenceContent, EvidenceError, EvidenceSubmission, MetaEvidence,
    RulingOptions,
};
