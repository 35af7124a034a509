use thiserror::Error;

pub type Result<T> = std::result::Result<T, CourtError>;

/// Transport-level failure from one upstream call.
///
/// Carried inside [`CourtError::Upstream`] when the failing call is fatal for
/// the whole request, or rendered into an `EvidenceError` entry when it only
/// sinks a single evidence item.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("subgraph query errors: {0}")]
    SubgraphErrors(String),

    /// Unreachable after chain validation; kept as an invariant check.
    #[error("no subgraph endpoint configured for {0}")]
    MissingEndpoint(&'static str),

    #[error("IPFS URI is required")]
    EmptyUri,
}

/// Failure of a whole `get_dispute_data` operation.
#[derive(Debug, Error)]
pub enum CourtError {
    #[error("dispute ID must be a non-empty string")]
    EmptyDisputeId,

    #[error("unsupported chain ID: {0}. Supported chains: 1, 100")]
    UnsupportedChain(u64),

    #[error("failed to retrieve dispute data for dispute {dispute_id} on {network}: {source}")]
    Upstream {
        dispute_id: String,
        network: &'static str,
        #[source]
        source: FetchError,
    },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
