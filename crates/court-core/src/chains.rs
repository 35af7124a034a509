//! Static registry of the networks the aggregator knows how to query.

use serde::{Deserialize, Serialize};

/// Closed set of supported networks. Any other chain ID is rejected before a
/// single network call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportedChain {
    Mainnet,
    Gnosis,
}

impl SupportedChain {
    pub const ALL: [SupportedChain; 2] = [SupportedChain::Mainnet, SupportedChain::Gnosis];

    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            1 => Some(Self::Mainnet),
            100 => Some(Self::Gnosis),
            _ => None,
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Gnosis => 100,
        }
    }

    /// Display name used in reports and error context.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mainnet => "Ethereum Mainnet",
            Self::Gnosis => "Gnosis Chain",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_supported_chain_ids() {
        assert_eq!(SupportedChain::from_chain_id(1), Some(SupportedChain::Mainnet));
        assert_eq!(SupportedChain::from_chain_id(100), Some(SupportedChain::Gnosis));
    }

    #[test]
    fn rejects_unsupported_chain_ids() {
        for chain_id in [0, 2, 5, 56, 137, 42161] {
            assert_eq!(SupportedChain::from_chain_id(chain_id), None);
        }
    }

    #[test]
    fn chain_id_round_trips() {
        for chain in SupportedChain::ALL {
            assert_eq!(SupportedChain::from_chain_id(chain.chain_id()), Some(chain));
        }
    }

    #[test]
    fn names_are_human_readable() {
        assert_eq!(SupportedChain::Mainnet.name(), "Ethereum Mainnet");
        assert_eq!(SupportedChain::Gnosis.name(), "Gnosis Chain");
    }
}
