pub mod network;
pub use network::{ChainId, Network, ParseChainIdError, UnsupportedNetworkError};
