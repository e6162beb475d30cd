mod chain_id;
pub use chain_id::{ChainId, ParseChainIdError};

mod network;
pub use network::{Network, UnsupportedNetworkError};
