use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::EnumIter;
use thiserror::Error;

use super::ChainId;

/// A network supported by the registry.
///
/// The set is closed: a string only becomes a `Network` through an exact,
/// case-sensitive match against the name tokens, so code holding a value can
/// resolve its chain ID without a failure path.
#[derive(EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    BaseSepolia,
    Base,
    AvalancheFuji,
    Avalanche,
    Optimism,
    Gnosis,
    Polygon,
}

#[derive(Error, Debug)]
#[error("unsupported network: {0}")]
pub struct UnsupportedNetworkError(pub String);

impl Network {
    /// Chain ID as registered in the public EVM chain registry.
    pub fn chain_id(&self) -> ChainId {
        let result: u64 = match self {
            Self::BaseSepolia => 84532,
            Self::Base => 8453,
            Self::AvalancheFuji => 43113,
            Self::Avalanche => 43114,
            Self::Optimism => 10,
            Self::Gnosis => 100,
            Self::Polygon => 137,
        };

        ChainId::new(result)
    }

    /// The name token used for this network in payloads and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BaseSepolia => "base-sepolia",
            Self::Base => "base",
            Self::AvalancheFuji => "avalanche-fuji",
            Self::Avalanche => "avalanche",
            Self::Optimism => "optimism",
            Self::Gnosis => "gnosis",
            Self::Polygon => "polygon",
        }
    }

    /// Inverse of [`Network::chain_id`]. Well defined because no two
    /// supported networks share a chain ID.
    pub fn from_chain_id(chain_id: ChainId) -> Option<Network> {
        match chain_id.u64() {
            84532 => Some(Self::BaseSepolia),
            8453 => Some(Self::Base),
            43113 => Some(Self::AvalancheFuji),
            43114 => Some(Self::Avalanche),
            10 => Some(Self::Optimism),
            100 => Some(Self::Gnosis),
            137 => Some(Self::Polygon),
            _ => None,
        }
    }

    /// Membership check for untrusted input. Exact match only: no
    /// normalization, no trimming.
    pub fn is_supported(value: &str) -> bool {
        value.parse::<Network>().is_ok()
    }

    pub fn is_testnet(&self) -> bool {
        matches!(self, Self::BaseSepolia | Self::AvalancheFuji)
    }

    pub fn is_mainnet(&self) -> bool {
        !self.is_testnet()
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Network {
    type Err = UnsupportedNetworkError;

    fn from_str(param: &str) -> Result<Self, Self::Err> {
        match param {
            "base-sepolia" => Ok(Self::BaseSepolia),
            "base" => Ok(Self::Base),
            "avalanche-fuji" => Ok(Self::AvalancheFuji),
            "avalanche" => Ok(Self::Avalanche),
            "optimism" => Ok(Self::Optimism),
            "gnosis" => Ok(Self::Gnosis),
            "polygon" => Ok(Self::Polygon),
            _ => Err(UnsupportedNetworkError(param.to_string())),
        }
    }
}

impl TryFrom<&str> for Network {
    type Error = UnsupportedNetworkError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;

        value.parse().map_err(serde::de::Error::custom)
    }
}
