use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Copy, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct ChainId(u64);

impl ChainId {
    pub fn new(id: u64) -> Self {
        ChainId(id)
    }

    pub fn u64(&self) -> u64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u64::deserialize(deserializer)?;

        Ok(ChainId(id))
    }
}

impl Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(thiserror::Error, Debug)]
#[error("invalid chain id: {0}")]
pub struct ParseChainIdError(String);

impl FromStr for ChainId {
    type Err = ParseChainIdError;

    fn from_str(param: &str) -> Result<Self, Self::Err> {
        u64::from_str(param).map(ChainId).map_err(|_| ParseChainIdError(param.to_string()))
    }
}

impl From<u64> for ChainId {
    fn from(chain_id: u64) -> Self {
        ChainId(chain_id)
    }
}

impl From<ChainId> for u64 {
    fn from(chain_id: ChainId) -> Self {
        chain_id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let chain_id = ChainId::new(8453);

        assert_eq!(chain_id.to_string(), "8453");
        assert_eq!("8453".parse::<ChainId>().unwrap(), chain_id);
    }

    #[test]
    fn test_parse_rejects_non_numeric_input() {
        assert!("base".parse::<ChainId>().is_err());
        assert!("-1".parse::<ChainId>().is_err());
        assert!("".parse::<ChainId>().is_err());
    }

    #[test]
    fn test_serde_round_trip_as_number() {
        let json = serde_json::to_string(&ChainId::new(84532)).unwrap();
        assert_eq!(json, "84532");

        let chain_id: ChainId = serde_json::from_str("84532").unwrap();
        assert_eq!(chain_id, ChainId::new(84532));
    }

    #[test]
    fn test_u64_conversions() {
        let chain_id = ChainId::from(137u64);

        assert_eq!(chain_id.u64(), 137);
        assert_eq!(u64::from(chain_id), 137);
    }
}
