use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CatalogError;

/// Customer tiers, each mapped to a fixed pricing and discount strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerTier {
    Standard,
    #[serde(rename = "VIP")]
    Vip,
    Friend,
}

impl CustomerTier {
    /// Every tier, in display order
    pub const ALL: [CustomerTier; 3] = [CustomerTier::Standard, CustomerTier::Vip, CustomerTier::Friend];

    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerTier::Standard => "Standard",
            CustomerTier::Vip => "VIP",
            CustomerTier::Friend => "Friend",
        }
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerTier {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(CustomerTier::Standard),
            "vip" => Ok(CustomerTier::Vip),
            "friend" => Ok(CustomerTier::Friend),
            _ => Err(CatalogError::InvalidTier(s.to_string())),
        }
    }
}
