//! Constants shared by the Archipelago world and the SDK mod
//!
//! Location ids handed to Archipelago are `BASE_ID + code`, where `code` is the
//! small per-location offset stored in the data file.

use serde::{Deserialize, Serialize};

/// Base ID for all BL2 locations in Archipelago
pub const BASE_ID: u64 = 3_333_000;

/// Packaged data file, relative to the crate root
pub const DEFAULT_DATA_PATH: &str = "data/bl2_data.json";

/// Location categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationCategory {
    /// Boss kills
    Bosses,
    /// Vault symbols, stashes and other pickups
    Collectibles,
    /// Area discoveries
    Discoveries,
}

/// All categories, in the order they are listed in the data file
pub const CATEGORIES: [LocationCategory; 3] = [
    LocationCategory::Bosses,
    LocationCategory::Collectibles,
    LocationCategory::Discoveries,
];

impl LocationCategory {
    /// Key used in the data file
    pub fn key(&self) -> &'static str {
        match self {
            LocationCategory::Bosses => "bosses",
            LocationCategory::Collectibles => "collectibles",
            LocationCategory::Discoveries => "discoveries",
        }
    }

    /// Name shown to players
    pub fn display_name(&self) -> &'static str {
        match self {
            LocationCategory::Bosses => "Boss",
            LocationCategory::Collectibles => "Collectible",
            LocationCategory::Discoveries => "Location",
        }
    }

    /// Parse a data-file key
    pub fn from_key(key: &str) -> Option<Self> {
        CATEGORIES.iter().copied().find(|c| c.key() == key)
    }
}

impl std::fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
