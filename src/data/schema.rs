//! Records as they appear in the data file
//!
//! These are the external contract shared with the Archipelago world and the
//! SDK mod. Field names are stable; unknown fields are rejected on load.

use serde::{Deserialize, Serialize};

use crate::constants::LocationCategory;

/// Region identifier
pub type RegionId = String;
/// Location identifier
pub type LocationId = String;
/// Boss identifier
pub type BossId = String;

/// A named area of the game world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Region {
    /// Unique region ID
    pub id: RegionId,
    /// Display name
    pub name: String,
    /// Regions reachable from this one, exactly as authored
    pub connections: Vec<RegionId>,
    /// Locations contained in this region
    pub locations: Vec<LocationId>,
}

/// A checkable point of interest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Location {
    /// Unique location ID
    pub id: LocationId,
    /// Display name, unique across the dataset
    pub name: String,
    /// Offset from the dataset's base ID
    pub code: u64,
    /// Owning region
    pub region: RegionId,
    /// What kind of check this is
    pub category: LocationCategory,
    /// Boss that has to be killed for this check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boss: Option<BossId>,
}

/// A named enemy tied to a region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Boss {
    pub id: BossId,
    pub name: String,
    pub region: RegionId,
}

/// Top-level shape of the data file, before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawDataset {
    pub base_id: u64,
    pub regions: Vec<Region>,
    pub bosses: Vec<Boss>,
    pub locations: Vec<Location>,
}

impl RawDataset {
    /// Parse the JSON text of a data file
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parse the raw bytes of a data file
    pub fn from_json_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
