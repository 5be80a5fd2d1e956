//! Dataset statistics for debugging

use std::fmt;

use serde::Serialize;

use crate::constants::LocationCategory;
use super::dataset::Dataset;

/// Counts describing a loaded dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataStats {
    pub total_regions: usize,
    pub total_bosses: usize,
    pub total_locations: usize,
    pub boss_locations: usize,
    pub collectible_locations: usize,
    pub discovery_locations: usize,
    pub base_id: u64,
}

impl DataStats {
    /// Gather stats from a dataset
    pub fn collect(data: &Dataset) -> Self {
        let count = |category: LocationCategory| data.locations().iter().filter(|l| l.category == category).count();

        Self {
            total_regions: data.regions().len(),
            total_bosses: data.bosses().len(),
            total_locations: data.locations().len(),
            boss_locations: count(LocationCategory::Bosses),
            collectible_locations: count(LocationCategory::Collectibles),
            discovery_locations: count(LocationCategory::Discoveries),
            base_id: data.base_id(),
        }
    }

    /// Write the stats to the log at info level
    pub fn log_stats(&self) {
        for line in self.to_string().lines() {
            log::info!("{}", line);
        }
    }
}

impl fmt::Display for DataStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BL2 Data Statistics:")?;
        writeln!(f, "  Total Regions: {}", self.total_regions)?;
        writeln!(f, "  Total Bosses: {}", self.total_bosses)?;
        writeln!(f, "  Total Locations: {}", self.total_locations)?;
        writeln!(f, "  Boss Locations: {}", self.boss_locations)?;
        writeln!(f, "  Collectible Locations: {}", self.collectible_locations)?;
        writeln!(f, "  Discovery Locations: {}", self.discovery_locations)?;
        write!(f, "  Base ID: {}", self.base_id)
    }
}
