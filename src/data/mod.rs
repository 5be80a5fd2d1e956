//! Data loading and queries
//!
//! This module loads the shared BL2 data file into typed, validated records
//! and exposes read-only views over it.

pub mod schema;
pub mod error;
pub mod dataset;
pub mod loader;
pub mod archipelago;
pub mod stats;

pub use schema::{Boss, BossId, Location, LocationId, RawDataset, Region, RegionId};
pub use error::{DataLoadError, FormatIssue};
pub use dataset::{validate_region_connections, Dataset, RegionConnections};
pub use loader::{
    default_data_path, global_store, load, reset, is_loaded, DataStore,
    get_all_locations, get_region_connections, get_regions, get_bosses,
    get_region_names, get_base_id, get_locations_by_region, get_locations_by_category,
    get_bosses_only, get_collectibles_only, get_discoveries_only,
    find_location_by_name, find_location_by_id,
};
pub use archipelago::{location_table, lookup_tables, LocationTableEntry};
pub use stats::DataStats;
