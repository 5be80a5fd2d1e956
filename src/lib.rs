//! BL2 Archipelago shared data
//!
//! Regions, bosses and locations of Borderlands 2, shared by the Archipelago
//! world and the BL2 SDK mod so both sides agree on the same ids.
//!
//! The data file is read once per process and cached; see [`data::DataStore`].

pub mod constants;
pub mod ids;
pub mod data;

// Re-export commonly used items
pub use constants::{LocationCategory, BASE_ID, CATEGORIES};
pub use data::{
    Boss, DataLoadError, DataStats, Dataset, FormatIssue, Location, Region, RegionConnections,
    load, reset, get_all_locations, get_region_connections, get_regions, get_bosses,
    get_region_names, get_base_id, get_locations_by_region, get_locations_by_category,
    get_bosses_only, get_collectibles_only, get_discoveries_only,
    find_location_by_name, find_location_by_id,
};
