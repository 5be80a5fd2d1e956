//! JSON data loader
//!
//! Loads the packaged data file once and shares it for the rest of the
//! process. A missing or broken file is always an error; there is no
//! fallback data.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::constants::{LocationCategory, DEFAULT_DATA_PATH};
use super::dataset::{Dataset, RegionConnections};
use super::error::DataLoadError;
use super::schema::{Boss, Location, Region};

/// Path of the data file shipped with this crate
pub fn default_data_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DATA_PATH)
}

/// Lazily loaded, shared dataset
///
/// The first successful [`load`](DataStore::load) parses the file; every later
/// call hands out the same `Arc` until [`reset`](DataStore::reset).
/// Concurrent first calls are serialized so only one `Dataset` is ever built.
#[derive(Debug)]
pub struct DataStore {
    /// `None` means the packaged file
    path: Option<PathBuf>,
    cached: RwLock<Option<Arc<Dataset>>>,
}

impl DataStore {
    /// Store backed by the packaged data file
    pub const fn new() -> Self {
        Self {
            path: None,
            cached: RwLock::new(None),
        }
    }

    /// Store backed by another data file (modded data, test fixtures)
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            cached: RwLock::new(None),
        }
    }

    /// File this store reads from
    pub fn path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_data_path)
    }

    /// Get the dataset, reading it from disk on first use
    pub fn load(&self) -> Result<Arc<Dataset>, DataLoadError> {
        let cached = self.cached.read().clone();
        if let Some(data) = cached {
            return Ok(data);
        }

        let mut slot = self.cached.write();
        // Another thread may have finished loading while we waited
        if let Some(data) = slot.as_ref() {
            return Ok(Arc::clone(data));
        }

        let path = self.path();
        let data = match Dataset::load_from(&path) {
            Ok(data) => Arc::new(data),
            Err(e) => {
                log::warn!("Failed to load BL2 data: {}", e);
                return Err(e);
            }
        };

        log::info!(
            "Loaded BL2 data from {} ({} regions, {} bosses, {} locations)",
            path.display(),
            data.regions().len(),
            data.bosses().len(),
            data.locations().len()
        );

        *slot = Some(Arc::clone(&data));
        Ok(data)
    }

    /// Check if a dataset is currently cached
    pub fn is_loaded(&self) -> bool {
        self.cached.read().is_some()
    }

    /// Drop the cached dataset so the next access re-reads the file.
    ///
    /// Datasets already handed out stay valid.
    pub fn reset(&self) {
        if self.cached.write().take().is_some() {
            log::debug!("BL2 data cache cleared");
        }
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}

static STORE: DataStore = DataStore::new();

/// The process-wide store
pub fn global_store() -> &'static DataStore {
    &STORE
}

/// Load the packaged dataset (cached)
pub fn load() -> Result<Arc<Dataset>, DataLoadError> {
    STORE.load()
}

/// Clear the process-wide cache
pub fn reset() {
    STORE.reset();
}

/// Check if the packaged dataset has been loaded
pub fn is_loaded() -> bool {
    STORE.is_loaded()
}

/// Every location, in file order
pub fn get_all_locations() -> Result<Vec<Location>, DataLoadError> {
    Ok(load()?.locations().to_vec())
}

/// Region adjacency, exactly as authored
pub fn get_region_connections() -> Result<RegionConnections, DataLoadError> {
    Ok(load()?.region_connections())
}

/// Every region, in file order
pub fn get_regions() -> Result<Vec<Region>, DataLoadError> {
    Ok(load()?.regions().to_vec())
}

/// Every boss, in file order
pub fn get_bosses() -> Result<Vec<Boss>, DataLoadError> {
    Ok(load()?.bosses().to_vec())
}

/// Every region id, in file order
pub fn get_region_names() -> Result<Vec<String>, DataLoadError> {
    Ok(load()?.region_names().into_iter().map(str::to_string).collect())
}

/// Base ID for location calculations
pub fn get_base_id() -> Result<u64, DataLoadError> {
    Ok(load()?.base_id())
}

/// Locations in one region; empty for an unknown region
pub fn get_locations_by_region(region_id: &str) -> Result<Vec<Location>, DataLoadError> {
    let data = load()?;
    Ok(data.locations_by_region(region_id).into_iter().cloned().collect())
}

/// Locations of one category
pub fn get_locations_by_category(category: LocationCategory) -> Result<Vec<Location>, DataLoadError> {
    let data = load()?;
    Ok(data.locations_by_category(category).into_iter().cloned().collect())
}

/// Boss kill locations
pub fn get_bosses_only() -> Result<Vec<Location>, DataLoadError> {
    get_locations_by_category(LocationCategory::Bosses)
}

/// Collectible locations
pub fn get_collectibles_only() -> Result<Vec<Location>, DataLoadError> {
    get_locations_by_category(LocationCategory::Collectibles)
}

/// Discovery locations
pub fn get_discoveries_only() -> Result<Vec<Location>, DataLoadError> {
    get_locations_by_category(LocationCategory::Discoveries)
}

/// Find a location by display name
pub fn find_location_by_name(name: &str) -> Result<Option<Location>, DataLoadError> {
    Ok(load()?.find_location_by_name(name).cloned())
}

/// Find a location by its code (offset from the base ID)
pub fn find_location_by_id(code: u64) -> Result<Option<Location>, DataLoadError> {
    Ok(load()?.find_location_by_id(code).cloned())
}
