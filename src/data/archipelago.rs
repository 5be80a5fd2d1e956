//! Tables in the shape the Archipelago world expects

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::constants::LocationCategory;
use super::dataset::Dataset;

/// One row of the Archipelago location table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationTableEntry {
    pub region: String,
    /// Offset from the base ID, as the APWorld stores it
    pub code: u64,
    pub category: LocationCategory,
}

/// Location table keyed by display name
pub fn location_table(data: &Dataset) -> BTreeMap<String, LocationTableEntry> {
    data.locations()
        .iter()
        .map(|loc| {
            (
                loc.name.clone(),
                LocationTableEntry {
                    region: loc.region.clone(),
                    code: loc.code,
                    category: loc.category,
                },
            )
        })
        .collect()
}

/// Full ID -> name and name -> full ID
pub fn lookup_tables(data: &Dataset) -> (HashMap<u64, String>, HashMap<String, u64>) {
    let mut id_to_name = HashMap::with_capacity(data.locations().len());
    let mut name_to_id = HashMap::with_capacity(data.locations().len());

    for loc in data.locations() {
        // Overflow is rejected when the dataset is built
        let Some(full_id) = data.full_id(loc) else {
            continue;
        };
        id_to_name.insert(full_id, loc.name.clone());
        name_to_id.insert(loc.name.clone(), full_id);
    }

    (id_to_name, name_to_id)
}
