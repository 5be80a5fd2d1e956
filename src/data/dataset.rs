//! Validated, indexed dataset
//!
//! A [`Dataset`] can only be built from data that passed every referential
//! check, so lookups on it never have to handle dangling ids.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::constants::LocationCategory;
use super::error::{DataLoadError, FormatIssue};
use super::schema::{Boss, BossId, Location, LocationId, RawDataset, Region, RegionId};

/// Region adjacency: region id -> ids reachable from it
pub type RegionConnections = BTreeMap<RegionId, BTreeSet<RegionId>>;

/// All game data, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    base_id: u64,
    regions: Vec<Region>,
    bosses: Vec<Boss>,
    locations: Vec<Location>,
    region_index: HashMap<RegionId, usize>,
    boss_index: HashMap<BossId, usize>,
    location_index: HashMap<LocationId, usize>,
    name_index: HashMap<String, usize>,
    code_index: HashMap<u64, usize>,
}

impl Dataset {
    /// Validate raw file contents and index them
    pub fn from_raw(raw: RawDataset) -> Result<Self, FormatIssue> {
        let RawDataset { base_id, regions, bosses, locations } = raw;

        let mut region_index = HashMap::with_capacity(regions.len());
        for (i, region) in regions.iter().enumerate() {
            if region_index.insert(region.id.clone(), i).is_some() {
                return Err(FormatIssue::DuplicateRegion(region.id.clone()));
            }
        }

        let mut boss_index = HashMap::with_capacity(bosses.len());
        for (i, boss) in bosses.iter().enumerate() {
            if boss_index.insert(boss.id.clone(), i).is_some() {
                return Err(FormatIssue::DuplicateBoss(boss.id.clone()));
            }
            if !region_index.contains_key(&boss.region) {
                return Err(FormatIssue::BossUnknownRegion {
                    boss: boss.id.clone(),
                    region: boss.region.clone(),
                });
            }
        }

        let mut location_index = HashMap::with_capacity(locations.len());
        let mut name_index = HashMap::with_capacity(locations.len());
        let mut code_index = HashMap::with_capacity(locations.len());
        for (i, loc) in locations.iter().enumerate() {
            if location_index.insert(loc.id.clone(), i).is_some() {
                return Err(FormatIssue::DuplicateLocation(loc.id.clone()));
            }
            if name_index.insert(loc.name.clone(), i).is_some() {
                return Err(FormatIssue::DuplicateLocationName(loc.name.clone()));
            }
            if code_index.insert(loc.code, i).is_some() {
                return Err(FormatIssue::DuplicateCode { location: loc.id.clone(), code: loc.code });
            }
            if base_id.checked_add(loc.code).is_none() {
                return Err(FormatIssue::IdOverflow {
                    location: loc.id.clone(),
                    code: loc.code,
                    base_id,
                });
            }
            if !region_index.contains_key(&loc.region) {
                return Err(FormatIssue::UnknownRegion {
                    location: loc.id.clone(),
                    region: loc.region.clone(),
                });
            }
            if let Some(boss) = &loc.boss {
                if !boss_index.contains_key(boss) {
                    return Err(FormatIssue::UnknownBoss {
                        location: loc.id.clone(),
                        boss: boss.clone(),
                    });
                }
            }
        }

        let mut listed: HashSet<&str> = HashSet::with_capacity(locations.len());
        for region in &regions {
            let mut seen = HashSet::with_capacity(region.locations.len());
            for loc_id in &region.locations {
                if !seen.insert(loc_id.as_str()) {
                    return Err(FormatIssue::DuplicateRegionLocation {
                        region: region.id.clone(),
                        location: loc_id.clone(),
                    });
                }
                let Some(&idx) = location_index.get(loc_id) else {
                    return Err(FormatIssue::UnknownLocation {
                        region: region.id.clone(),
                        location: loc_id.clone(),
                    });
                };
                let owner = &locations[idx].region;
                if *owner != region.id {
                    return Err(FormatIssue::RegionMismatch {
                        region: region.id.clone(),
                        location: loc_id.clone(),
                        owner: owner.clone(),
                    });
                }
                listed.insert(loc_id.as_str());
            }

            let mut seen = HashSet::with_capacity(region.connections.len());
            for target in &region.connections {
                if !seen.insert(target.as_str()) {
                    return Err(FormatIssue::DuplicateConnection {
                        region: region.id.clone(),
                        target: target.clone(),
                    });
                }
                if !region_index.contains_key(target) {
                    return Err(FormatIssue::DanglingConnection {
                        region: region.id.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        if let Some(loc) = locations.iter().find(|l| !listed.contains(l.id.as_str())) {
            return Err(FormatIssue::RegionMissingLocation {
                region: loc.region.clone(),
                location: loc.id.clone(),
            });
        }

        Ok(Self {
            base_id,
            regions,
            bosses,
            locations,
            region_index,
            boss_index,
            location_index,
            name_index,
            code_index,
        })
    }

    /// Parse and validate the JSON text of a data file
    pub fn from_json_str(json: &str) -> Result<Self, FormatIssue> {
        let raw = RawDataset::from_json_str(json)?;
        Self::from_raw(raw)
    }

    /// Parse and validate the raw bytes of a data file
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, FormatIssue> {
        let raw = RawDataset::from_json_slice(bytes)?;
        Self::from_raw(raw)
    }

    /// Read, parse and validate a data file. Does not touch any cache.
    ///
    /// Only I/O failures are reported as not found; bad encoding is a format error.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| DataLoadError::DataFileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_slice(&bytes).map_err(|issue| DataLoadError::DataFormatError {
            path: path.to_path_buf(),
            issue,
        })
    }

    /// Base ID for location calculations
    pub fn base_id(&self) -> u64 {
        self.base_id
    }

    /// All regions, in file order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// All bosses, in file order
    pub fn bosses(&self) -> &[Boss] {
        &self.bosses
    }

    /// All locations, in file order
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Look up a region by ID
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.region_index.get(id).map(|&i| &self.regions[i])
    }

    /// Look up a boss by ID
    pub fn boss(&self, id: &str) -> Option<&Boss> {
        self.boss_index.get(id).map(|&i| &self.bosses[i])
    }

    /// Look up a location by ID
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.location_index.get(id).map(|&i| &self.locations[i])
    }

    /// Region ids, in file order
    pub fn region_names(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.id.as_str()).collect()
    }

    /// Region adjacency exactly as authored. Reverse edges are never inferred.
    pub fn region_connections(&self) -> RegionConnections {
        self.regions
            .iter()
            .map(|r| (r.id.clone(), r.connections.iter().cloned().collect::<BTreeSet<_>>()))
            .collect()
    }

    /// Locations owned by a region, in file order. Empty for an unknown region.
    pub fn locations_by_region(&self, region_id: &str) -> Vec<&Location> {
        self.locations.iter().filter(|l| l.region == region_id).collect()
    }

    /// Locations of one category, in file order
    pub fn locations_by_category(&self, category: LocationCategory) -> Vec<&Location> {
        self.locations.iter().filter(|l| l.category == category).collect()
    }

    /// Boss kill locations
    pub fn bosses_only(&self) -> Vec<&Location> {
        self.locations_by_category(LocationCategory::Bosses)
    }

    /// Collectible locations
    pub fn collectibles_only(&self) -> Vec<&Location> {
        self.locations_by_category(LocationCategory::Collectibles)
    }

    /// Discovery locations
    pub fn discoveries_only(&self) -> Vec<&Location> {
        self.locations_by_category(LocationCategory::Discoveries)
    }

    /// Bosses living in a region
    pub fn bosses_in_region(&self, region_id: &str) -> Vec<&Boss> {
        self.bosses.iter().filter(|b| b.region == region_id).collect()
    }

    /// Locations that require killing the given boss
    pub fn boss_locations(&self, boss_id: &str) -> Vec<&Location> {
        self.locations
            .iter()
            .filter(|l| l.boss.as_deref() == Some(boss_id))
            .collect()
    }

    /// Find a location by its display name
    pub fn find_location_by_name(&self, name: &str) -> Option<&Location> {
        self.name_index.get(name).map(|&i| &self.locations[i])
    }

    /// Find a location by its code (offset from the base ID)
    pub fn find_location_by_id(&self, code: u64) -> Option<&Location> {
        self.code_index.get(&code).map(|&i| &self.locations[i])
    }

    /// Find a location by its full Archipelago ID
    pub fn find_location_by_full_id(&self, full_id: u64) -> Option<&Location> {
        full_id
            .checked_sub(self.base_id)
            .and_then(|code| self.find_location_by_id(code))
    }

    /// Full Archipelago ID of a location.
    ///
    /// Always `Some` for locations of this dataset; `None` if the code overflows the base ID.
    pub fn full_id(&self, location: &Location) -> Option<u64> {
        self.base_id.checked_add(location.code)
    }
}

/// Check that every connection in an unvalidated file points at a known region.
///
/// Returns one message per dangling edge; empty means the graph is closed.
pub fn validate_region_connections(raw: &RawDataset) -> Vec<String> {
    let known: HashSet<&str> = raw.regions.iter().map(|r| r.id.as_str()).collect();

    raw.regions
        .iter()
        .flat_map(|region| {
            region
                .connections
                .iter()
                .filter(|target| !known.contains(target.as_str()))
                .map(move |target| {
                    format!("Region '{}' connects to non-existent region '{}'", region.id, target)
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_region(id: &str, connections: &[&str], locations: &[&str]) -> Region {
        Region {
            id: id.to_string(),
            name: id.to_uppercase(),
            connections: connections.iter().map(|s| s.to_string()).collect(),
            locations: locations.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn make_location(id: &str, code: u64, region: &str, category: LocationCategory) -> Location {
        Location {
            id: id.to_string(),
            name: format!("{} name", id),
            code,
            region: region.to_string(),
            category,
            boss: None,
        }
    }

    fn make_raw() -> RawDataset {
        let mut boss_loc = make_location("loc_boom_bewm", 3, "southern_shelf", LocationCategory::Bosses);
        boss_loc.boss = Some("boom_bewm".to_string());

        RawDataset {
            base_id: 1000,
            regions: vec![
                make_region("sanctuary", &["southern_shelf"], &["loc_clap_trap_1", "loc_moxxi_quest"]),
                make_region("southern_shelf", &[], &["loc_boom_bewm"]),
            ],
            bosses: vec![Boss {
                id: "boom_bewm".to_string(),
                name: "Boom and Bewm".to_string(),
                region: "southern_shelf".to_string(),
            }],
            locations: vec![
                make_location("loc_clap_trap_1", 1, "sanctuary", LocationCategory::Collectibles),
                make_location("loc_moxxi_quest", 2, "sanctuary", LocationCategory::Discoveries),
                boss_loc,
            ],
        }
    }

    fn issue_of(raw: RawDataset) -> FormatIssue {
        Dataset::from_raw(raw).expect_err("dataset should be rejected")
    }

    #[test]
    fn test_valid_dataset() {
        let data = Dataset::from_raw(make_raw()).unwrap();

        assert_eq!(data.base_id(), 1000);
        assert_eq!(data.regions().len(), 2);
        assert_eq!(data.locations().len(), 3);
        assert_eq!(data.region_names(), vec!["sanctuary", "southern_shelf"]);
    }

    #[test]
    fn test_sanctuary_example() {
        let data = Dataset::from_raw(make_raw()).unwrap();

        let in_sanctuary: Vec<&str> = data
            .locations()
            .iter()
            .filter(|l| l.region == "sanctuary")
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(in_sanctuary, vec!["loc_clap_trap_1", "loc_moxxi_quest"]);

        let connections = data.region_connections();
        let expected: BTreeSet<String> = ["southern_shelf".to_string()].into_iter().collect();
        assert_eq!(connections["sanctuary"], expected);
    }

    #[test]
    fn test_connections_not_symmetrized() {
        let data = Dataset::from_raw(make_raw()).unwrap();
        let connections = data.region_connections();

        assert!(connections["southern_shelf"].is_empty());
    }

    #[test]
    fn test_lookups() {
        let data = Dataset::from_raw(make_raw()).unwrap();

        assert_eq!(data.location("loc_moxxi_quest").unwrap().code, 2);
        assert_eq!(data.find_location_by_name("loc_clap_trap_1 name").unwrap().id, "loc_clap_trap_1");
        assert_eq!(data.find_location_by_id(3).unwrap().id, "loc_boom_bewm");
        assert_eq!(data.find_location_by_full_id(1003).unwrap().id, "loc_boom_bewm");
        assert!(data.find_location_by_full_id(3).is_none());
        assert!(data.find_location_by_id(99).is_none());
        assert_eq!(data.boss("boom_bewm").unwrap().region, "southern_shelf");
        assert!(data.region("pandora").is_none());
    }

    #[test]
    fn test_category_filters() {
        let data = Dataset::from_raw(make_raw()).unwrap();

        assert_eq!(data.bosses_only().len(), 1);
        assert_eq!(data.collectibles_only()[0].id, "loc_clap_trap_1");
        assert_eq!(data.discoveries_only()[0].id, "loc_moxxi_quest");
    }

    #[test]
    fn test_locations_by_region() {
        let data = Dataset::from_raw(make_raw()).unwrap();

        assert_eq!(data.locations_by_region("sanctuary").len(), 2);
        assert!(data.locations_by_region("pandora").is_empty());
    }

    #[test]
    fn test_boss_links() {
        let data = Dataset::from_raw(make_raw()).unwrap();

        assert_eq!(data.bosses_in_region("southern_shelf").len(), 1);
        assert!(data.bosses_in_region("sanctuary").is_empty());
        let locs = data.boss_locations("boom_bewm");
        assert_eq!(locs.len(), 1);
        assert_eq!(data.full_id(locs[0]), Some(1003));
    }

    #[test]
    fn test_full_id_of_foreign_location_overflow() {
        let data = Dataset::from_raw(make_raw()).unwrap();
        let foreign = make_location("loc_foreign", u64::MAX, "sanctuary", LocationCategory::Collectibles);

        assert_eq!(data.full_id(&foreign), None);
    }

    #[test]
    fn test_invalid_utf8_is_format_error() {
        let bytes = b"{\"base_id\": 1, \"regions\": [\xff\xfe";

        assert!(matches!(Dataset::from_json_slice(bytes), Err(FormatIssue::Json(_))));
    }

    #[test]
    fn test_location_with_unknown_region() {
        let mut raw = make_raw();
        raw.locations[0].region = "pandora".to_string();

        assert!(matches!(issue_of(raw), FormatIssue::UnknownRegion { region, .. } if region == "pandora"));
    }

    #[test]
    fn test_region_lists_location_of_other_region() {
        let mut raw = make_raw();
        raw.regions[1].locations.push("loc_moxxi_quest".to_string());

        assert!(matches!(
            issue_of(raw),
            FormatIssue::RegionMismatch { region, owner, .. } if region == "southern_shelf" && owner == "sanctuary"
        ));
    }

    #[test]
    fn test_region_omits_its_location() {
        let mut raw = make_raw();
        raw.regions[0].locations.pop();

        assert!(matches!(
            issue_of(raw),
            FormatIssue::RegionMissingLocation { location, .. } if location == "loc_moxxi_quest"
        ));
    }

    #[test]
    fn test_region_lists_unknown_location() {
        let mut raw = make_raw();
        raw.regions[0].locations.push("loc_ghost".to_string());

        assert!(matches!(issue_of(raw), FormatIssue::UnknownLocation { location, .. } if location == "loc_ghost"));
    }

    #[test]
    fn test_dangling_connection() {
        let mut raw = make_raw();
        raw.regions[1].connections.push("pandora".to_string());

        assert!(matches!(issue_of(raw), FormatIssue::DanglingConnection { target, .. } if target == "pandora"));
    }

    #[test]
    fn test_duplicate_connection() {
        let mut raw = make_raw();
        raw.regions[0].connections.push("southern_shelf".to_string());

        assert!(matches!(issue_of(raw), FormatIssue::DuplicateConnection { .. }));
    }

    #[test]
    fn test_duplicate_ids() {
        let mut raw = make_raw();
        raw.regions.push(raw.regions[0].clone());
        assert!(matches!(issue_of(raw), FormatIssue::DuplicateRegion(id) if id == "sanctuary"));

        let mut raw = make_raw();
        raw.locations[1].code = 1;
        assert!(matches!(issue_of(raw), FormatIssue::DuplicateCode { code: 1, .. }));

        let mut raw = make_raw();
        raw.locations[1].name = raw.locations[0].name.clone();
        assert!(matches!(issue_of(raw), FormatIssue::DuplicateLocationName(_)));
    }

    #[test]
    fn test_unknown_boss_references() {
        let mut raw = make_raw();
        raw.locations[2].boss = Some("warrior".to_string());
        assert!(matches!(issue_of(raw), FormatIssue::UnknownBoss { boss, .. } if boss == "warrior"));

        let mut raw = make_raw();
        raw.bosses[0].region = "hero_pass".to_string();
        assert!(matches!(issue_of(raw), FormatIssue::BossUnknownRegion { .. }));
    }

    #[test]
    fn test_id_overflow() {
        let mut raw = make_raw();
        raw.base_id = u64::MAX;

        assert!(matches!(issue_of(raw), FormatIssue::IdOverflow { .. }));
    }

    #[test]
    fn test_truncated_json() {
        let json = serde_json::to_string(&make_raw()).unwrap();
        let truncated = &json[..json.len() / 2];

        assert!(matches!(Dataset::from_json_str(truncated), Err(FormatIssue::Json(_))));
    }

    #[test]
    fn test_validate_region_connections() {
        let mut raw = make_raw();
        assert!(validate_region_connections(&raw).is_empty());

        raw.regions[0].connections.push("pandora".to_string());
        let errors = validate_region_connections(&raw);
        assert_eq!(errors, vec!["Region 'sanctuary' connects to non-existent region 'pandora'"]);
    }
}
