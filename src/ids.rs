//! Named ids for the packaged dataset
//!
//! Consumers should prefer these over string literals so a renamed id fails
//! to compile instead of silently missing at runtime.

/// Region ids
pub mod regions {
    pub const WINDSHEAR_WASTE: &str = "windshear_waste";
    pub const SOUTHERN_SHELF: &str = "southern_shelf";
    pub const SOUTHERN_SHELF_BAY: &str = "southern_shelf_bay";
    pub const THREE_HORNS_DIVIDE: &str = "three_horns_divide";
    pub const SANCTUARY: &str = "sanctuary";
    pub const THREE_HORNS_VALLEY: &str = "three_horns_valley";
    pub const FROSTBURN_CANYON: &str = "frostburn_canyon";
    pub const THE_DUST: &str = "the_dust";
    pub const BLOODSHOT_STRONGHOLD: &str = "bloodshot_stronghold";
    pub const FRIENDSHIP_GULAG: &str = "friendship_gulag";

    /// Every region id, in data-file order
    pub const ALL: [&str; 10] = [
        WINDSHEAR_WASTE,
        SOUTHERN_SHELF,
        SOUTHERN_SHELF_BAY,
        THREE_HORNS_DIVIDE,
        SANCTUARY,
        THREE_HORNS_VALLEY,
        FROSTBURN_CANYON,
        THE_DUST,
        BLOODSHOT_STRONGHOLD,
        FRIENDSHIP_GULAG,
    ];
}

/// Boss ids
pub mod bosses {
    pub const KNUCKLE_DRAGGER: &str = "knuckle_dragger";
    pub const BOOM_BEWM: &str = "boom_bewm";
    pub const CAPTAIN_FLYNT: &str = "captain_flynt";
    pub const MIDGEMONG: &str = "midgemong";
    pub const BAD_MAW: &str = "bad_maw";
    pub const SAVAGE_LEE: &str = "savage_lee";
    pub const INCINERATOR_CLAYTON: &str = "incinerator_clayton";
    pub const MAD_MIKE: &str = "mad_mike";
    pub const FLINTER: &str = "flinter";
    pub const W4R_D3N: &str = "w4r_d3n";
    pub const GETTLE_MOBLEY: &str = "gettle_mobley";

    /// Every boss id, in data-file order
    pub const ALL: [&str; 11] = [
        KNUCKLE_DRAGGER,
        BOOM_BEWM,
        CAPTAIN_FLYNT,
        MIDGEMONG,
        BAD_MAW,
        SAVAGE_LEE,
        INCINERATOR_CLAYTON,
        MAD_MIKE,
        FLINTER,
        W4R_D3N,
        GETTLE_MOBLEY,
    ];
}
