//! Tunable agent parameters and their defaults.

/// Agent tuning parameters.
///
/// Every field has a default, so a config file only needs to list overrides.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Inventory region maxima (guns, medkits, food).
    pub inventory: crate::inventory::InventoryLimits,
    /// Health at which the agent counts as unhurt.
    pub max_health: f32,
    /// Energy at which the agent counts as not hungry.
    pub max_energy: f32,
    /// Radius within which remembered items are fetched.
    pub item_fetch_max_range: f32,
    /// Base leg distance of the expanding square search.
    pub search_leg_distance: f32,
    /// Squared distance to a search waypoint that counts as arrived.
    pub search_arrive_margin_sq: f32,
    /// Squared distance to a seek target below which the agent stops.
    pub seek_stop_margin_sq: f32,
    /// Squared distance to a house center that ends a house visit.
    pub house_arrive_margin_sq: f32,
    /// Squared distance to a patrol house that moves patrol to the next house.
    pub patrol_arrive_margin_sq: f32,
    /// Gain applied to the angular delta when facing a target.
    pub face_gain: f32,
    /// Facing tolerance on `1 - dot` for enemies within `2/3` of the FOV range.
    pub facing_tolerance_near: f32,
    /// Facing tolerance on `1 - dot` for enemies further away.
    pub facing_tolerance_far: f32,
    /// Angular tolerance (radians) that completes a strafe turn.
    pub strafe_end_tolerance: f32,
}

impl AgentConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_HEALTH: f32 = 10.0;
    pub const DEFAULT_MAX_ENERGY: f32 = 10.0;
    pub const DEFAULT_ITEM_FETCH_MAX_RANGE: f32 = 75.0;
    pub const DEFAULT_SEARCH_LEG_DISTANCE: f32 = 25.0;
    pub const DEFAULT_FACE_GAIN: f32 = 50.0;

    pub fn new() -> Self {
        Self {
            inventory: crate::inventory::InventoryLimits::default(),
            max_health: Self::DEFAULT_MAX_HEALTH,
            max_energy: Self::DEFAULT_MAX_ENERGY,
            item_fetch_max_range: Self::DEFAULT_ITEM_FETCH_MAX_RANGE,
            search_leg_distance: Self::DEFAULT_SEARCH_LEG_DISTANCE,
            search_arrive_margin_sq: 5.0,
            seek_stop_margin_sq: 4.0,
            house_arrive_margin_sq: 2.0,
            patrol_arrive_margin_sq: 10.0,
            face_gain: Self::DEFAULT_FACE_GAIN,
            facing_tolerance_near: 0.008,
            facing_tolerance_far: 0.005,
            strafe_end_tolerance: 0.01,
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}
