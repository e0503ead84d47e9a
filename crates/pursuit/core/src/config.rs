/// Pursuit tuning constants and tunable parameters.
///
/// Every duration is expressed in seconds of simulated time, every distance in
/// world units, and every price in whole currency units.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PursuitConfig {
    /// Accumulated severity required to reach each alert level (index = level).
    pub severity_steps: [u32; 6],

    /// Detection radius under clear daytime conditions.
    pub base_detection_radius: f32,
    pub night_penalty: f32,
    pub rain_penalty: f32,
    pub fog_penalty: f32,
    /// Floor applied after all penalties so detection is never impossible.
    pub min_detection_radius: f32,

    /// Continuous time out of sight needed to shed one star.
    pub decay_seconds_per_star: f32,
    /// How long agents sweep the last known position before giving up.
    pub search_duration: f32,

    pub disguise_max_level: u8,

    pub bribe_cost_per_star: u32,
    /// Bribes are refused once notoriety reaches this value.
    pub bribe_notoriety_ceiling: u32,

    pub safe_house_max_level: u8,
    pub safe_house_duration: f32,

    /// Distance from the last known position needed for a clean escape on foot.
    pub leg_it_distance: f32,
    /// Continuous time out of sight needed for a clean escape on foot.
    pub leg_it_los_break: f32,
    /// Stars shed by a successful escape on foot.
    pub leg_it_reduction: u8,

    pub hiding_fill_duration: f32,

    /// Favors needed before an agent becomes a corrupt contact.
    pub corrupt_contact_threshold: u32,

    pub fine_per_star: u32,
    pub arrest_notoriety: u32,
}

impl PursuitConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of agents tracked by one shared search phase.
    pub const MAX_SEARCHERS: usize = 64;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SEVERITY_STEPS: [u32; 6] = [0, 1, 3, 6, 10, 15];
    pub const DEFAULT_BASE_DETECTION_RADIUS: f32 = 20.0;
    pub const DEFAULT_NIGHT_PENALTY: f32 = 6.0;
    pub const DEFAULT_RAIN_PENALTY: f32 = 4.0;
    pub const DEFAULT_FOG_PENALTY: f32 = 6.0;
    pub const DEFAULT_MIN_DETECTION_RADIUS: f32 = 4.0;
    pub const DEFAULT_DECAY_SECONDS_PER_STAR: f32 = 90.0;
    pub const DEFAULT_SEARCH_DURATION: f32 = 30.0;
    pub const DEFAULT_DISGUISE_MAX_LEVEL: u8 = 3;
    pub const DEFAULT_BRIBE_COST_PER_STAR: u32 = 8;
    pub const DEFAULT_BRIBE_NOTORIETY_CEILING: u32 = 60;
    pub const DEFAULT_SAFE_HOUSE_MAX_LEVEL: u8 = 3;
    pub const DEFAULT_SAFE_HOUSE_DURATION: f32 = 30.0;
    pub const DEFAULT_LEG_IT_DISTANCE: f32 = 40.0;
    pub const DEFAULT_LEG_IT_LOS_BREAK: f32 = 20.0;
    pub const DEFAULT_LEG_IT_REDUCTION: u8 = 2;
    pub const DEFAULT_HIDING_FILL_DURATION: f32 = 3.0;
    pub const DEFAULT_CORRUPT_CONTACT_THRESHOLD: u32 = 3;
    pub const DEFAULT_FINE_PER_STAR: u32 = 20;
    pub const DEFAULT_ARREST_NOTORIETY: u32 = 5;

    pub fn new() -> Self {
        Self {
            severity_steps: Self::DEFAULT_SEVERITY_STEPS,
            base_detection_radius: Self::DEFAULT_BASE_DETECTION_RADIUS,
            night_penalty: Self::DEFAULT_NIGHT_PENALTY,
            rain_penalty: Self::DEFAULT_RAIN_PENALTY,
            fog_penalty: Self::DEFAULT_FOG_PENALTY,
            min_detection_radius: Self::DEFAULT_MIN_DETECTION_RADIUS,
            decay_seconds_per_star: Self::DEFAULT_DECAY_SECONDS_PER_STAR,
            search_duration: Self::DEFAULT_SEARCH_DURATION,
            disguise_max_level: Self::DEFAULT_DISGUISE_MAX_LEVEL,
            bribe_cost_per_star: Self::DEFAULT_BRIBE_COST_PER_STAR,
            bribe_notoriety_ceiling: Self::DEFAULT_BRIBE_NOTORIETY_CEILING,
            safe_house_max_level: Self::DEFAULT_SAFE_HOUSE_MAX_LEVEL,
            safe_house_duration: Self::DEFAULT_SAFE_HOUSE_DURATION,
            leg_it_distance: Self::DEFAULT_LEG_IT_DISTANCE,
            leg_it_los_break: Self::DEFAULT_LEG_IT_LOS_BREAK,
            leg_it_reduction: Self::DEFAULT_LEG_IT_REDUCTION,
            hiding_fill_duration: Self::DEFAULT_HIDING_FILL_DURATION,
            corrupt_contact_threshold: Self::DEFAULT_CORRUPT_CONTACT_THRESHOLD,
            fine_per_star: Self::DEFAULT_FINE_PER_STAR,
            arrest_notoriety: Self::DEFAULT_ARREST_NOTORIETY,
        }
    }

    /// Checks the invariants the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.severity_steps[0] != 0 {
            return Err(ConfigError::SeverityStepsMustStartAtZero(
                self.severity_steps[0],
            ));
        }
        if let Some(level) = self
            .severity_steps
            .windows(2)
            .position(|pair| pair[1] <= pair[0])
        {
            return Err(ConfigError::SeverityStepsNotAscending { level: level + 1 });
        }

        let durations = [
            ("decay_seconds_per_star", self.decay_seconds_per_star),
            ("search_duration", self.search_duration),
            ("safe_house_duration", self.safe_house_duration),
            ("hiding_fill_duration", self.hiding_fill_duration),
        ];
        for (field, value) in durations {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveDuration { field, value });
            }
        }

        if !(self.min_detection_radius > 0.0) {
            return Err(ConfigError::NonPositiveMinimumRadius(
                self.min_detection_radius,
            ));
        }
        if self.min_detection_radius > self.base_detection_radius {
            return Err(ConfigError::MinimumRadiusAboveBase {
                min: self.min_detection_radius,
                base: self.base_detection_radius,
            });
        }
        if self.corrupt_contact_threshold == 0 {
            return Err(ConfigError::ZeroContactThreshold);
        }

        Ok(())
    }
}

impl Default for PursuitConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Invalid tuning detected by [`PursuitConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("severity step for level 0 must be 0, got {0}")]
    SeverityStepsMustStartAtZero(u32),

    #[error("severity step for level {level} does not exceed the previous level")]
    SeverityStepsNotAscending { level: usize },

    #[error("{field} must be positive, got {value}")]
    NonPositiveDuration { field: &'static str, value: f32 },

    #[error("minimum detection radius must be positive, got {0}")]
    NonPositiveMinimumRadius(f32),

    #[error("minimum detection radius {min} exceeds base radius {base}")]
    MinimumRadiusAboveBase { min: f32, base: f32 },

    #[error("corrupt contact threshold must be at least one favor")]
    ZeroContactThreshold,
}
