//! Ambient conditions that shorten how far agents can see.

/// Current precipitation category.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Precipitation {
    #[default]
    Dry,
    Drizzle,
    Rain,
    Snow,
}

impl Precipitation {
    /// Light drizzle is not enough to hide behind.
    pub const fn obscures_vision(self) -> bool {
        matches!(self, Self::Rain | Self::Snow)
    }
}

/// Read-only view of time of day and weather.
pub trait AmbientOracle {
    fn is_night(&self) -> bool;

    fn precipitation(&self) -> Precipitation;

    fn is_foggy(&self) -> bool;
}
