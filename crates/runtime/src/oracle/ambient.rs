use pursuit_core::{AmbientOracle, Precipitation};

/// Settable world conditions.
#[derive(Clone, Copy, Debug, Default)]
pub struct AmbientOracleImpl {
    pub night: bool,
    pub precipitation: Precipitation,
    pub fog: bool,
}

impl AmbientOracleImpl {
    pub fn new(night: bool, precipitation: Precipitation, fog: bool) -> Self {
        Self {
            night,
            precipitation,
            fog,
        }
    }
}

impl AmbientOracle for AmbientOracleImpl {
    fn is_night(&self) -> bool {
        self.night
    }

    fn precipitation(&self) -> Precipitation {
        self.precipitation
    }

    fn is_foggy(&self) -> bool {
        self.fog
    }
}
