//! Refuge dwell: staying inside a safehouse long enough ends the pursuit.

use super::PursuitEngine;

/// What entering a safehouse achieved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SafeHouseOutcome {
    /// Inside and the dwell clock is running.
    Sheltering,
    /// Inside, but the level is too high for the refuge to help.
    TooManyStars,
    /// Inside with no pursuit to shake.
    NotWanted,
}

impl PursuitEngine {
    /// Flags the player as inside a genuine refuge.
    ///
    /// Re-entering while already inside keeps the running dwell time.
    pub fn enter_safe_house(&mut self) -> SafeHouseOutcome {
        if !self.state.is_in_safe_house {
            self.state.is_in_safe_house = true;
            self.state.safe_house_timer = 0.0;
            tracing::debug!(level = %self.state.alert_level, "entered safehouse");
        }

        if !self.state.in_pursuit() {
            SafeHouseOutcome::NotWanted
        } else if self.state.alert_level.stars() > self.config.safe_house_max_level {
            SafeHouseOutcome::TooManyStars
        } else {
            SafeHouseOutcome::Sheltering
        }
    }

    pub fn exit_safe_house(&mut self) {
        if self.state.is_in_safe_house {
            tracing::debug!(dwell = self.state.safe_house_timer, "left safehouse");
        }
        self.state.is_in_safe_house = false;
        self.state.safe_house_timer = 0.0;
    }

    /// Accumulates dwell time; the clock only counts while the level is low
    /// enough and restarts whenever it is not.
    pub(super) fn advance_safe_house(&mut self, dt: f32) {
        if !self.state.is_in_safe_house || !self.state.in_pursuit() {
            return;
        }
        if self.state.alert_level.stars() > self.config.safe_house_max_level {
            self.state.safe_house_timer = 0.0;
            return;
        }

        self.state.safe_house_timer += dt;
        if self.state.safe_house_timer >= self.config.safe_house_duration {
            tracing::info!(level = %self.state.alert_level, "safehouse dwell complete");
            self.clear_pursuit();
        }
    }
}
