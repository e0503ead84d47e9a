//! Sustained evasion: getting far from the last sighting and staying unseen.

use super::PursuitEngine;
use crate::env::{Milestone, MilestoneSink};
use crate::state::Vec3;

impl PursuitEngine {
    /// Tracks distance from the last known position and unbroken time out of
    /// sight. When both pass their thresholds the level drops by a fixed
    /// amount, once per pursuit.
    pub(super) fn advance_leg_it(
        &mut self,
        dt: f32,
        player: Vec3,
        milestones: &mut dyn MilestoneSink,
    ) {
        if self.state.leg_it_condition_met {
            return;
        }
        // Only counts while a pursuit is active and nobody currently has eyes
        // on the player.
        if self.state.alert_level.is_zero()
            || (self.state.in_pursuit() && self.state.has_line_of_sight)
        {
            self.state.leg_it_los_break_timer = 0.0;
            return;
        }

        self.state.leg_it_los_break_timer += dt;
        self.state.leg_it_distance = self
            .state
            .last_known_position
            .map_or(0.0, |last_known| last_known.planar_distance(player));

        if self.state.leg_it_distance < self.config.leg_it_distance
            || self.state.leg_it_los_break_timer < self.config.leg_it_los_break
        {
            return;
        }

        self.state.leg_it_condition_met = true;
        self.state.shed_stars(self.config.leg_it_reduction);
        tracing::info!(
            distance = self.state.leg_it_distance,
            level = %self.state.alert_level,
            "legged it"
        );
        self.award(Milestone::LegIt, milestones);
        if !self.state.in_pursuit() {
            self.end_pursuit();
        }
    }
}
