//! Line-of-sight evaluation and star decay.

use super::PursuitEngine;
use crate::env::{AgentView, AmbientOracle, Milestone, MilestoneSink};
use crate::state::Vec3;

impl PursuitEngine {
    /// Detection radius under the given conditions.
    ///
    /// Night, rain and fog each subtract their own penalty; the result never
    /// drops below the configured minimum.
    pub fn effective_radius(&self, ambient: &dyn AmbientOracle) -> f32 {
        let mut radius = self.config.base_detection_radius;
        if ambient.is_night() {
            radius -= self.config.night_penalty;
        }
        if ambient.precipitation().obscures_vision() {
            radius -= self.config.rain_penalty;
        }
        if ambient.is_foggy() {
            radius -= self.config.fog_penalty;
        }
        radius.max(self.config.min_detection_radius)
    }

    /// True if `agent` is able to watch and the player is inside the radius.
    pub(super) fn sees(&self, agent: &AgentView, player: Vec3) -> bool {
        agent.can_observe() && agent.position.planar_distance(player) <= self.state.effective_radius
    }

    pub(super) fn evaluate_line_of_sight(
        &mut self,
        agents: &[AgentView],
        player: Vec3,
        ambient: &dyn AmbientOracle,
    ) {
        self.state.effective_radius = self.effective_radius(ambient);
        let spotted = agents.iter().any(|agent| self.sees(agent, player));

        if spotted != self.state.has_line_of_sight && self.state.in_pursuit() {
            tracing::debug!(spotted, "line of sight changed");
        }
        self.state.has_line_of_sight = spotted;
        if spotted && self.state.in_pursuit() {
            self.state.last_known_position = Some(player);
        }
    }

    /// Sheds one star per full decay period spent out of sight.
    ///
    /// The remainder carries into the next period, so a large step never
    /// loses time and regained sight always restarts the count from zero.
    pub(super) fn advance_decay(&mut self, dt: f32, milestones: &mut dyn MilestoneSink) {
        if !self.state.in_pursuit() {
            return;
        }

        if self.state.has_line_of_sight {
            self.state.decay_timer = 0.0;
            self.state.los_break_timer = 0.0;
            self.state.los_contact_timer += dt;
            return;
        }

        self.state.los_contact_timer = 0.0;
        self.state.los_break_timer += dt;
        self.state.decay_timer += dt;

        let period = self.config.decay_seconds_per_star;
        while self.state.in_pursuit() && self.state.decay_timer >= period {
            self.state.decay_timer -= period;
            self.state.shed_stars(1);
            tracing::debug!(level = %self.state.alert_level, "alert level decayed");

            if !self.state.in_pursuit() {
                self.end_pursuit();
                self.award(Milestone::CleanGetaway, milestones);
            }
        }
    }
}
