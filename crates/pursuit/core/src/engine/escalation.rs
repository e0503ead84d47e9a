//! Severity accumulation and alert level escalation.

use super::PursuitEngine;
use crate::env::{Milestone, MilestoneSink};
use crate::state::{AlertLevel, Vec3};

impl PursuitEngine {
    /// Records a witnessed crime of `severity` at `location`.
    ///
    /// Returns true if the alert level went up. A zero severity is a no-op.
    pub fn on_crime_witnessed(
        &mut self,
        severity: u32,
        location: Vec3,
        milestones: &mut dyn MilestoneSink,
    ) -> bool {
        if severity == 0 {
            return false;
        }

        self.state.accumulated_severity = self.state.accumulated_severity.saturating_add(severity);
        let target = self.level_for_severity(self.state.accumulated_severity);
        tracing::debug!(
            severity,
            accumulated = self.state.accumulated_severity,
            %target,
            "crime witnessed"
        );

        if target <= self.state.alert_level {
            return false;
        }
        self.raise_to(target, location, milestones);
        true
    }

    /// Adds stars directly, bypassing the severity table.
    ///
    /// Used for acts with an immediate penalty such as striking an agent.
    /// Zero stars is a no-op.
    pub fn add_level_directly(
        &mut self,
        stars: u32,
        location: Vec3,
        milestones: &mut dyn MilestoneSink,
    ) {
        if stars == 0 {
            return;
        }
        let target = self.state.alert_level.raised_by(stars);
        self.raise_to(target, location, milestones);
    }

    /// Highest level whose severity threshold `severity` meets.
    pub fn level_for_severity(&self, severity: u32) -> AlertLevel {
        let stars = self
            .config
            .severity_steps
            .iter()
            .rposition(|&threshold| severity >= threshold)
            .unwrap_or(0);
        AlertLevel::new(stars as u8)
    }

    fn raise_to(&mut self, target: AlertLevel, location: Vec3, milestones: &mut dyn MilestoneSink) {
        let previous = self.state.alert_level;
        self.state.alert_level = target;
        self.state.last_known_position = Some(location);
        self.state.decay_timer = 0.0;

        if target != previous {
            tracing::debug!(from = %previous, to = %target, "alert level raised");
        }
        if target.is_max() {
            self.award(Milestone::MostWanted, milestones);
        }
    }
}
