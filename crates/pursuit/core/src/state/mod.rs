//! Session-scoped pursuit state.
//!
//! [`PursuitState`] is owned exclusively by the engine. Fields are readable
//! through accessors but only writable from inside this crate, so every
//! mutation goes through an engine operation.
mod types;

pub use types::{AlertLevel, Vec3};

use arrayvec::ArrayVec;

use crate::config::PursuitConfig;
use crate::env::{AgentId, Milestone};

/// Agents currently sweeping the last known position.
pub type SearchRoster = ArrayVec<AgentId, { PursuitConfig::MAX_SEARCHERS }>;

/// One-shot "already awarded" flags. Never reset within a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MilestoneLatches {
    pub most_wanted: bool,
    pub clean_getaway: bool,
    pub leg_it: bool,
    pub inside_man: bool,
}

impl MilestoneLatches {
    /// Sets the latch for `milestone`, returning true only the first time.
    ///
    /// Milestones raised by collaborators rather than the engine have no latch
    /// here and always return true.
    pub fn claim(&mut self, milestone: Milestone) -> bool {
        let latch = match milestone {
            Milestone::MostWanted => &mut self.most_wanted,
            Milestone::CleanGetaway => &mut self.clean_getaway,
            Milestone::LegIt => &mut self.leg_it,
            Milestone::InsideMan => &mut self.inside_man,
            Milestone::Notorious => return true,
        };
        !core::mem::replace(latch, true)
    }
}

/// Canonical pursuit state for one play session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PursuitState {
    pub(crate) alert_level: AlertLevel,
    pub(crate) accumulated_severity: u32,
    /// Meaningful only while the alert level is above zero.
    pub(crate) last_known_position: Option<Vec3>,
    pub(crate) has_line_of_sight: bool,
    /// Radius used by the most recent line-of-sight pass.
    pub(crate) effective_radius: f32,

    pub(crate) decay_timer: f32,
    pub(crate) los_break_timer: f32,
    pub(crate) los_contact_timer: f32,

    pub(crate) search_phase_active: bool,
    pub(crate) search_timer: f32,
    pub(crate) searchers: SearchRoster,

    pub(crate) leg_it_distance: f32,
    pub(crate) leg_it_los_break_timer: f32,
    pub(crate) leg_it_condition_met: bool,

    pub(crate) disguise_used_this_pursuit: bool,

    pub(crate) is_hiding: bool,
    pub(crate) hiding_progress: f32,

    pub(crate) is_in_safe_house: bool,
    pub(crate) safe_house_timer: f32,

    pub(crate) corrupt_contact: Option<AgentId>,
    pub(crate) corrupt_contact_favors: u32,
    pub(crate) corrupt_contact_established: bool,

    pub(crate) milestones: MilestoneLatches,
}

impl PursuitState {
    pub fn new() -> Self {
        Self {
            alert_level: AlertLevel::ZERO,
            accumulated_severity: 0,
            last_known_position: None,
            has_line_of_sight: false,
            effective_radius: PursuitConfig::DEFAULT_BASE_DETECTION_RADIUS,
            decay_timer: 0.0,
            los_break_timer: 0.0,
            los_contact_timer: 0.0,
            search_phase_active: false,
            search_timer: 0.0,
            searchers: SearchRoster::new(),
            leg_it_distance: 0.0,
            leg_it_los_break_timer: 0.0,
            leg_it_condition_met: false,
            disguise_used_this_pursuit: false,
            is_hiding: false,
            hiding_progress: 0.0,
            is_in_safe_house: false,
            safe_house_timer: 0.0,
            corrupt_contact: None,
            corrupt_contact_favors: 0,
            corrupt_contact_established: false,
            milestones: MilestoneLatches::default(),
        }
    }

    /// Resets every per-episode field in one place.
    ///
    /// Hiding, corrupt-contact progress and milestone latches are session
    /// scoped and survive.
    pub(crate) fn clear_episode(&mut self) {
        self.alert_level = AlertLevel::ZERO;
        self.accumulated_severity = 0;
        self.last_known_position = None;

        self.decay_timer = 0.0;
        self.los_break_timer = 0.0;
        self.los_contact_timer = 0.0;

        self.search_phase_active = false;
        self.search_timer = 0.0;
        self.searchers.clear();

        self.leg_it_distance = 0.0;
        self.leg_it_los_break_timer = 0.0;
        self.leg_it_condition_met = false;

        self.disguise_used_this_pursuit = false;

        self.is_in_safe_house = false;
        self.safe_house_timer = 0.0;
    }

    /// Drops the level and severity by the same amount, both floored at zero.
    pub(crate) fn shed_stars(&mut self, stars: u8) {
        self.alert_level = self.alert_level.lowered_by(stars);
        self.accumulated_severity = self.accumulated_severity.saturating_sub(stars as u32);
    }

    pub(crate) fn stop_search(&mut self) {
        self.search_phase_active = false;
        self.search_timer = 0.0;
        self.searchers.clear();
    }

    pub fn alert_level(&self) -> AlertLevel {
        self.alert_level
    }

    /// A pursuit is active exactly when the alert level is above zero.
    pub fn in_pursuit(&self) -> bool {
        !self.alert_level.is_zero()
    }

    pub fn accumulated_severity(&self) -> u32 {
        self.accumulated_severity
    }

    pub fn last_known_position(&self) -> Option<Vec3> {
        self.last_known_position
    }

    pub fn has_line_of_sight(&self) -> bool {
        self.has_line_of_sight
    }

    pub fn effective_radius(&self) -> f32 {
        self.effective_radius
    }

    pub fn decay_timer(&self) -> f32 {
        self.decay_timer
    }

    pub fn los_break_timer(&self) -> f32 {
        self.los_break_timer
    }

    pub fn los_contact_timer(&self) -> f32 {
        self.los_contact_timer
    }

    pub fn search_phase_active(&self) -> bool {
        self.search_phase_active
    }

    pub fn search_timer(&self) -> f32 {
        self.search_timer
    }

    pub fn searchers(&self) -> &[AgentId] {
        &self.searchers
    }

    pub fn leg_it_distance(&self) -> f32 {
        self.leg_it_distance
    }

    pub fn leg_it_los_break_timer(&self) -> f32 {
        self.leg_it_los_break_timer
    }

    pub fn leg_it_condition_met(&self) -> bool {
        self.leg_it_condition_met
    }

    pub fn disguise_used_this_pursuit(&self) -> bool {
        self.disguise_used_this_pursuit
    }

    pub fn is_hiding(&self) -> bool {
        self.is_hiding
    }

    pub fn hiding_progress(&self) -> f32 {
        self.hiding_progress
    }

    pub fn is_in_safe_house(&self) -> bool {
        self.is_in_safe_house
    }

    pub fn safe_house_timer(&self) -> f32 {
        self.safe_house_timer
    }

    pub fn corrupt_contact(&self) -> Option<AgentId> {
        self.corrupt_contact
    }

    pub fn corrupt_contact_favors(&self) -> u32 {
        self.corrupt_contact_favors
    }

    /// Returns true if `agent` is an established corrupt contact.
    pub fn is_corrupt_contact(&self, agent: AgentId) -> bool {
        self.corrupt_contact_established && self.corrupt_contact == Some(agent)
    }

    pub fn milestones(&self) -> MilestoneLatches {
        self.milestones
    }

    pub fn snapshot(&self) -> PursuitSnapshot {
        PursuitSnapshot {
            alert_level: self.alert_level,
            in_pursuit: self.in_pursuit(),
            has_line_of_sight: self.has_line_of_sight,
            effective_radius: self.effective_radius,
            last_known_position: self.last_known_position,
            decay_timer: self.decay_timer,
            search_phase_active: self.search_phase_active,
            search_timer: self.search_timer,
            is_hiding: self.is_hiding,
            hiding_progress: self.hiding_progress,
            is_in_safe_house: self.is_in_safe_house,
            safe_house_timer: self.safe_house_timer,
            disguise_available: !self.disguise_used_this_pursuit,
            corrupt_contact: self
                .corrupt_contact_established
                .then_some(self.corrupt_contact)
                .flatten(),
        }
    }
}

impl Default for PursuitState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only copy of the values a HUD needs each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PursuitSnapshot {
    pub alert_level: AlertLevel,
    pub in_pursuit: bool,
    pub has_line_of_sight: bool,
    pub effective_radius: f32,
    pub last_known_position: Option<Vec3>,
    pub decay_timer: f32,
    pub search_phase_active: bool,
    pub search_timer: f32,
    pub is_hiding: bool,
    pub hiding_progress: f32,
    pub is_in_safe_house: bool,
    pub safe_house_timer: f32,
    pub disguise_available: bool,
    /// Established corrupt contact, if any.
    pub corrupt_contact: Option<AgentId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_episode_resets_every_episode_field() {
        let mut state = PursuitState::new();
        state.alert_level = AlertLevel::new(3);
        state.accumulated_severity = 7;
        state.last_known_position = Some(Vec3::new(1.0, 0.0, 1.0));
        state.decay_timer = 12.0;
        state.los_break_timer = 12.0;
        state.los_contact_timer = 4.0;
        state.search_phase_active = true;
        state.search_timer = 3.0;
        state.searchers.push(AgentId(4));
        state.leg_it_distance = 50.0;
        state.leg_it_los_break_timer = 21.0;
        state.leg_it_condition_met = true;
        state.disguise_used_this_pursuit = true;
        state.is_in_safe_house = true;
        state.safe_house_timer = 10.0;

        state.clear_episode();

        let fresh = PursuitState {
            effective_radius: state.effective_radius,
            ..PursuitState::new()
        };
        assert_eq!(state, fresh);
    }

    #[test]
    fn clear_episode_keeps_session_scoped_fields() {
        let mut state = PursuitState::new();
        state.alert_level = AlertLevel::new(2);
        state.is_hiding = true;
        state.hiding_progress = 0.5;
        state.corrupt_contact = Some(AgentId(9));
        state.corrupt_contact_favors = 3;
        state.corrupt_contact_established = true;
        state.milestones.most_wanted = true;

        state.clear_episode();

        assert!(state.is_hiding());
        assert_eq!(state.hiding_progress(), 0.5);
        assert!(state.is_corrupt_contact(AgentId(9)));
        assert!(state.milestones().most_wanted);
        assert!(!state.in_pursuit());
    }

    #[test]
    fn milestone_latch_claims_once() {
        let mut latches = MilestoneLatches::default();

        assert!(latches.claim(Milestone::CleanGetaway));
        assert!(!latches.claim(Milestone::CleanGetaway));
        assert!(latches.claim(Milestone::LegIt));
    }
}
