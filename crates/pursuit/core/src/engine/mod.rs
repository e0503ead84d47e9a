//! Pursuit engine: escalation, per-frame timers and evasion tactics.
//!
//! [`PursuitEngine`] is the only writer of [`PursuitState`]. Player actions
//! call its tactic methods directly; the game loop calls [`PursuitEngine::update`]
//! once per frame, which runs the timers in a fixed order:
//!
//! 1. line-of-sight recomputation
//! 2. decay and contact timers
//! 3. hiding progress
//! 4. safehouse dwell
//! 5. search phase
//! 6. sustained evasion
//! 7. agent behaviour synchronisation
//!
//! Decay must see this frame's sight result before agents are resynchronised,
//! so an agent that just regained sight never lets the level decay.
mod arrest;
mod contact;
mod coordinator;
mod escalation;
mod hiding;
mod leg_it;
mod safe_house;
mod sight;
mod tactics;

pub use safe_house::SafeHouseOutcome;
pub use tactics::{
    BribeOutcome, BribeReceipt, BribeRefusal, DisguiseEscape, DisguiseOutcome, DisguiseRefusal,
};

use crate::config::{ConfigError, PursuitConfig};
use crate::env::{AgentRoster, AmbientOracle, Milestone, MilestoneSink, PcgRng, RngOracle};
use crate::state::{PursuitSnapshot, PursuitState, Vec3};

/// Collaborators borrowed for one [`PursuitEngine::update`] call.
pub struct TickContext<'a> {
    pub player: Vec3,
    pub ambient: &'a dyn AmbientOracle,
    pub roster: &'a mut dyn AgentRoster,
    pub milestones: &'a mut dyn MilestoneSink,
}

/// Authoritative reducer for [`PursuitState`].
pub struct PursuitEngine {
    config: PursuitConfig,
    state: PursuitState,
    rng: Box<dyn RngOracle>,
}

impl PursuitEngine {
    /// Creates an engine with a fresh session state.
    ///
    /// The configuration is trusted as given; use [`PursuitEngine::try_new`]
    /// for configuration loaded from outside the program.
    pub fn new(config: PursuitConfig) -> Self {
        let state = PursuitState {
            effective_radius: config.base_detection_radius,
            ..PursuitState::new()
        };
        Self {
            config,
            state,
            rng: Box::new(PcgRng),
        }
    }

    /// Creates an engine after validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first invariant the configuration violates.
    pub fn try_new(config: PursuitConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Replaces the random source.
    pub fn with_rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn config(&self) -> &PursuitConfig {
        &self.config
    }

    pub fn state(&self) -> &PursuitState {
        &self.state
    }

    pub fn snapshot(&self) -> PursuitSnapshot {
        self.state.snapshot()
    }

    /// Random source reserved for probabilistic rules.
    pub fn rng(&self) -> &dyn RngOracle {
        self.rng.as_ref()
    }

    /// Advances every pursuit timer by `delta_seconds`.
    ///
    /// Negative or non-finite deltas are treated as zero: sight and agent
    /// behaviour are still refreshed but no timer moves.
    pub fn update(&mut self, delta_seconds: f32, ctx: TickContext<'_>) {
        let dt = if delta_seconds.is_finite() && delta_seconds > 0.0 {
            delta_seconds
        } else {
            0.0
        };
        let TickContext {
            player,
            ambient,
            roster,
            milestones,
        } = ctx;

        let agents = roster.agents();
        self.evaluate_line_of_sight(&agents, player, ambient);
        self.advance_decay(dt, milestones);
        self.advance_hiding(dt);
        self.advance_safe_house(dt);
        self.advance_search(dt, &agents, roster);
        self.advance_leg_it(dt, player, milestones);
        self.sync_agents(player, roster);
    }

    /// Ends the current pursuit, resetting every per-episode timer and latch.
    ///
    /// Idempotent: calling it with no pursuit active changes nothing, so a
    /// refuge entered while idle stays entered.
    pub fn clear_pursuit(&mut self) {
        if !self.state.in_pursuit() {
            return;
        }
        tracing::info!(level = %self.state.alert_level, "pursuit cleared");
        self.state.clear_episode();
    }

    /// Finishes an episode whose last star was just shed.
    fn end_pursuit(&mut self) {
        tracing::info!("pursuit cleared");
        self.state.clear_episode();
    }

    /// Fires `milestone` the first time it is reached this session.
    fn award(&mut self, milestone: Milestone, sink: &mut dyn MilestoneSink) {
        if self.state.milestones.claim(milestone) {
            tracing::info!(%milestone, "milestone reached");
            sink.award(milestone);
        }
    }
}
