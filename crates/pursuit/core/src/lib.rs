//! Pursuit escalation and evasion rules.
//!
//! `pursuit-core` tracks how hard enforcement agents are hunting the player,
//! how that response decays while the player stays out of sight, and the
//! tactics the player can use to shed it. All state mutation flows through
//! [`engine::PursuitEngine`]; the surrounding game is reached only through the
//! collaborator traits in [`env`], which are passed in per call.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{ConfigError, PursuitConfig};
pub use engine::{
    BribeOutcome, BribeReceipt, BribeRefusal, DisguiseEscape, DisguiseOutcome, DisguiseRefusal,
    PursuitEngine, SafeHouseOutcome, TickContext,
};
pub use env::{
    AgentBehavior, AgentId, AgentRoster, AgentTier, AgentView, AmbientOracle, CriminalRecord,
    DisguiseId, DisguiseOracle, Milestone, MilestoneSink, Notoriety, PcgRng, Precipitation,
    RecordCategory, RngOracle, Wallet,
};
pub use error::Refusal;
pub use state::{AlertLevel, MilestoneLatches, PursuitSnapshot, PursuitState, Vec3};
