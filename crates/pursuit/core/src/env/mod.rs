//! Traits describing the engine's external collaborators.
//!
//! The engine reads agent positions, ambient conditions and disguise status,
//! and drives currency, notoriety, the criminal record and the agent roster
//! through these narrow interfaces. Collaborators are borrowed for a single
//! call and never retained.
mod agents;
mod ambient;
mod disguise;
mod economy;
mod milestones;
mod rng;

pub use agents::{AgentBehavior, AgentId, AgentRoster, AgentTier, AgentView};
pub use ambient::{AmbientOracle, Precipitation};
pub use disguise::{DisguiseId, DisguiseOracle};
pub use economy::{CriminalRecord, Notoriety, RecordCategory, Wallet};
pub use milestones::{Milestone, MilestoneSink};
pub use rng::{PcgRng, RngOracle};
