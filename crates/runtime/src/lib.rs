//! Runtime wiring for the pursuit engine.
//!
//! `pursuit-core` is a pure reducer that borrows its collaborators for the
//! duration of each call. This crate supplies reference collaborators, a
//! topic-based [`EventBus`], TOML/environment configuration and a
//! [`PursuitSession`] that owns all of them and publishes what changed.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session façade
//! - [`events`] provides the broadcast event bus
//! - [`oracle`] holds in-memory collaborator implementations
//! - [`config`] loads tunables from files and the environment
pub mod config;
pub mod error;
pub mod events;
pub mod oracle;
pub mod session;

pub use config::{ConfigLoader, RuntimeConfig};
pub use error::{Result, RuntimeError};
pub use events::{EventBus, PursuitEvent, Tactic, Topic};
pub use oracle::{
    AgentRosterImpl, AmbientOracleImpl, CriminalRecordImpl, DisguiseOracleImpl, NotorietyImpl,
    WalletImpl,
};
pub use session::PursuitSession;
