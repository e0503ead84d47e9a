//! In-memory collaborator implementations.
//!
//! These implement the `pursuit-core` collaborator traits so a session can run
//! without a host game. A real game would back the same traits with its own
//! agent and economy systems.
mod ambient;
mod disguise;
mod economy;
mod roster;

pub use ambient::AmbientOracleImpl;
pub use disguise::DisguiseOracleImpl;
pub use economy::{CriminalRecordImpl, NotorietyImpl, WalletImpl};
pub use roster::AgentRosterImpl;
