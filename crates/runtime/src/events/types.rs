use pursuit_core::{AgentId, AlertLevel, Milestone};
use serde::{Deserialize, Serialize};

use super::Topic;

/// Player-initiated escape attempts reported on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tactic {
    Disguise,
    Bribe { agent: AgentId },
    SafeHouse,
}

/// Something observable happened to the pursuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PursuitEvent {
    /// Alert level moved for any reason.
    LevelChanged { from: AlertLevel, to: AlertLevel },

    /// An active pursuit ended, whatever ended it.
    PursuitCleared,

    /// Caught; `fine` is what was actually taken from the wallet.
    Arrested { fine: u32 },

    /// A tactic was attempted. `refusal` holds the refusal code when it was
    /// turned down.
    TacticResolved {
        tactic: Tactic,
        refusal: Option<String>,
    },

    Milestone(Milestone),
}

impl PursuitEvent {
    pub fn topic(&self) -> Topic {
        match self {
            PursuitEvent::LevelChanged { .. }
            | PursuitEvent::PursuitCleared
            | PursuitEvent::Arrested { .. } => Topic::Pursuit,
            PursuitEvent::TacticResolved { .. } => Topic::Tactic,
            PursuitEvent::Milestone(_) => Topic::Milestone,
        }
    }
}
