//! Enforcement agent roster interface.
//!
//! The engine never owns agents. It reads a per-tick view of the roster and
//! requests behaviour transitions through [`AgentRoster::request_behavior`];
//! agent lifetime, movement and animation belong to the caller.

use std::fmt;

use crate::state::Vec3;

/// Stable identifier of an enforcement agent in the external roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent#{}", self.0)
    }
}

/// Duty tier of an agent. Only light-duty agents take bribes.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AgentTier {
    /// Community support officer - unarmed, underpaid, open to persuasion
    LightDuty,
    /// Regular beat officer
    #[default]
    Officer,
    /// Armed response unit
    ArmedResponse,
}

impl AgentTier {
    pub const fn is_light_duty(self) -> bool {
        matches!(self, Self::LightDuty)
    }
}

/// Behaviour state of an agent, owned by the roster.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentBehavior {
    #[default]
    Patrolling,
    /// Pursuing the player's live position.
    Chasing { target: Vec3 },
    /// Sweeping the last place the player was seen.
    Searching { target: Vec3 },
    /// Stunned, knocked down, or otherwise out of action.
    Disabled,
    /// Busy putting someone in handcuffs.
    Arresting,
}

impl AgentBehavior {
    /// True for the two states a pursuit puts agents into.
    pub const fn is_pursuing(&self) -> bool {
        matches!(self, Self::Chasing { .. } | Self::Searching { .. })
    }

    pub const fn is_chasing(&self) -> bool {
        matches!(self, Self::Chasing { .. })
    }

    pub const fn is_searching(&self) -> bool {
        matches!(self, Self::Searching { .. })
    }

    /// Disabled and arresting agents neither watch nor chase.
    pub const fn is_available(&self) -> bool {
        !matches!(self, Self::Disabled | Self::Arresting)
    }
}

/// Per-tick view of one agent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentView {
    pub id: AgentId,
    pub alive: bool,
    pub tier: AgentTier,
    pub position: Vec3,
    pub behavior: AgentBehavior,
}

impl AgentView {
    /// Living and not disabled or arresting.
    pub fn can_observe(&self) -> bool {
        self.alive && self.behavior.is_available()
    }
}

/// Read/command access to the enforcement agents in the world.
pub trait AgentRoster {
    /// Returns the current view of every agent, living or dead.
    fn agents(&self) -> Vec<AgentView>;

    /// Returns the view of a single agent.
    fn agent(&self, id: AgentId) -> Option<AgentView> {
        self.agents().into_iter().find(|agent| agent.id == id)
    }

    /// Asks the roster to move an agent into `behavior`.
    ///
    /// Unknown ids are ignored.
    fn request_behavior(&mut self, id: AgentId, behavior: AgentBehavior);
}
