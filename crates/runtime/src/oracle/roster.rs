//! Vector-backed enforcement agent roster.
use pursuit_core::{AgentBehavior, AgentId, AgentRoster, AgentTier, AgentView, Vec3};

/// Agents the host game has spawned, with the behaviour last requested of
/// each.
#[derive(Clone, Debug, Default)]
pub struct AgentRosterImpl {
    agents: Vec<AgentView>,
    next_id: u32,
}

impl AgentRosterImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a patrolling agent and returns its id.
    pub fn spawn(&mut self, tier: AgentTier, position: Vec3) -> AgentId {
        let id = AgentId(self.next_id);
        self.next_id += 1;
        self.agents.push(AgentView {
            id,
            alive: true,
            tier,
            position,
            behavior: AgentBehavior::Patrolling,
        });
        tracing::debug!(agent = %id, %tier, "agent spawned");
        id
    }

    pub fn kill(&mut self, id: AgentId) {
        if let Some(agent) = self.get_mut(id) {
            agent.alive = false;
        }
    }

    /// Knocks an agent out of action without killing it.
    pub fn disable(&mut self, id: AgentId) {
        if let Some(agent) = self.get_mut(id) {
            agent.behavior = AgentBehavior::Disabled;
        }
    }

    pub fn move_to(&mut self, id: AgentId, position: Vec3) {
        if let Some(agent) = self.get_mut(id) {
            agent.position = position;
        }
    }

    pub fn get(&self, id: AgentId) -> Option<&AgentView> {
        self.agents.iter().find(|agent| agent.id == id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    fn get_mut(&mut self, id: AgentId) -> Option<&mut AgentView> {
        self.agents.iter_mut().find(|agent| agent.id == id)
    }
}

impl AgentRoster for AgentRosterImpl {
    fn agents(&self) -> Vec<AgentView> {
        self.agents.clone()
    }

    fn agent(&self, id: AgentId) -> Option<AgentView> {
        self.get(id).copied()
    }

    /// Dead and disabled agents ignore requests.
    fn request_behavior(&mut self, id: AgentId, behavior: AgentBehavior) {
        let Some(agent) = self.get_mut(id) else {
            tracing::debug!(agent = %id, "behaviour requested for unknown agent");
            return;
        };
        if !agent.alive || agent.behavior == AgentBehavior::Disabled {
            return;
        }
        if agent.behavior != behavior {
            tracing::trace!(agent = %id, ?behavior, "agent behaviour changed");
            agent.behavior = behavior;
        }
    }
}
