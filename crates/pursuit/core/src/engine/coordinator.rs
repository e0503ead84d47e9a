//! Agent behaviour synchronisation and the shared search phase.

use super::PursuitEngine;
use crate::env::{AgentBehavior, AgentRoster, AgentView};
use crate::state::Vec3;

impl PursuitEngine {
    /// Runs the search phase clock and sends searchers home when it expires.
    ///
    /// Officers give up a fruitless sweep regardless of whether the alert
    /// level itself has decayed.
    pub(super) fn advance_search(
        &mut self,
        dt: f32,
        agents: &[AgentView],
        roster: &mut dyn AgentRoster,
    ) {
        if !self.state.search_phase_active {
            return;
        }

        self.state.search_timer += dt;
        if self.state.search_timer < self.config.search_duration {
            return;
        }

        let mut released = 0usize;
        for id in &self.state.searchers {
            let still_searching = agents
                .iter()
                .find(|agent| agent.id == *id)
                .is_some_and(|agent| agent.behavior.is_searching());
            if still_searching {
                roster.request_behavior(*id, AgentBehavior::Patrolling);
                released += 1;
            }
        }
        tracing::debug!(released, "search phase expired");
        self.state.stop_search();
    }

    /// Requests the behaviour each agent should have given the current level
    /// and sight.
    pub(super) fn sync_agents(&mut self, player: Vec3, roster: &mut dyn AgentRoster) {
        let agents = roster.agents();

        if !self.state.in_pursuit() {
            for agent in agents.iter().filter(|agent| agent.behavior.is_pursuing()) {
                roster.request_behavior(agent.id, AgentBehavior::Patrolling);
            }
            return;
        }

        let last_known = self.state.last_known_position.unwrap_or(player);
        for agent in &agents {
            if self.sees(agent, player) {
                roster.request_behavior(agent.id, AgentBehavior::Chasing { target: player });
                self.state.searchers.retain(|id| *id != agent.id);
            } else if agent.alive && agent.behavior.is_chasing() {
                roster.request_behavior(agent.id, AgentBehavior::Searching { target: last_known });
                self.enlist_searcher(agent);
            }
        }
    }

    fn enlist_searcher(&mut self, agent: &AgentView) {
        if !self.state.searchers.contains(&agent.id)
            && self.state.searchers.try_push(agent.id).is_err()
        {
            tracing::debug!(agent = %agent.id, "search roster full, agent not tracked");
        }
        if !self.state.search_phase_active {
            self.state.search_phase_active = true;
            self.state.search_timer = 0.0;
            tracing::debug!(agent = %agent.id, "search phase started");
        }
    }

    /// Sends every chasing or searching agent back to patrol and ends the
    /// search phase.
    pub(super) fn stand_down(&mut self, roster: &mut dyn AgentRoster) -> usize {
        let mut released = 0usize;
        for agent in roster.agents() {
            if agent.behavior.is_pursuing() {
                roster.request_behavior(agent.id, AgentBehavior::Patrolling);
                released += 1;
            }
        }
        self.state.stop_search();
        released
    }
}
