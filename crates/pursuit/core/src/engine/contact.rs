//! Cultivating a single corrupt agent through repeated favours.

use super::PursuitEngine;
use crate::env::{AgentId, Milestone, MilestoneSink};

impl PursuitEngine {
    /// Does a favour for `agent`.
    ///
    /// Only one agent can be cultivated per session; favours offered to
    /// anyone else are wasted. Returns true once the relationship is
    /// established, which is permanent.
    pub fn offer_favor(&mut self, agent: AgentId, milestones: &mut dyn MilestoneSink) -> bool {
        match self.state.corrupt_contact {
            Some(current) if current != agent => {
                tracing::debug!(%agent, %current, "favour offered to a second agent");
                return false;
            }
            _ => self.state.corrupt_contact = Some(agent),
        }
        if self.state.corrupt_contact_established {
            return true;
        }

        self.state.corrupt_contact_favors += 1;
        tracing::debug!(%agent, favors = self.state.corrupt_contact_favors, "favour offered");
        if self.state.corrupt_contact_favors >= self.config.corrupt_contact_threshold {
            self.state.corrupt_contact_established = true;
            tracing::info!(%agent, "corrupt contact established");
            self.award(Milestone::InsideMan, milestones);
        }
        self.state.corrupt_contact_established
    }
}
