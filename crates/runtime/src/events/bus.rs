//! Topic-based event bus implementation.

use pursuit_core::{Milestone, MilestoneSink};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::PursuitEvent;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Level changes, clears and arrests
    Pursuit,
    /// Tactic attempts and their outcome
    Tactic,
    /// One-shot milestones
    Milestone,
}

/// Topic-based event bus
///
/// Every topic has its own broadcast channel, created up front. Clones share
/// the same channels.
#[derive(Clone)]
pub struct EventBus {
    pursuit: broadcast::Sender<PursuitEvent>,
    tactic: broadcast::Sender<PursuitEvent>,
    milestone: broadcast::Sender<PursuitEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            pursuit: broadcast::channel(capacity).0,
            tactic: broadcast::channel(capacity).0,
            milestone: broadcast::channel(capacity).0,
        }
    }

    fn channel(&self, topic: Topic) -> &broadcast::Sender<PursuitEvent> {
        match topic {
            Topic::Pursuit => &self.pursuit,
            Topic::Tactic => &self.tactic,
            Topic::Milestone => &self.milestone,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: PursuitEvent) {
        let topic = event.topic();
        if self.channel(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<PursuitEvent> {
        self.channel(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> Vec<(Topic, broadcast::Receiver<PursuitEvent>)> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MilestoneSink for EventBus {
    fn award(&mut self, milestone: Milestone) {
        self.publish(PursuitEvent::Milestone(milestone));
    }
}
