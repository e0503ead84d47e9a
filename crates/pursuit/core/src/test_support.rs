//! In-memory collaborators for unit tests.

use std::collections::BTreeMap;

use crate::engine::{PursuitEngine, TickContext};
use crate::env::{
    AgentBehavior, AgentId, AgentRoster, AgentTier, AgentView, AmbientOracle, CriminalRecord,
    DisguiseId, DisguiseOracle, Milestone, MilestoneSink, Notoriety, Precipitation, RecordCategory,
    Wallet,
};
use crate::state::Vec3;

/// Roster whose agents only move when a test places them.
#[derive(Debug, Default)]
pub struct FakeRoster {
    agents: BTreeMap<AgentId, AgentView>,
}

impl FakeRoster {
    pub fn spawn(&mut self, id: AgentId, tier: AgentTier, position: Vec3) {
        self.agents.insert(
            id,
            AgentView {
                id,
                alive: true,
                tier,
                position,
                behavior: AgentBehavior::Patrolling,
            },
        );
    }

    pub fn place(&mut self, id: AgentId, position: Vec3) {
        if let Some(agent) = self.agents.get_mut(&id) {
            agent.position = position;
        }
    }

    pub fn set(&mut self, id: AgentId, behavior: AgentBehavior) {
        if let Some(agent) = self.agents.get_mut(&id) {
            agent.behavior = behavior;
        }
    }

    pub fn kill(&mut self, id: AgentId) {
        if let Some(agent) = self.agents.get_mut(&id) {
            agent.alive = false;
        }
    }

    pub fn behavior(&self, id: AgentId) -> AgentBehavior {
        self.agents[&id].behavior
    }
}

impl AgentRoster for FakeRoster {
    fn agents(&self) -> Vec<AgentView> {
        self.agents.values().copied().collect()
    }

    fn request_behavior(&mut self, id: AgentId, behavior: AgentBehavior) {
        self.set(id, behavior);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FakeAmbient {
    pub night: bool,
    pub precipitation: Precipitation,
    pub fog: bool,
}

impl FakeAmbient {
    pub fn night() -> Self {
        Self {
            night: true,
            ..Self::default()
        }
    }
}

impl AmbientOracle for FakeAmbient {
    fn is_night(&self) -> bool {
        self.night
    }

    fn precipitation(&self) -> Precipitation {
        self.precipitation
    }

    fn is_foggy(&self) -> bool {
        self.fog
    }
}

/// Records every milestone it receives.
#[derive(Debug, Default)]
pub struct Awards(Vec<Milestone>);

impl Awards {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn received(&self) -> &[Milestone] {
        &self.0
    }
}

impl MilestoneSink for Awards {
    fn award(&mut self, milestone: Milestone) {
        self.0.push(milestone);
    }
}

#[derive(Debug, Default)]
pub struct FakeWallet {
    pub balance: u32,
}

impl FakeWallet {
    pub fn with_balance(balance: u32) -> Self {
        Self { balance }
    }
}

impl Wallet for FakeWallet {
    fn balance(&self) -> u32 {
        self.balance
    }

    fn debit(&mut self, amount: u32) -> bool {
        match self.balance.checked_sub(amount) {
            Some(rest) => {
                self.balance = rest;
                true
            }
            None => false,
        }
    }

    fn credit(&mut self, amount: u32) {
        self.balance = self.balance.saturating_add(amount);
    }
}

#[derive(Debug, Default)]
pub struct FakeNotoriety {
    pub value: u32,
}

impl FakeNotoriety {
    pub fn at(value: u32) -> Self {
        Self { value }
    }
}

impl Notoriety for FakeNotoriety {
    fn value(&self) -> u32 {
        self.value
    }

    fn add(&mut self, delta: u32, _sink: &mut dyn MilestoneSink) {
        self.value = self.value.saturating_add(delta);
    }
}

#[derive(Debug, Default)]
pub struct FakeRecord {
    pub entries: Vec<RecordCategory>,
}

impl CriminalRecord for FakeRecord {
    fn record(&mut self, category: RecordCategory) {
        self.entries.push(category);
    }
}

#[derive(Debug, Default)]
pub struct FakeDisguise(Option<DisguiseId>);

impl FakeDisguise {
    pub fn wearing(id: u32) -> Self {
        Self(Some(DisguiseId(id)))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl DisguiseOracle for FakeDisguise {
    fn is_disguised(&self) -> bool {
        self.0.is_some()
    }

    fn equipped(&self) -> Option<DisguiseId> {
        self.0
    }
}

/// Runs one engine update with the given collaborators.
pub fn tick(
    engine: &mut PursuitEngine,
    dt: f32,
    player: Vec3,
    roster: &mut FakeRoster,
    ambient: &FakeAmbient,
    awards: &mut Awards,
) {
    engine.update(
        dt,
        TickContext {
            player,
            ambient,
            roster,
            milestones: awards,
        },
    );
}
