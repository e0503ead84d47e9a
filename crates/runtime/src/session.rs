//! Session façade owning the engine, its collaborators and the event bus.
use pursuit_core::{
    AgentId, AlertLevel, BribeOutcome, DisguiseOutcome, PursuitConfig, PursuitEngine,
    PursuitSnapshot, Refusal, SafeHouseOutcome, TickContext, Vec3,
};
use tokio::sync::broadcast;

use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::events::{EventBus, PursuitEvent, Tactic, Topic};
use crate::oracle::{
    AgentRosterImpl, AmbientOracleImpl, CriminalRecordImpl, DisguiseOracleImpl, NotorietyImpl,
    WalletImpl,
};

/// One play session's pursuit, with every collaborator wired in.
///
/// Each operation forwards to [`PursuitEngine`] and then publishes what
/// changed: level moves, clears, tactic results and milestones.
pub struct PursuitSession {
    engine: PursuitEngine,
    roster: AgentRosterImpl,
    ambient: AmbientOracleImpl,
    disguise: DisguiseOracleImpl,
    wallet: WalletImpl,
    notoriety: NotorietyImpl,
    record: CriminalRecordImpl,
    bus: EventBus,
}

impl PursuitSession {
    pub fn new(config: PursuitConfig) -> Self {
        Self::with_bus(PursuitEngine::new(config), EventBus::new())
    }

    /// Validates the pursuit tunables and sizes the bus from `config`.
    pub fn from_config(config: RuntimeConfig) -> Result<Self> {
        let engine = PursuitEngine::try_new(config.pursuit)?;
        Ok(Self::with_bus(
            engine,
            EventBus::with_capacity(config.event_buffer_size),
        ))
    }

    fn with_bus(engine: PursuitEngine, bus: EventBus) -> Self {
        Self {
            engine,
            roster: AgentRosterImpl::new(),
            ambient: AmbientOracleImpl::default(),
            disguise: DisguiseOracleImpl::default(),
            wallet: WalletImpl::default(),
            notoriety: NotorietyImpl::default(),
            record: CriminalRecordImpl::default(),
            bus,
        }
    }

    /// Starts the session with `balance` in the wallet.
    pub fn with_wallet(mut self, balance: u32) -> Self {
        self.wallet = WalletImpl::new(balance);
        self
    }

    pub fn with_notoriety(mut self, notoriety: NotorietyImpl) -> Self {
        self.notoriety = notoriety;
        self
    }

    // ===== accessors =====

    pub fn engine(&self) -> &PursuitEngine {
        &self.engine
    }

    pub fn snapshot(&self) -> PursuitSnapshot {
        self.engine.snapshot()
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<PursuitEvent> {
        self.bus.subscribe(topic)
    }

    pub fn roster(&self) -> &AgentRosterImpl {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut AgentRosterImpl {
        &mut self.roster
    }

    pub fn ambient_mut(&mut self) -> &mut AmbientOracleImpl {
        &mut self.ambient
    }

    pub fn disguise_mut(&mut self) -> &mut DisguiseOracleImpl {
        &mut self.disguise
    }

    pub fn wallet(&self) -> &WalletImpl {
        &self.wallet
    }

    pub fn wallet_mut(&mut self) -> &mut WalletImpl {
        &mut self.wallet
    }

    pub fn notoriety(&self) -> &NotorietyImpl {
        &self.notoriety
    }

    pub fn record(&self) -> &CriminalRecordImpl {
        &self.record
    }

    // ===== engine operations =====

    pub fn crime_witnessed(&mut self, severity: u32, location: Vec3) -> bool {
        let before = self.level();
        let raised = self
            .engine
            .on_crime_witnessed(severity, location, &mut self.bus);
        self.publish_transition(before);
        raised
    }

    pub fn add_level_directly(&mut self, stars: u32, location: Vec3) {
        let before = self.level();
        self.engine
            .add_level_directly(stars, location, &mut self.bus);
        self.publish_transition(before);
    }

    /// Advances the pursuit by one frame with the player at `player`.
    pub fn update(&mut self, delta_seconds: f32, player: Vec3) {
        let before = self.level();
        self.engine.update(
            delta_seconds,
            TickContext {
                player,
                ambient: &self.ambient,
                roster: &mut self.roster,
                milestones: &mut self.bus,
            },
        );
        self.publish_transition(before);
    }

    pub fn attempt_disguise_escape(&mut self) -> DisguiseOutcome {
        let outcome = self
            .engine
            .attempt_disguise_escape(&self.disguise, &mut self.roster);
        self.publish_tactic(Tactic::Disguise, outcome.as_ref().err());
        outcome
    }

    pub fn attempt_bribe(&mut self, agent: AgentId) -> BribeOutcome {
        let before = self.level();
        let outcome = self.engine.attempt_bribe(
            agent,
            &self.roster,
            &mut self.wallet,
            &self.notoriety,
        );
        self.publish_tactic(Tactic::Bribe { agent }, outcome.as_ref().err());
        self.publish_transition(before);
        outcome
    }

    pub fn enter_safe_house(&mut self) -> SafeHouseOutcome {
        let outcome = self.engine.enter_safe_house();
        let refusal = match outcome {
            SafeHouseOutcome::Sheltering => None,
            other => Some(other.as_ref().to_owned()),
        };
        self.bus.publish(PursuitEvent::TacticResolved {
            tactic: Tactic::SafeHouse,
            refusal,
        });
        outcome
    }

    pub fn exit_safe_house(&mut self) {
        self.engine.exit_safe_house();
    }

    pub fn toggle_hiding(&mut self, entering: bool) {
        self.engine.toggle_hiding(entering);
    }

    pub fn offer_favor(&mut self, agent: AgentId) -> bool {
        self.engine.offer_favor(agent, &mut self.bus)
    }

    /// Settles an arrest against the session's wallet, record and notoriety.
    pub fn resolve_arrest(&mut self) -> u32 {
        let before = self.level();
        let fine = self.engine.resolve_arrest(
            &mut self.wallet,
            &mut self.record,
            &mut self.notoriety,
            &mut self.bus,
        );
        self.bus.publish(PursuitEvent::Arrested { fine });
        self.publish_transition(before);
        fine
    }

    pub fn clear_pursuit(&mut self) {
        let before = self.level();
        self.engine.clear_pursuit();
        self.publish_transition(before);
    }

    fn level(&self) -> AlertLevel {
        self.engine.state().alert_level()
    }

    fn publish_transition(&self, before: AlertLevel) {
        let after = self.level();
        if after == before {
            return;
        }
        self.bus.publish(PursuitEvent::LevelChanged {
            from: before,
            to: after,
        });
        if after.is_zero() {
            self.bus.publish(PursuitEvent::PursuitCleared);
        }
    }

    fn publish_tactic<R: Refusal>(&self, tactic: Tactic, refusal: Option<&R>) {
        if let Some(refusal) = refusal {
            tracing::debug!(?tactic, code = refusal.error_code(), %refusal, "tactic refused");
        }
        self.bus.publish(PursuitEvent::TacticResolved {
            tactic,
            refusal: refusal.map(|refusal| refusal.error_code().to_owned()),
        });
    }
}
