//! Player-initiated escapes: disguise reset and bribery.
//!
//! Each tactic checks its preconditions against the current state and
//! reports a closed outcome. Refusals carry the detail a UI needs to explain
//! itself.

use super::PursuitEngine;
use crate::env::{AgentId, AgentRoster, DisguiseOracle, Notoriety, Wallet};
use crate::error::Refusal;
use crate::state::AlertLevel;

/// Result of [`PursuitEngine::attempt_disguise_escape`].
pub type DisguiseOutcome = Result<DisguiseEscape, DisguiseRefusal>;

/// Result of [`PursuitEngine::attempt_bribe`].
pub type BribeOutcome = Result<BribeReceipt, BribeRefusal>;

/// A disguise change that made agents lose the suspect's description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisguiseEscape {
    /// Agents sent back to patrol.
    pub agents_released: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DisguiseRefusal {
    #[error("nobody is looking for you")]
    NotWanted,

    #[error("too hot to blend in at {level}")]
    TooManyStars { level: AlertLevel },

    #[error("they have already seen through one disguise")]
    AlreadyUsed,

    #[error("you are not wearing a disguise")]
    NotDisguised,
}

impl Refusal for DisguiseRefusal {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotWanted => "DISGUISE_NOT_WANTED",
            Self::TooManyStars { .. } => "DISGUISE_TOO_MANY_STARS",
            Self::AlreadyUsed => "DISGUISE_ALREADY_USED",
            Self::NotDisguised => "DISGUISE_NOT_DISGUISED",
        }
    }
}

/// An accepted bribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BribeReceipt {
    pub cost: u32,
    /// Alert level after the bribe.
    pub level: AlertLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BribeRefusal {
    #[error("{0} cannot be bought")]
    NotEligible(AgentId),

    #[error("your reputation precedes you ({notoriety} notoriety, limit {ceiling})")]
    TooNotorious { notoriety: u32, ceiling: u32 },

    #[error("nobody is looking for you")]
    NotWanted,

    #[error("the price is {cost} and you have {balance}")]
    InsufficientFunds { cost: u32, balance: u32 },
}

impl Refusal for BribeRefusal {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotEligible(_) => "BRIBE_NOT_ELIGIBLE",
            Self::TooNotorious { .. } => "BRIBE_TOO_NOTORIOUS",
            Self::NotWanted => "BRIBE_NOT_WANTED",
            Self::InsufficientFunds { .. } => "BRIBE_INSUFFICIENT_FUNDS",
        }
    }
}

impl PursuitEngine {
    /// Changes into a disguise so pursuing agents lose the description.
    ///
    /// The alert level is kept; only the agents' pursuit and the decay
    /// countdown restart. Usable once per pursuit.
    pub fn attempt_disguise_escape(
        &mut self,
        disguise: &dyn DisguiseOracle,
        roster: &mut dyn AgentRoster,
    ) -> DisguiseOutcome {
        let level = self.state.alert_level;
        if level.is_zero() {
            return Err(DisguiseRefusal::NotWanted);
        }
        if level.stars() > self.config.disguise_max_level {
            return Err(DisguiseRefusal::TooManyStars { level });
        }
        if self.state.disguise_used_this_pursuit {
            return Err(DisguiseRefusal::AlreadyUsed);
        }
        if !disguise.is_disguised() {
            return Err(DisguiseRefusal::NotDisguised);
        }

        let agents_released = self.stand_down(roster);
        self.state.disguise_used_this_pursuit = true;
        self.state.decay_timer = 0.0;
        tracing::info!(
            disguise = ?disguise.equipped(),
            agents_released,
            "disguise escape"
        );

        Ok(DisguiseEscape { agents_released })
    }

    /// Price `agent` would ask right now.
    ///
    /// Half price, rounded down, for an established corrupt contact.
    pub fn bribe_cost(&self, agent: AgentId) -> u32 {
        let cost = self
            .config
            .bribe_cost_per_star
            .saturating_mul(self.state.alert_level.stars() as u32);
        if self.state.is_corrupt_contact(agent) {
            cost / 2
        } else {
            cost
        }
    }

    /// Pays a light-duty agent to knock one star off.
    pub fn attempt_bribe(
        &mut self,
        agent: AgentId,
        roster: &dyn AgentRoster,
        wallet: &mut dyn Wallet,
        notoriety: &dyn Notoriety,
    ) -> BribeOutcome {
        let eligible = roster
            .agent(agent)
            .is_some_and(|view| view.alive && view.tier.is_light_duty());
        if !eligible {
            return Err(BribeRefusal::NotEligible(agent));
        }

        let ceiling = self.config.bribe_notoriety_ceiling;
        if notoriety.value() >= ceiling {
            return Err(BribeRefusal::TooNotorious {
                notoriety: notoriety.value(),
                ceiling,
            });
        }
        if !self.state.in_pursuit() {
            return Err(BribeRefusal::NotWanted);
        }

        let cost = self.bribe_cost(agent);
        let balance = wallet.balance();
        if balance < cost || !wallet.debit(cost) {
            return Err(BribeRefusal::InsufficientFunds { cost, balance });
        }

        self.state.shed_stars(1);
        let level = self.state.alert_level;
        tracing::info!(%agent, cost, %level, "bribe accepted");
        if level.is_zero() {
            self.end_pursuit();
        }

        Ok(BribeReceipt { cost, level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PursuitConfig;
    use crate::env::{AgentBehavior, AgentTier};
    use crate::state::Vec3;
    use crate::test_support::{
        Awards, FakeAmbient, FakeDisguise, FakeNotoriety, FakeRoster, FakeWallet, tick,
    };

    fn wanted_at(stars: u32) -> (PursuitEngine, Awards) {
        let mut engine = PursuitEngine::new(PursuitConfig::default());
        let mut awards = Awards::default();
        engine.add_level_directly(stars, Vec3::ORIGIN, &mut awards);
        (engine, awards)
    }

    fn pcso_roster() -> FakeRoster {
        let mut roster = FakeRoster::default();
        roster.spawn(AgentId(7), AgentTier::LightDuty, Vec3::new(3.0, 0.0, 0.0));
        roster.spawn(AgentId(8), AgentTier::Officer, Vec3::new(4.0, 0.0, 0.0));
        roster
    }

    #[test]
    fn disguise_releases_pursuers_and_keeps_the_level() {
        let (mut engine, mut awards) = wanted_at(3);
        let mut roster = pcso_roster();
        tick(
            &mut engine,
            10.0,
            Vec3::ORIGIN,
            &mut roster,
            &FakeAmbient::default(),
            &mut awards,
        );
        assert!(roster.behavior(AgentId(8)).is_chasing());

        let outcome = engine.attempt_disguise_escape(&FakeDisguise::wearing(1), &mut roster);

        assert_eq!(outcome, Ok(DisguiseEscape { agents_released: 2 }));
        assert_eq!(roster.behavior(AgentId(8)), AgentBehavior::Patrolling);
        assert_eq!(engine.state().alert_level(), AlertLevel::new(3));
        assert_eq!(engine.state().decay_timer(), 0.0);
    }

    #[test]
    fn disguise_refusals_follow_precondition_order() {
        let mut roster = FakeRoster::default();
        let disguised = FakeDisguise::wearing(1);

        let mut idle = PursuitEngine::new(PursuitConfig::default());
        assert_eq!(
            idle.attempt_disguise_escape(&disguised, &mut roster),
            Err(DisguiseRefusal::NotWanted)
        );

        let (mut hot, _) = wanted_at(4);
        assert_eq!(
            hot.attempt_disguise_escape(&disguised, &mut roster),
            Err(DisguiseRefusal::TooManyStars {
                level: AlertLevel::new(4)
            })
        );

        let (mut plain, _) = wanted_at(2);
        assert_eq!(
            plain.attempt_disguise_escape(&FakeDisguise::none(), &mut roster),
            Err(DisguiseRefusal::NotDisguised)
        );
    }

    #[test]
    fn disguise_works_once_per_pursuit() {
        let (mut engine, mut awards) = wanted_at(2);
        let mut roster = FakeRoster::default();
        let disguised = FakeDisguise::wearing(1);

        let escaped = engine.attempt_disguise_escape(&disguised, &mut roster);
        assert!(escaped.is_ok());
        assert_eq!(
            engine.attempt_disguise_escape(&disguised, &mut roster),
            Err(DisguiseRefusal::AlreadyUsed)
        );

        engine.clear_pursuit();
        engine.add_level_directly(2, Vec3::ORIGIN, &mut awards);
        let escaped = engine.attempt_disguise_escape(&disguised, &mut roster);
        assert!(escaped.is_ok());
    }

    #[test]
    fn disguise_stops_the_search_phase() {
        let (mut engine, mut awards) = wanted_at(1);
        let mut roster = pcso_roster();
        let ambient = FakeAmbient::default();
        tick(
            &mut engine,
            1.0,
            Vec3::ORIGIN,
            &mut roster,
            &ambient,
            &mut awards,
        );
        tick(
            &mut engine,
            1.0,
            Vec3::new(-30.0, 0.0, 0.0),
            &mut roster,
            &ambient,
            &mut awards,
        );
        assert!(engine.state().search_phase_active());

        engine
            .attempt_disguise_escape(&FakeDisguise::wearing(2), &mut roster)
            .unwrap();

        assert!(!engine.state().search_phase_active());
        assert!(engine.state().searchers().is_empty());
    }

    #[test]
    fn bribe_cost_scales_with_level() {
        let (mut engine, _) = wanted_at(3);
        let roster = pcso_roster();
        let mut wallet = FakeWallet::with_balance(100);

        let receipt = engine
            .attempt_bribe(AgentId(7), &roster, &mut wallet, &FakeNotoriety::default())
            .unwrap();

        assert_eq!(receipt.cost, 24);
        assert_eq!(receipt.level, AlertLevel::new(2));
        assert_eq!(wallet.balance, 76);
    }

    #[test]
    fn corrupt_contact_halves_the_price() {
        let (mut engine, mut awards) = wanted_at(3);
        let roster = pcso_roster();
        let mut wallet = FakeWallet::with_balance(20);
        let notoriety = FakeNotoriety::default();

        assert_eq!(
            engine.attempt_bribe(AgentId(7), &roster, &mut wallet, &notoriety),
            Err(BribeRefusal::InsufficientFunds {
                cost: 24,
                balance: 20
            })
        );
        assert_eq!(engine.state().alert_level(), AlertLevel::new(3));

        for _ in 0..3 {
            engine.offer_favor(AgentId(7), &mut awards);
        }
        let receipt = engine
            .attempt_bribe(AgentId(7), &roster, &mut wallet, &notoriety)
            .unwrap();

        assert_eq!(receipt.cost, 12);
        assert_eq!(wallet.balance, 8);
        assert_eq!(engine.state().alert_level(), AlertLevel::new(2));
        assert_eq!(engine.state().accumulated_severity(), 0);
    }

    #[test]
    fn odd_prices_round_down_for_contacts() {
        let (mut engine, mut awards) = wanted_at(1);
        for _ in 0..3 {
            engine.offer_favor(AgentId(7), &mut awards);
        }
        let config = PursuitConfig {
            bribe_cost_per_star: 9,
            ..PursuitConfig::default()
        };
        engine.config = config;

        assert_eq!(engine.bribe_cost(AgentId(7)), 4);
        assert_eq!(engine.bribe_cost(AgentId(8)), 9);
    }

    #[test]
    fn bribe_is_refused_for_ineligible_targets() {
        let (mut engine, _) = wanted_at(1);
        let mut roster = pcso_roster();
        let mut wallet = FakeWallet::with_balance(100);
        let notoriety = FakeNotoriety::default();

        assert_eq!(
            engine.attempt_bribe(AgentId(8), &roster, &mut wallet, &notoriety),
            Err(BribeRefusal::NotEligible(AgentId(8)))
        );
        assert_eq!(
            engine.attempt_bribe(AgentId(99), &roster, &mut wallet, &notoriety),
            Err(BribeRefusal::NotEligible(AgentId(99)))
        );

        roster.kill(AgentId(7));
        assert_eq!(
            engine.attempt_bribe(AgentId(7), &roster, &mut wallet, &notoriety),
            Err(BribeRefusal::NotEligible(AgentId(7)))
        );
        assert_eq!(wallet.balance, 100);
    }

    #[test]
    fn bribe_is_refused_when_too_notorious_or_not_wanted() {
        let roster = pcso_roster();
        let mut wallet = FakeWallet::with_balance(100);

        let (mut engine, _) = wanted_at(1);
        assert_eq!(
            engine.attempt_bribe(AgentId(7), &roster, &mut wallet, &FakeNotoriety::at(60)),
            Err(BribeRefusal::TooNotorious {
                notoriety: 60,
                ceiling: 60
            })
        );

        let mut idle = PursuitEngine::new(PursuitConfig::default());
        assert_eq!(
            idle.attempt_bribe(AgentId(7), &roster, &mut wallet, &FakeNotoriety::default()),
            Err(BribeRefusal::NotWanted)
        );
    }

    #[test]
    fn bribe_to_zero_clears_the_pursuit() {
        let (mut engine, _) = wanted_at(1);
        let roster = pcso_roster();
        let mut wallet = FakeWallet::with_balance(8);
        engine.state.leg_it_los_break_timer = 5.0;

        let receipt = engine
            .attempt_bribe(AgentId(7), &roster, &mut wallet, &FakeNotoriety::default())
            .unwrap();

        assert_eq!(receipt.level, AlertLevel::ZERO);
        assert!(!engine.state().in_pursuit());
        assert_eq!(engine.state().leg_it_los_break_timer(), 0.0);
        assert_eq!(wallet.balance, 0);
    }

    #[test]
    fn refusal_codes_are_stable() {
        assert_eq!(
            DisguiseRefusal::AlreadyUsed.error_code(),
            "DISGUISE_ALREADY_USED"
        );
        let short = BribeRefusal::InsufficientFunds {
            cost: 24,
            balance: 20,
        };
        assert_eq!(short.error_code(), "BRIBE_INSUFFICIENT_FUNDS");
        assert_eq!(short.to_string(), "the price is 24 and you have 20");
    }
}
