//! Terminal consequence of being caught.

use super::PursuitEngine;
use crate::env::{CriminalRecord, MilestoneSink, Notoriety, RecordCategory, Wallet};

impl PursuitEngine {
    /// Settles an arrest and ends the pursuit.
    ///
    /// The fine is taken from whatever the player can pay; a short wallet is
    /// emptied rather than refused. Returns the amount actually taken.
    pub fn resolve_arrest(
        &mut self,
        wallet: &mut dyn Wallet,
        record: &mut dyn CriminalRecord,
        notoriety: &mut dyn Notoriety,
        milestones: &mut dyn MilestoneSink,
    ) -> u32 {
        let fine = self
            .config
            .fine_per_star
            .saturating_mul(self.state.alert_level.stars() as u32);
        let deducted = fine.min(wallet.balance());
        if !wallet.debit(deducted) {
            tracing::warn!(deducted, "wallet refused arrest fine");
        }

        record.record(RecordCategory::Arrest);
        notoriety.add(self.config.arrest_notoriety, milestones);
        tracing::info!(level = %self.state.alert_level, fine, deducted, "arrested");
        self.clear_pursuit();

        deducted
    }
}

#[cfg(test)]
mod tests {
    use crate::config::PursuitConfig;
    use crate::engine::PursuitEngine;
    use crate::env::RecordCategory;
    use crate::state::{AlertLevel, PursuitState, Vec3};
    use crate::test_support::{
        Awards, FakeAmbient, FakeNotoriety, FakeRecord, FakeRoster, FakeWallet, tick,
    };

    #[test]
    fn arrest_fines_per_star_and_clears() {
        let mut engine = PursuitEngine::new(PursuitConfig::default());
        let mut awards = Awards::default();
        engine.add_level_directly(3, Vec3::ORIGIN, &mut awards);
        let mut wallet = FakeWallet::with_balance(100);
        let mut record = FakeRecord::default();
        let mut notoriety = FakeNotoriety::default();

        let taken = engine.resolve_arrest(&mut wallet, &mut record, &mut notoriety, &mut awards);

        assert_eq!(taken, 60);
        assert_eq!(wallet.balance, 40);
        assert_eq!(record.entries, vec![RecordCategory::Arrest]);
        assert_eq!(notoriety.value, 5);
        assert_eq!(engine.state().alert_level(), AlertLevel::ZERO);
    }

    #[test]
    fn short_wallet_is_emptied_not_refused() {
        let mut engine = PursuitEngine::new(PursuitConfig::default());
        let mut awards = Awards::default();
        engine.add_level_directly(5, Vec3::ORIGIN, &mut awards);
        let mut wallet = FakeWallet::with_balance(35);

        let taken = engine.resolve_arrest(
            &mut wallet,
            &mut FakeRecord::default(),
            &mut FakeNotoriety::default(),
            &mut awards,
        );

        assert_eq!(taken, 35);
        assert_eq!(wallet.balance, 0);
    }

    #[test]
    fn arrest_resets_every_episode_latch() {
        let mut engine = PursuitEngine::new(PursuitConfig::default());
        let mut awards = Awards::default();
        let mut roster = FakeRoster::default();
        let ambient = FakeAmbient::default();
        engine.add_level_directly(2, Vec3::ORIGIN, &mut awards);
        engine.enter_safe_house();
        tick(
            &mut engine,
            5.0,
            Vec3::new(30.0, 0.0, 0.0),
            &mut roster,
            &ambient,
            &mut awards,
        );
        engine.state.disguise_used_this_pursuit = true;
        engine.state.search_phase_active = true;

        engine.resolve_arrest(
            &mut FakeWallet::with_balance(0),
            &mut FakeRecord::default(),
            &mut FakeNotoriety::default(),
            &mut awards,
        );

        let fresh = PursuitState {
            effective_radius: engine.state().effective_radius(),
            milestones: engine.state().milestones(),
            ..PursuitState::new()
        };
        assert_eq!(engine.state(), &fresh);
    }

    #[test]
    fn arrest_with_no_pursuit_still_books_the_player() {
        let mut engine = PursuitEngine::new(PursuitConfig::default());
        let mut wallet = FakeWallet::with_balance(10);
        let mut record = FakeRecord::default();

        let taken = engine.resolve_arrest(
            &mut wallet,
            &mut record,
            &mut FakeNotoriety::default(),
            &mut Awards::default(),
        );

        assert_eq!(taken, 0);
        assert_eq!(wallet.balance, 10);
        assert_eq!(record.entries.len(), 1);
    }

    #[test]
    fn idle_arrest_leaves_the_refuge_flag_alone() {
        let mut engine = PursuitEngine::new(PursuitConfig::default());
        engine.enter_safe_house();

        engine.resolve_arrest(
            &mut FakeWallet::with_balance(10),
            &mut FakeRecord::default(),
            &mut FakeNotoriety::default(),
            &mut Awards::default(),
        );

        assert!(engine.state().is_in_safe_house());
    }
}
