//! Wallet, notoriety and criminal record backed by plain counters.
use std::collections::HashMap;

use pursuit_core::{CriminalRecord, Milestone, MilestoneSink, Notoriety, RecordCategory, Wallet};

#[derive(Clone, Copy, Debug, Default)]
pub struct WalletImpl {
    balance: u32,
}

impl WalletImpl {
    pub fn new(balance: u32) -> Self {
        Self { balance }
    }
}

impl Wallet for WalletImpl {
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

/// Notoriety score that announces crossing a threshold once.
#[derive(Clone, Copy, Debug)]
pub struct NotorietyImpl {
    value: u32,
    threshold: u32,
    announced: bool,
}

impl NotorietyImpl {
    pub const DEFAULT_THRESHOLD: u32 = 50;

    pub fn new(value: u32) -> Self {
        Self::with_threshold(value, Self::DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(value: u32, threshold: u32) -> Self {
        Self {
            value,
            threshold,
            announced: value >= threshold,
        }
    }
}

impl Default for NotorietyImpl {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Notoriety for NotorietyImpl {
    fn value(&self) -> u32 {
        self.value
    }

    fn add(&mut self, delta: u32, sink: &mut dyn MilestoneSink) {
        self.value = self.value.saturating_add(delta);
        if !self.announced && self.value >= self.threshold {
            self.announced = true;
            tracing::info!(value = self.value, "notoriety threshold crossed");
            sink.award(Milestone::Notorious);
        }
    }
}

/// Per-category offence counts.
#[derive(Clone, Debug, Default)]
pub struct CriminalRecordImpl {
    counts: HashMap<RecordCategory, u32>,
}

impl CriminalRecordImpl {
    pub fn count(&self, category: RecordCategory) -> u32 {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

impl CriminalRecord for CriminalRecordImpl {
    fn record(&mut self, category: RecordCategory) {
        *self.counts.entry(category).or_default() += 1;
        tracing::debug!(%category, "offence recorded");
    }
}
