//! Economic collaborators: currency, notoriety and the criminal record.

use super::MilestoneSink;

/// The player's spendable currency.
pub trait Wallet {
    fn balance(&self) -> u32;

    /// Removes `amount` from the balance.
    ///
    /// Returns false and leaves the balance untouched if funds are short.
    fn debit(&mut self, amount: u32) -> bool;

    fn credit(&mut self, amount: u32);
}

/// Long-lived reputation with the authorities.
pub trait Notoriety {
    fn value(&self) -> u32;

    /// Raises notoriety. Implementations may award milestones through `sink`
    /// when a threshold is crossed.
    fn add(&mut self, delta: u32, sink: &mut dyn MilestoneSink);
}

/// Kind of entry appended to the criminal record.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RecordCategory {
    Arrest,
    Assault,
    Theft,
    Vandalism,
    Bribery,
}

/// Append-only ledger of the player's offences.
pub trait CriminalRecord {
    fn record(&mut self, category: RecordCategory);
}
