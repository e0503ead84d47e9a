//! Fire-and-forget milestone notifications.

/// Named one-shot events.
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
pub enum Milestone {
    /// Reached the maximum alert level.
    MostWanted,
    /// Let a pursuit decay all the way to zero.
    CleanGetaway,
    /// Shook off a pursuit by distance and staying out of sight.
    LegIt,
    /// Established a corrupt contact.
    InsideMan,
    /// Crossed a notoriety threshold. Raised by notoriety collaborators.
    Notorious,
}

/// Receives milestone notifications.
///
/// Closures work directly; a runtime can also forward into a channel.
pub trait MilestoneSink {
    fn award(&mut self, milestone: Milestone);
}

impl<F> MilestoneSink for F
where
    F: FnMut(Milestone),
{
    fn award(&mut self, milestone: Milestone) {
        self(milestone)
    }
}
