//! Common infrastructure for tactic refusals.
//!
//! Nothing in the engine fails in the exceptional sense: a tactic whose
//! preconditions are not met simply reports why. Each refusal type lives next
//! to the tactic it describes and implements [`Refusal`] so callers can key UI
//! strings or telemetry off a stable code instead of the display text.

/// Common trait for all tactic refusals.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` so `Display` is the player-facing line
/// - Codes are stable identifiers and must not change once shipped
pub trait Refusal: core::fmt::Display + core::fmt::Debug {
    /// Returns a static string identifier for this refusal variant.
    fn error_code(&self) -> &'static str;
}
