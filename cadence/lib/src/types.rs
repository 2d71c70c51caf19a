//! Core types for the cadence speech-formatting pipeline.
//!
//! This module defines the softening level enum that drives the
//! level-aware phases of the formatter (newline flattening and
//! full-stop softening).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

// ============================================================================
// Softening Level
// ============================================================================

/// How aggressively sentence-final periods are weakened to commas or
/// semicolons.
///
/// Speech engines tend to insert an unnaturally long pause after a full
/// stop, while rendering comma and semicolon breaks at a natural length.
/// The softening level controls how many sentence boundaries are demoted
/// to those weaker breaks. Exclamation and question marks are never
/// demoted at any level since their inflection renders well.
///
/// Levels are ordered: `Off < Low < Med < High`.
///
/// The wire form is uppercase (`"OFF"`, `"LOW"`, `"MED"`, `"HIGH"`), and
/// parsing via [`FromStr`](std::str::FromStr) is case-insensitive.
///
/// ## Examples
///
/// ```
/// use cadence_lib::SofteningLevel;
///
/// assert_eq!(SofteningLevel::default(), SofteningLevel::Med);
/// assert!(SofteningLevel::Low < SofteningLevel::High);
/// assert_eq!("high".parse::<SofteningLevel>(), Ok(SofteningLevel::High));
/// assert_eq!(SofteningLevel::Off.to_string(), "OFF");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum SofteningLevel {
    /// No softening: periods pass through unchanged.
    Off,
    /// Conservative: only connector-led sentences are softened.
    Low,
    /// Balanced softening based on sentence length (the default).
    #[default]
    Med,
    /// Aggressive softening, with a cadence rule that forces a hard stop
    /// after three consecutive soft breaks.
    High,
}
