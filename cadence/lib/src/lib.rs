//! Cadence
//!
//! A prosody-aware formatter that rewrites rich assistant-generated
//! text (markdown, punctuation-heavy prose) into plain text tuned for
//! speech-synthesis backends that pause too long on a full stop but
//! render exclamation and question inflection well.
//!
//! ## Features
//!
//! - **Markdown stripping**: emphasis, headings, and double quotes
//!   reduce to speakable prose; apostrophes are left alone
//! - **Softening levels**: `OFF`/`LOW`/`MED`/`HIGH` control how many
//!   sentence-final periods demote to commas or semicolons
//! - **Protected spans**: abbreviations (`Dr.`) and decimals (`94.5`)
//!   never split as sentence boundaries
//! - **Pure and deterministic**: one string in, one string out, no
//!   I/O, safe to call concurrently
//!
//! ## Quick Start
//!
//! ```
//! use cadence_lib::{format_for_speech, format_with_level, SofteningLevel};
//!
//! // Default level (MED)
//! assert_eq!(format_for_speech("It is a **great** wine"), "It's a great wine");
//!
//! // Explicit level
//! assert_eq!(
//!     format_with_level("Done. And now more.", SofteningLevel::Med),
//!     "Done, And now more."
//! );
//! ```
//!
//! ## Module Structure
//!
//! - [`types`] - The [`SofteningLevel`] enum
//! - [`formatter`] - The pipeline and the [`SpeechFormatter`] entry point
//! - `markdown`, `punctuation`, `softening`, `contractions`, `cleanup` -
//!   the individual phases, in pipeline order

pub mod formatter;
pub mod types;

mod cleanup;
mod contractions;
mod markdown;
mod punctuation;
mod softening;

// Re-export the public surface at the crate root for convenience
pub use formatter::{SpeechFormatter, format_for_speech, format_with_level};
pub use types::SofteningLevel;
