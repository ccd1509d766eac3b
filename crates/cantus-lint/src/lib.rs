//! Rule evaluation engine for cantus.
//!
//! Lints a cantus firmus against its counterpoint and produces findings:
//! - equalLength, wholeNotesOnly, noVoiceCrossing: shape of the two voices
//! - verticalConsonance, perfectStartAndEnd, noParallelPerfects: harmony
//! - noRepeatedNotesCF, oneRepeatedNoteCPT, uniqueClimax: melody
//! - cadenceCF, cadenceCPT: closing scale degrees
//!
//! Every evaluator is a pure function; [`engine::lint`] runs the enabled ones
//! in catalog order.

pub mod cadence;
pub mod engine;
pub mod evaluators;
pub mod explain;
pub mod harmonic;
pub mod melodic;
pub mod types;
pub mod voices;

pub use engine::{lint, LintEngine};
pub use evaluators::LintContext;
pub use types::{Finding, LintResult};
