use cantus_core::key::KeySignature;
use cantus_core::types::{Note, RuleId, Severity};

use crate::types::Finding;
use crate::{cadence, harmonic, melodic, voices};

/// Inputs shared by every evaluator for one lint run.
#[derive(Debug, Clone, Copy)]
pub struct LintContext<'a> {
    pub cantus: &'a [Note],
    pub counterpoint: &'a [Note],
    pub key: KeySignature,
    pub cantus_is_upper: bool,
}

impl<'a> LintContext<'a> {
    pub fn new(cantus: &'a [Note], counterpoint: &'a [Note], key: KeySignature) -> Self {
        Self {
            cantus,
            counterpoint,
            key,
            cantus_is_upper: false,
        }
    }

    pub fn with_cantus_upper(mut self, cantus_is_upper: bool) -> Self {
        self.cantus_is_upper = cantus_is_upper;
        self
    }

    /// Number of measures where both voices have a note.
    pub fn shared_len(&self) -> usize {
        self.cantus.len().min(self.counterpoint.len())
    }

    /// `(index, cantus note, counterpoint note)` for every shared measure.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, &'a Note, &'a Note)> + 'a {
        let (cantus, counterpoint) = (self.cantus, self.counterpoint);
        cantus
            .iter()
            .zip(counterpoint.iter())
            .enumerate()
            .map(|(i, (cf, cpt))| (i, cf, cpt))
    }
}

/// Signature shared by all rule evaluators.
pub type Evaluator = fn(&LintContext<'_>, Severity) -> Vec<Finding>;

/// The evaluator implementing `id`.
pub fn evaluator_for(id: RuleId) -> Evaluator {
    match id {
        RuleId::EqualLength => voices::check_equal_length,
        RuleId::WholeNotesOnly => voices::check_whole_notes_only,
        RuleId::NoVoiceCrossing => voices::check_no_voice_crossing,
        RuleId::VerticalConsonance => harmonic::check_vertical_consonance,
        RuleId::PerfectStartAndEnd => harmonic::check_perfect_start_and_end,
        RuleId::NoParallelPerfects => harmonic::check_no_parallel_perfects,
        RuleId::NoRepeatedNotesCf => melodic::check_no_repeated_notes_cf,
        RuleId::OneRepeatedNoteCpt => melodic::check_one_repeated_note_cpt,
        RuleId::UniqueClimax => melodic::check_unique_climax,
        RuleId::CadenceCf => cadence::check_cadence_cf,
        RuleId::CadenceCpt => cadence::check_cadence_cpt,
    }
}

pub fn evaluate(id: RuleId, ctx: &LintContext<'_>, severity: Severity) -> Vec<Finding> {
    evaluator_for(id)(ctx, severity)
}
