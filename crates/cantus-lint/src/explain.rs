//! Fixed prose describing what each rule checks, for `cantus explain`.

use cantus_core::types::RuleId;

/// `"note"` for rules that point at measures, `"line"` for whole-line rules.
pub fn scope(id: RuleId) -> &'static str {
    match id {
        RuleId::EqualLength | RuleId::UniqueClimax => "line",
        _ => "note",
    }
}

pub fn details(id: RuleId) -> &'static str {
    match id {
        RuleId::EqualLength => {
            "Both voices must contain the same number of notes. Reported once for the whole \
             excerpt; the other rules compare only the measures both voices share."
        }
        RuleId::WholeNotesOnly => {
            "First species sets one whole note against one whole note. Any other duration is \
             reported at its position, cantus firmus first, then counterpoint."
        }
        RuleId::NoVoiceCrossing => {
            "The voice on the lower staff must sound strictly below the voice on the upper \
             staff in every shared measure. A unison counts as a crossing."
        }
        RuleId::VerticalConsonance => {
            "Every simultaneous interval, reduced to within an octave, must be a unison/octave, \
             third, fifth, or sixth. Seconds, fourths, tritones, and sevenths are reported."
        }
        RuleId::PerfectStartAndEnd => {
            "The first and last shared measures must form a unison, fifth, or octave."
        }
        RuleId::NoParallelPerfects => {
            "Two perfect intervals in a row are reported when both voices move in the same \
             direction between them. Every such transition is reported, so three parallel \
             fifths give two findings. Similar motion into a perfect interval from a third or \
             sixth is not reported."
        }
        RuleId::NoRepeatedNotesCf => {
            "The cantus firmus never repeats a pitch in adjacent measures. The second note of \
             each repeated pair is reported."
        }
        RuleId::OneRepeatedNoteCpt => {
            "The counterpoint may repeat a pitch in adjacent measures once. Every further \
             repeat is reported at its second note."
        }
        RuleId::UniqueClimax => {
            "The highest pitch of each voice must occur exactly once. Reported per voice for \
             the whole line."
        }
        RuleId::CadenceCf => {
            "The cantus firmus closes on scale degree 2 stepping down to scale degree 1 of the \
             key. Both the degrees and the downward motion are required; the finding points \
             at the last note."
        }
        RuleId::CadenceCpt => {
            "The counterpoint closes on scale degree 7 rising to scale degree 1 of the key. \
             Both the degrees and the upward motion are required; the finding points at the \
             last note."
        }
    }
}
