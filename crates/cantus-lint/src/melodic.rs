use cantus_core::pitch;
use cantus_core::types::{Note, RuleId, Severity};

use crate::evaluators::LintContext;
use crate::types::Finding;

/// Indices `i` where `notes[i]` repeats the pitch of `notes[i - 1]`.
fn repeat_indices(notes: &[Note]) -> impl Iterator<Item = usize> + '_ {
    notes
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0].pitch == pair[1].pitch)
        .map(|(i, _)| i + 1)
}

/// Check `noRepeatedNotesCF`: adjacent cantus notes must differ in pitch.
pub fn check_no_repeated_notes_cf(ctx: &LintContext<'_>, severity: Severity) -> Vec<Finding> {
    repeat_indices(ctx.cantus)
        .map(|i| {
            Finding::at(
                RuleId::NoRepeatedNotesCf,
                severity,
                i,
                format!("Cantus firmus repeats {}", pitch::name(ctx.cantus[i].pitch)),
            )
        })
        .collect()
}

/// Check `oneRepeatedNoteCPT`: the counterpoint gets one repeated note; every
/// repeat after the first is flagged.
pub fn check_one_repeated_note_cpt(ctx: &LintContext<'_>, severity: Severity) -> Vec<Finding> {
    repeat_indices(ctx.counterpoint)
        .skip(1)
        .map(|i| {
            Finding::at(
                RuleId::OneRepeatedNoteCpt,
                severity,
                i,
                format!(
                    "Counterpoint repeats {}; only one repeated note is allowed",
                    pitch::name(ctx.counterpoint[i].pitch)
                ),
            )
        })
        .collect()
}

/// Check `uniqueClimax`: each voice's highest pitch must occur exactly once.
/// Cantus first, then counterpoint; both are whole-line findings.
pub fn check_unique_climax(ctx: &LintContext<'_>, severity: Severity) -> Vec<Finding> {
    let voices: [(&str, &[Note]); 2] = [
        ("Cantus firmus", ctx.cantus),
        ("Counterpoint", ctx.counterpoint),
    ];

    let mut findings = Vec::new();
    for (label, notes) in voices {
        let Some(climax) = notes.iter().map(|n| n.pitch).max() else {
            continue;
        };
        let count = notes.iter().filter(|n| n.pitch == climax).count();
        if count == 1 {
            continue;
        }
        findings.push(Finding::whole_line(
            RuleId::UniqueClimax,
            severity,
            format!(
                "{label} reaches its highest note {} {count} times",
                pitch::name(climax)
            ),
        ));
    }
    findings
}
