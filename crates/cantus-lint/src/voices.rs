use cantus_core::pitch;
use cantus_core::types::{Duration, Note, RuleId, Severity};

use crate::evaluators::LintContext;
use crate::types::Finding;

/// Check `equalLength`: both voices must have the same number of notes.
pub fn check_equal_length(ctx: &LintContext<'_>, severity: Severity) -> Vec<Finding> {
    let (cf, cpt) = (ctx.cantus.len(), ctx.counterpoint.len());
    if cf == cpt {
        return Vec::new();
    }
    vec![Finding::whole_line(
        RuleId::EqualLength,
        severity,
        format!("Cantus firmus has {cf} note(s) but the counterpoint has {cpt}"),
    )]
}

/// Check `wholeNotesOnly`: every note in either voice must be a whole note.
/// Cantus notes are reported before counterpoint notes.
pub fn check_whole_notes_only(ctx: &LintContext<'_>, severity: Severity) -> Vec<Finding> {
    let voices: [(&str, &[Note]); 2] = [
        ("Cantus firmus", ctx.cantus),
        ("Counterpoint", ctx.counterpoint),
    ];

    let mut findings = Vec::new();
    for (label, notes) in voices {
        for (i, note) in notes.iter().enumerate() {
            if note.duration == Duration::Whole {
                continue;
            }
            findings.push(Finding::at(
                RuleId::WholeNotesOnly,
                severity,
                i,
                format!(
                    "{label} note {} is a {} note; first species uses whole notes only",
                    pitch::name(note.pitch),
                    note.duration
                ),
            ));
        }
    }
    findings
}

/// Check `noVoiceCrossing`: the lower-staff voice must sound strictly below
/// the upper-staff voice. The counterpoint is the lower staff when the cantus
/// is on top.
pub fn check_no_voice_crossing(ctx: &LintContext<'_>, severity: Severity) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (i, cf, cpt) in ctx.pairs() {
        let (lower, upper) = if ctx.cantus_is_upper {
            (cpt, cf)
        } else {
            (cf, cpt)
        };
        if lower.pitch < upper.pitch {
            continue;
        }
        findings.push(Finding::at(
            RuleId::NoVoiceCrossing,
            severity,
            i,
            format!(
                "Lower voice {} is not below upper voice {}",
                pitch::name(lower.pitch),
                pitch::name(upper.pitch)
            ),
        ));
    }
    findings
}
