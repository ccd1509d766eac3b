// Cadence rules.
//
// The cantus closes 2-1 stepping down, the counterpoint 7-1 stepping up.
// Both the scale degrees and the melodic direction must be right: C5 to C4
// in C major has the right final pitch class but not the cadence.

use std::cmp::Ordering;

use cantus_core::interval::direction;
use cantus_core::key::KeySignature;
use cantus_core::pitch;
use cantus_core::types::{Note, Pitch, RuleId, Severity};

use crate::evaluators::LintContext;
use crate::types::Finding;

struct CadenceShape {
    rule: RuleId,
    label: &'static str,
    penultimate_degree: u8,
    motion: Ordering,
}

const CANTUS_CADENCE: CadenceShape = CadenceShape {
    rule: RuleId::CadenceCf,
    label: "Cantus firmus",
    penultimate_degree: 2,
    motion: Ordering::Less,
};

const COUNTERPOINT_CADENCE: CadenceShape = CadenceShape {
    rule: RuleId::CadenceCpt,
    label: "Counterpoint",
    penultimate_degree: 7,
    motion: Ordering::Greater,
};

/// Check `cadenceCF`: the cantus ends on degree 2 descending to degree 1.
pub fn check_cadence_cf(ctx: &LintContext<'_>, severity: Severity) -> Vec<Finding> {
    check_cadence(&CANTUS_CADENCE, ctx.cantus, ctx.key, severity)
}

/// Check `cadenceCPT`: the counterpoint ends on degree 7 ascending to degree 1.
pub fn check_cadence_cpt(ctx: &LintContext<'_>, severity: Severity) -> Vec<Finding> {
    check_cadence(&COUNTERPOINT_CADENCE, ctx.counterpoint, ctx.key, severity)
}

fn check_cadence(
    shape: &CadenceShape,
    notes: &[Note],
    key: KeySignature,
    severity: Severity,
) -> Vec<Finding> {
    let [.., prev, last] = notes else {
        return Vec::new();
    };

    let expected_prev = key.degree_pitch_class(shape.penultimate_degree);
    let expected_last = key.degree_pitch_class(1);
    let degrees_ok =
        Some(prev.pitch_class()) == expected_prev && Some(last.pitch_class()) == expected_last;
    if degrees_ok && direction(prev.pitch, last.pitch) == shape.motion {
        return Vec::new();
    }

    let way = if shape.motion == Ordering::Less { "descending" } else { "ascending" };
    vec![Finding::at(
        shape.rule,
        severity,
        notes.len() - 1,
        format!(
            "{} should close on scale degrees {}-1 of {key} {way}; found {} to {}",
            shape.label,
            shape.penultimate_degree,
            describe(prev.pitch, key),
            describe(last.pitch, key)
        ),
    )]
}

fn describe(p: Pitch, key: KeySignature) -> String {
    match key.degree_of(p) {
        Some(degree) => format!("{} (degree {degree})", pitch::name(p)),
        None => format!("{} (chromatic)", pitch::name(p)),
    }
}
