use std::cmp::Ordering;

use cantus_core::interval::{self, direction, is_consonant, is_perfect, vertical_class};
use cantus_core::pitch;
use cantus_core::types::{RuleId, Severity};

use crate::evaluators::LintContext;
use crate::types::Finding;

/// Check `verticalConsonance`: every shared measure must sound a consonance.
pub fn check_vertical_consonance(ctx: &LintContext<'_>, severity: Severity) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (i, cf, cpt) in ctx.pairs() {
        let class = vertical_class(cf.pitch, cpt.pitch);
        if is_consonant(class) {
            continue;
        }
        findings.push(Finding::at(
            RuleId::VerticalConsonance,
            severity,
            i,
            format!(
                "Dissonant {} between {} and {}",
                interval::name(class),
                pitch::name(cf.pitch),
                pitch::name(cpt.pitch)
            ),
        ));
    }
    findings
}

/// Check `perfectStartAndEnd`: the first and last shared measures must sound
/// a unison, fifth, or octave. A single shared measure is both first and last
/// and yields at most one finding.
pub fn check_perfect_start_and_end(ctx: &LintContext<'_>, severity: Severity) -> Vec<Finding> {
    let n = ctx.shared_len();
    if n == 0 {
        return Vec::new();
    }

    let mut positions = vec![(0, "Opening")];
    if n > 1 {
        positions.push((n - 1, "Final"));
    }

    let mut findings = Vec::new();
    for (i, label) in positions {
        let class = vertical_class(ctx.cantus[i].pitch, ctx.counterpoint[i].pitch);
        if is_perfect(class) {
            continue;
        }
        findings.push(Finding::at(
            RuleId::PerfectStartAndEnd,
            severity,
            i,
            format!(
                "{label} interval is a {}; use a unison, fifth, or octave",
                interval::name(class)
            ),
        ));
    }
    findings
}

/// Check `noParallelPerfects`: two perfect intervals in a row reached by both
/// voices moving the same way. Each transition is judged on its own, so a run
/// of three parallel fifths yields two findings. Similar motion into a perfect
/// interval from an imperfect one is not flagged here.
pub fn check_no_parallel_perfects(ctx: &LintContext<'_>, severity: Severity) -> Vec<Finding> {
    let n = ctx.shared_len();
    let mut findings = Vec::new();

    for i in 1..n {
        let (prev_cf, cf) = (ctx.cantus[i - 1].pitch, ctx.cantus[i].pitch);
        let (prev_cpt, cpt) = (ctx.counterpoint[i - 1].pitch, ctx.counterpoint[i].pitch);

        let prev_class = vertical_class(prev_cf, prev_cpt);
        let class = vertical_class(cf, cpt);
        if !is_perfect(prev_class) || !is_perfect(class) {
            continue;
        }

        let motion = direction(prev_cf, cf);
        if motion == Ordering::Equal || motion != direction(prev_cpt, cpt) {
            continue;
        }

        let way = if motion == Ordering::Greater { "up" } else { "down" };
        findings.push(Finding::at(
            RuleId::NoParallelPerfects,
            severity,
            i,
            format!(
                "Parallel perfect intervals: {} to {} with both voices moving {way}",
                interval::name(prev_class),
                interval::name(class)
            ),
        ));
    }
    findings
}
