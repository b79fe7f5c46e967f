use std::cmp::Ordering;

use crate::record::StudentRecord;
use crate::scoring::CompetencyScorer;
use crate::types::outcome::RankedStudent;

/// Score every student and assign 1-based ranks, best score first.
///
/// The sort is stable: students with equal scores keep their relative order
/// from the input slice, so ranks are reproducible across runs. Non-finite
/// scores (NaN or infinities from a malformed `coding_score`) sort after all
/// finite entries, in input order — a documented degraded ordering rather
/// than an undefined one.
pub fn rank(students: &[StudentRecord], scorer: &impl CompetencyScorer) -> Vec<RankedStudent> {
    let mut ranked: Vec<RankedStudent> = students
        .iter()
        .map(|student| {
            let breakdown = scorer.breakdown(&student.counters);
            let score = scorer.score_value(&breakdown);
            RankedStudent {
                rank: 0, // assigned after sorting
                score,
                breakdown,
                student: student.clone(),
            }
        })
        .collect();

    // Vec::sort_by is stable, which carries the tie-break rule.
    ranked.sort_by(|a, b| cmp_scores_desc(a.score, b.score));

    for (position, entry) in ranked.iter_mut().enumerate() {
        entry.rank = position + 1;
    }

    debug_assert!(ranked
        .windows(2)
        .all(|w| cmp_scores_desc(w[0].score, w[1].score) != Ordering::Greater));

    ranked
}

/// Leaderboard head: `rank` truncated to the top `n` entries.
pub fn top_students(
    students: &[StudentRecord],
    scorer: &impl CompetencyScorer,
    n: usize,
) -> Vec<RankedStudent> {
    let mut ranked = rank(students, scorer);
    ranked.truncate(n);
    ranked
}

/// Descending by score, finite entries strictly before non-finite ones.
/// Non-finite entries compare equal among themselves so a stable sort leaves
/// them in input order.
fn cmp_scores_desc(a: f64, b: f64) -> Ordering {
    match (a.is_finite(), b.is_finite()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
        (true, true) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
