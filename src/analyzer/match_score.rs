use crate::model::MatchEntry;

/// Mean alliance score for `team` over `matches`.
///
/// The team counts as red when it holds either red slot, otherwise the blue score is taken.
/// No matches gives NaN.
pub fn average_match_score(team: &str, matches: &[MatchEntry]) -> f64 {
    let total: i64 = matches
        .iter()
        .map(|m| {
            if is_red(team, m) {
                m.redscore
            } else {
                m.bluescore
            }
        })
        .sum();
    total as f64 / matches.len() as f64
}

fn is_red(team: &str, m: &MatchEntry) -> bool {
    m.red1.as_deref() == Some(team) || m.red2.as_deref() == Some(team)
}
