use crate::model::{RankRecord, RankingEntry};

/// Season ranking statistics across every event `team` has been ranked at.
///
/// OPR, DPR and CCWM are averaged over the events that report them. The
/// percentages divide by the total match count and go non-finite when it is zero.
pub fn rank_stats(team: &str, events: &[RankingEntry]) -> RankRecord {
    let wins: i64 = events.iter().map(|e| e.wins).sum();
    let losses: i64 = events.iter().map(|e| e.losses).sum();
    let ties: i64 = events.iter().map(|e| e.ties).sum();
    let ap: i64 = events.iter().map(|e| e.ap).sum();
    let matches = (wins + losses + ties) as f64;

    RankRecord {
        team: team.to_string(),
        avg_opr: average(events.iter().filter_map(|e| e.opr)),
        avg_dpr: average(events.iter().filter_map(|e| e.dpr)),
        avg_ccwm: average(events.iter().filter_map(|e| e.ccwm)),
        high_score: events
            .iter()
            .filter_map(|e| e.max_score)
            .fold(0, i64::max),
        wins,
        losses,
        ties,
        win_per: wins as f64 / matches,
        auto_win_per: ap as f64 / (matches * 4.0),
    }
}

fn average(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    sum / count as f64
}
