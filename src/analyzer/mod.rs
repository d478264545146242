// Analyzer module: reshapes raw endpoint results into per-team records, one submodule per source.

pub mod awards;
pub mod match_score;
pub mod rankings;
pub mod skills;

pub use awards::tally_awards;
pub use match_score::average_match_score;
pub use rankings::rank_stats;
pub use skills::classify_skills;
