// Core structs: upstream entries, per-source records, errors
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Merged per-team object returned by `GET /api`.
pub type MergedRecord = serde_json::Map<String, serde_json::Value>;

/// Envelope shared by every stats endpoint.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillEntry {
    #[serde(rename = "type")]
    pub kind: i64,
    #[serde(default)]
    pub score: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchEntry {
    #[serde(default)]
    pub red1: Option<String>,
    #[serde(default)]
    pub red2: Option<String>,
    pub redscore: i64,
    pub bluescore: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankingEntry {
    #[serde(default)]
    pub opr: Option<f64>,
    #[serde(default)]
    pub dpr: Option<f64>,
    #[serde(default)]
    pub ccwm: Option<f64>,
    #[serde(default)]
    pub max_score: Option<i64>,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub losses: i64,
    #[serde(default)]
    pub ties: i64,
    #[serde(default)]
    pub ap: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AwardEntry {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsRecord {
    pub team: String,
    pub driver_skills: i64,
    pub prog_skills: i64,
    pub total_skills: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScoreRecord {
    pub team: String,
    pub avg_score: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankRecord {
    pub team: String,
    #[serde(rename = "avgOPR")]
    pub avg_opr: f64,
    #[serde(rename = "avgDPR")]
    pub avg_dpr: f64,
    #[serde(rename = "avgCCWM")]
    pub avg_ccwm: f64,
    pub high_score: i64,
    pub wins: i64,
    pub losses: i64,
    pub ties: i64,
    pub win_per: f64,
    pub auto_win_per: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardsRecord {
    pub team: String,
    pub total_awards: u32,
    pub award_champ: u32,
    pub award_skills: u32,
    pub award_excel: u32,
    pub award_design: u32,
    pub award_judge: u32,
}

/// The four upstream stats sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Skills,
    Ranks,
    MatchScore,
    Awards,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SourceKind::Skills => "skills",
            SourceKind::Ranks => "rankings",
            SourceKind::MatchScore => "match score",
            SourceKind::Awards => "awards",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("{url} returned {status}")]
    InvalidResponse { url: String, status: u16 },
    #[error("unexpected body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("invalid selector `{0}`")]
    Selector(String),
}

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("{kind} fetch failed for team {team}: {source}")]
    Source {
        kind: SourceKind,
        team: String,
        #[source]
        source: ScraperError,
    },
    #[error("cannot encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load team page: {0}")]
    TeamPage(#[from] ScraperError),
    #[error("failed to parse team page: {0}")]
    Parse(#[from] ParserError),
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}
