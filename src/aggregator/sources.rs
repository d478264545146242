// Per-source fan-out: one request per team, all in flight together, first failure fails the batch.
use crate::analyzer::{average_match_score, classify_skills, rank_stats, tally_awards};
use crate::config::AppConfig;
use crate::model::{
    AggregateError, AwardEntry, AwardsRecord, MatchEntry, MatchScoreRecord, RankRecord,
    RankingEntry, SkillEntry, SkillsRecord, SourceKind,
};
use crate::scraper::{fetch_result, StatsClient};

use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use tracing::info;

/// URL templates for the stats API.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
    season: String,
}

impl Endpoints {
    pub fn new(base_url: &str, season: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            season: season.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.api_base_url, &config.season)
    }

    pub fn skills(&self, team: &str) -> String {
        format!(
            "{}/get_skills?season_rank=true&team={}&season={}",
            self.base_url, team, self.season
        )
    }

    pub fn matches(&self, team: &str) -> String {
        format!(
            "{}/get_matches?team={}&season={}&round=2",
            self.base_url, team, self.season
        )
    }

    pub fn rankings(&self, team: &str) -> String {
        format!(
            "{}/get_rankings?season={}&team={}",
            self.base_url, self.season, team
        )
    }

    pub fn awards(&self, team: &str) -> String {
        format!(
            "{}/get_awards?season={}&team={}",
            self.base_url, self.season, team
        )
    }
}

async fn fan_out<C, T, R, U, F>(
    client: &C,
    teams: &[String],
    kind: SourceKind,
    url: U,
    reshape: F,
) -> Result<Vec<R>, AggregateError>
where
    C: StatsClient + ?Sized,
    T: DeserializeOwned,
    U: Fn(&str) -> String,
    F: Fn(&str, &[T]) -> R,
{
    let url = &url;
    let reshape = &reshape;

    let records = try_join_all(teams.iter().map(|team| async move {
        let entries = fetch_result::<T, C>(client, &url(team.as_str()))
            .await
            .map_err(|source| AggregateError::Source {
                kind,
                team: team.clone(),
                source,
            })?;
        Ok::<_, AggregateError>(reshape(team.as_str(), entries.as_slice()))
    }))
    .await?;

    info!(source = %kind, teams = records.len(), "source fetched");
    Ok(records)
}

pub async fn fetch_skills<C>(
    client: &C,
    endpoints: &Endpoints,
    teams: &[String],
) -> Result<Vec<SkillsRecord>, AggregateError>
where
    C: StatsClient + ?Sized,
{
    fan_out(
        client,
        teams,
        SourceKind::Skills,
        |team| endpoints.skills(team),
        |team: &str, entries: &[SkillEntry]| classify_skills(team, entries),
    )
    .await
}

pub async fn fetch_match_scores<C>(
    client: &C,
    endpoints: &Endpoints,
    teams: &[String],
) -> Result<Vec<MatchScoreRecord>, AggregateError>
where
    C: StatsClient + ?Sized,
{
    fan_out(
        client,
        teams,
        SourceKind::MatchScore,
        |team| endpoints.matches(team),
        |team: &str, matches: &[MatchEntry]| MatchScoreRecord {
            team: team.to_string(),
            avg_score: average_match_score(team, matches),
        },
    )
    .await
}

pub async fn fetch_ranks<C>(
    client: &C,
    endpoints: &Endpoints,
    teams: &[String],
) -> Result<Vec<RankRecord>, AggregateError>
where
    C: StatsClient + ?Sized,
{
    fan_out(
        client,
        teams,
        SourceKind::Ranks,
        |team| endpoints.rankings(team),
        |team: &str, events: &[RankingEntry]| rank_stats(team, events),
    )
    .await
}

pub async fn fetch_awards<C>(
    client: &C,
    endpoints: &Endpoints,
    teams: &[String],
) -> Result<Vec<AwardsRecord>, AggregateError>
where
    C: StatsClient + ?Sized,
{
    fan_out(
        client,
        teams,
        SourceKind::Awards,
        |team| endpoints.awards(team),
        |team: &str, awards: &[AwardEntry]| tally_awards(team, awards),
    )
    .await
}
