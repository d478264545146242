// Aggregator module: runs every stats source for the scraped teams and merges the results.

pub mod merge;
pub mod sources;

pub use merge::merge_records;
pub use sources::Endpoints;

use crate::config::AppConfig;
use crate::model::{AggregateError, MergedRecord};
use crate::scraper::StatsClient;
use merge::to_record;
use sources::{fetch_awards, fetch_match_scores, fetch_ranks, fetch_skills};

pub struct Aggregator {
    endpoints: Endpoints,
    concurrent: bool,
}

impl Aggregator {
    pub fn new(endpoints: Endpoints, concurrent: bool) -> Self {
        Self {
            endpoints,
            concurrent,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Endpoints::from_config(config), config.concurrent_sources)
    }

    /// Produces one merged record per team, in the order given.
    pub async fn aggregate<C>(
        &self,
        client: &C,
        teams: &[String],
    ) -> Result<Vec<MergedRecord>, AggregateError>
    where
        C: StatsClient + ?Sized,
    {
        let endpoints = &self.endpoints;

        let (skills, ranks, scores, awards) = if self.concurrent {
            tokio::try_join!(
                fetch_skills(client, endpoints, teams),
                fetch_ranks(client, endpoints, teams),
                fetch_match_scores(client, endpoints, teams),
                fetch_awards(client, endpoints, teams),
            )?
        } else {
            (
                fetch_skills(client, endpoints, teams).await?,
                fetch_ranks(client, endpoints, teams).await?,
                fetch_match_scores(client, endpoints, teams).await?,
                fetch_awards(client, endpoints, teams).await?,
            )
        };

        let mut stats = Vec::with_capacity(teams.len() * 4);
        for record in &skills {
            stats.push(to_record(record)?);
        }
        for record in &ranks {
            stats.push(to_record(record)?);
        }
        for record in &scores {
            stats.push(to_record(record)?);
        }
        for record in &awards {
            stats.push(to_record(record)?);
        }

        Ok(merge_records(teams, &stats))
    }
}
