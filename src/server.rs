// HTTP surface: GET /api
use crate::aggregator::Aggregator;
use crate::model::{AppError, MergedRecord};
use crate::parser::{Parser, TeamListParser};
use crate::scraper::StatsClient;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

pub struct AppState {
    pub client: Arc<dyn StatsClient>,
    pub parser: TeamListParser,
    pub aggregator: Aggregator,
    pub teams_page_url: String,
}

impl AppState {
    /// Scrapes the team list, then collects and merges every team's stats.
    pub async fn collect(&self) -> Result<Vec<MergedRecord>, AppError> {
        let html = self.client.get_text(&self.teams_page_url).await?;
        let teams = self.parser.parse(&html)?;
        info!(teams = teams.len(), "team list scraped");

        let records = self.aggregator.aggregate(self.client.as_ref(), &teams).await?;
        Ok(records)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "failed to collect team stats").into_response()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api", get(team_stats))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

async fn team_stats(State(state): State<Arc<AppState>>) -> Result<Json<Vec<MergedRecord>>, AppError> {
    info!("GET /api");
    let started = Instant::now();
    let records = state.collect().await?;
    info!(
        records = records.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "team stats served"
    );
    Ok(Json(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::tests::{stub_for_two_teams, BASE};
    use crate::aggregator::Endpoints;
    use crate::scraper::stub::StubClient;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    const PAGE: &str = "http://events.test/RE-VRC-18-6082.html";
    const HTML: &str = r#"<table id="data-table"><tbody>
        <tr><td>100A</td><td>Alpha</td></tr>
        <tr><td>200B</td><td>Bravo</td></tr>
        </tbody></table>"#;

    fn state(client: StubClient) -> Arc<AppState> {
        Arc::new(AppState {
            client: Arc::new(client),
            parser: TeamListParser::new("#data-table > tbody > tr > td:first-of-type").unwrap(),
            aggregator: Aggregator::new(Endpoints::new(BASE, "current"), true),
            teams_page_url: PAGE.to_string(),
        })
    }

    fn get_api() -> Request<Body> {
        Request::builder()
            .uri("/api")
            .header(header::ORIGIN, "http://elsewhere.test")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn serves_merged_records_in_page_order() {
        let endpoints = Endpoints::new(BASE, "current");
        let client = stub_for_two_teams(&endpoints).with(PAGE, HTML);

        let response = router(state(client)).oneshot(get_api()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let records: Vec<Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["team"], "100A");
        assert_eq!(records[0]["awardChamp"], 1);
        assert_eq!(records[1]["team"], "200B");
        assert_eq!(records[1]["avgScore"], Value::Null);
    }

    #[tokio::test]
    async fn unreachable_page_is_a_server_error() {
        let endpoints = Endpoints::new(BASE, "current");
        let client = stub_for_two_teams(&endpoints);

        let response = router(state(client)).oneshot(get_api()).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn failing_source_is_a_server_error() {
        let html = r#"<table id="data-table"><tr><td>100A</td></tr><tr><td>300C</td></tr></table>"#;
        let endpoints = Endpoints::new(BASE, "current");
        let client = stub_for_two_teams(&endpoints).with(PAGE, html);

        let response = router(state(client)).oneshot(get_api()).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn empty_page_serves_empty_list() {
        let client = StubClient::new().with(PAGE, "<html><body></body></html>");

        let response = router(state(client)).oneshot(get_api()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"[]");
    }
}
