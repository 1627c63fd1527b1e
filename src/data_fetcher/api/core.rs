use crate::config::Config;
use crate::constants::provider::PREMIER_LEAGUE_ID;
use crate::data_fetcher::models::{EventRecord, MatchRecord, StandingsResponse};
use crate::error::AppError;
use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch;
use super::urls::{
    build_current_round_url, build_events_url, build_fixture_by_id_url, build_fixtures_url,
    build_standings_url,
};

/// Asks the provider for the label of the round currently being played.
///
/// # Returns
/// * `Ok(String)` - The raw round label, e.g. "Regular Season - 9"
/// * `Err(AppError::NoRoundInformation)` - The provider returned no label
#[instrument(skip(client, config))]
pub async fn fetch_current_round(
    client: &Client,
    config: &Config,
    season: i32,
) -> Result<String, AppError> {
    let url = build_current_round_url(&config.api_base_url, PREMIER_LEAGUE_ID, season)?;
    let rounds: Vec<String> = fetch(client, config, &url).await?;

    let round = rounds
        .into_iter()
        .next()
        .ok_or(AppError::NoRoundInformation)?;
    info!("Current round for season {season}: {round}");
    Ok(round)
}

/// Fetches every fixture of one round in the configured timezone.
#[instrument(skip(client, config))]
pub async fn fetch_fixtures(
    client: &Client,
    config: &Config,
    season: i32,
    round: &str,
) -> Result<Vec<MatchRecord>, AppError> {
    let url = build_fixtures_url(
        &config.api_base_url,
        PREMIER_LEAGUE_ID,
        season,
        round,
        &config.timezone,
    )?;
    let fixtures: Vec<MatchRecord> = fetch(client, config, &url).await?;
    info!("Fetched {} fixtures for '{round}'", fixtures.len());
    Ok(fixtures)
}

/// Fetches a single fixture summary by id.
#[instrument(skip(client, config))]
pub async fn fetch_fixture_by_id(
    client: &Client,
    config: &Config,
    fixture_id: u64,
) -> Result<MatchRecord, AppError> {
    let url = build_fixture_by_id_url(&config.api_base_url, fixture_id)?;
    let fixtures: Vec<MatchRecord> = fetch(client, config, &url).await?;

    fixtures
        .into_iter()
        .next()
        .ok_or(AppError::FixtureNotFound { fixture_id })
}

/// Fetches the live events of a fixture in the provider's emission order.
#[instrument(skip(client, config))]
pub async fn fetch_events(
    client: &Client,
    config: &Config,
    fixture_id: u64,
) -> Result<Vec<EventRecord>, AppError> {
    let url = build_events_url(&config.api_base_url, fixture_id)?;
    let events: Vec<EventRecord> = fetch(client, config, &url).await?;
    info!("Fetched {} events for fixture {fixture_id}", events.len());
    Ok(events)
}

/// Fetches the league table for a season.
#[instrument(skip(client, config))]
pub async fn fetch_standings(
    client: &Client,
    config: &Config,
    season: i32,
) -> Result<Vec<StandingsResponse>, AppError> {
    let url = build_standings_url(&config.api_base_url, PREMIER_LEAGUE_ID, season)?;
    fetch(client, config, &url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::data_fetcher::models::EventKind;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path, query_param},
    };

    fn create_mock_config(base_url: String) -> Config {
        Config {
            api_key: "test-key".to_string(),
            timezone: "Europe/London".to_string(),
            fav_team: Some("WOL".to_string()),
            api_base_url: base_url,
            ..Config::default()
        }
    }

    fn fixture_json(id: u64, home: &str, away: &str, status: &str) -> serde_json::Value {
        json!({
            "fixture": {
                "id": id,
                "date": "2023-10-21T14:00:00+01:00",
                "status": {"long": "", "short": status, "elapsed": 90}
            },
            "teams": {
                "home": {"id": 50, "name": home},
                "away": {"id": 49, "name": away}
            },
            "goals": {"home": 2, "away": 1}
        })
    }

    #[tokio::test]
    async fn test_fetch_current_round_sends_credentials() {
        let mock_server = MockServer::start().await;
        let config = create_mock_config(mock_server.uri());
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/v3/fixtures/rounds"))
            .and(query_param("league", "39"))
            .and(query_param("season", "2023"))
            .and(query_param("current", "true"))
            .and(header("X-RapidAPI-Key", "test-key"))
            .and(header("X-RapidAPI-Host", "api-football-v1.p.rapidapi.com"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"errors": [], "response": ["Regular Season - 9"]})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let round = fetch_current_round(&client, &config, 2023).await.unwrap();
        assert_eq!(round, "Regular Season - 9");
    }

    #[tokio::test]
    async fn test_fetch_current_round_empty_response() {
        let mock_server = MockServer::start().await;
        let config = create_mock_config(mock_server.uri());
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/v3/fixtures/rounds"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"errors": [], "response": []})),
            )
            .mount(&mock_server)
            .await;

        let error = fetch_current_round(&client, &config, 2023).await.unwrap_err();
        assert!(matches!(error, AppError::NoRoundInformation));
    }

    #[tokio::test]
    async fn test_fetch_fixtures_passes_round_and_timezone() {
        let mock_server = MockServer::start().await;
        let config = create_mock_config(mock_server.uri());
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/v3/fixtures"))
            .and(query_param("round", "Regular Season - 9"))
            .and(query_param("timezone", "Europe/London"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errors": [],
                "response": [
                    fixture_json(1, "Manchester City", "Chelsea", "FT"),
                    fixture_json(2, "Chelsea", "Arsenal", "NS")
                ]
            })))
            .mount(&mock_server)
            .await;

        let fixtures = fetch_fixtures(&client, &config, 2023, "Regular Season - 9")
            .await
            .unwrap();
        assert_eq!(fixtures.len(), 2);
        assert_eq!(fixtures[0].teams.home.name, "Manchester City");
        assert_eq!(fixtures[1].fixture.status.short, "NS");
    }

    #[tokio::test]
    async fn test_fetch_fixture_by_id_not_found() {
        let mock_server = MockServer::start().await;
        let config = create_mock_config(mock_server.uri());
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/v3/fixtures"))
            .and(query_param("id", "404040"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"errors": [], "response": []})),
            )
            .mount(&mock_server)
            .await;

        let error = fetch_fixture_by_id(&client, &config, 404040).await.unwrap_err();
        assert!(matches!(error, AppError::FixtureNotFound { fixture_id: 404040 }));
        assert!(error.is_domain_error());
    }

    #[tokio::test]
    async fn test_fetch_events_keeps_provider_order() {
        let mock_server = MockServer::start().await;
        let config = create_mock_config(mock_server.uri());
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/v3/fixtures/events"))
            .and(query_param("fixture", "77"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errors": [],
                "response": [
                    {"time": {"elapsed": 23, "extra": null}, "team": {"id": 42, "name": "Arsenal"},
                     "player": {"id": 1, "name": "Saka"}, "assist": {"id": 2, "name": "Odegaard"},
                     "type": "Goal", "detail": "Normal Goal", "comments": null},
                    {"time": {"elapsed": 90, "extra": 3}, "team": {"id": 49, "name": "Chelsea"},
                     "player": {"id": 3, "name": "Palmer"}, "assist": {"id": null, "name": null},
                     "type": "Card", "detail": "Yellow Card", "comments": "Foul"}
                ]
            })))
            .mount(&mock_server)
            .await;

        let events = fetch_events(&client, &config, 77).await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, EventKind::Goal);
        assert_eq!(events[1].kind, EventKind::Card);
        assert_eq!(events[1].time.marker(), "90'+3");
    }

    #[tokio::test]
    async fn test_fetch_standings_server_error() {
        let mock_server = MockServer::start().await;
        let config = create_mock_config(mock_server.uri());
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/v3/standings"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let error = fetch_standings(&client, &config, 2023).await.unwrap_err();
        assert!(matches!(error, AppError::ApiServerError { status: 500, .. }));
        assert!(error.is_transport_error());
    }

    #[tokio::test]
    async fn test_fetch_rate_limited() {
        let mock_server = MockServer::start().await;
        let config = create_mock_config(mock_server.uri());
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/v3/fixtures/rounds"))
            .respond_with(ResponseTemplate::new(429))
            .expect(1)
            .mount(&mock_server)
            .await;

        let error = fetch_current_round(&client, &config, 2023).await.unwrap_err();
        assert!(matches!(error, AppError::ApiRateLimit { .. }));
    }

    #[tokio::test]
    async fn test_fetch_provider_error_in_body() {
        let mock_server = MockServer::start().await;
        let config = create_mock_config(mock_server.uri());
        let client = create_test_http_client();

        Mock::given(method("GET"))
            .and(path("/v3/standings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errors": {"token": "Error/Missing application key"},
                "response": []
            })))
            .mount(&mock_server)
            .await;

        let error = fetch_standings(&client, &config, 2023).await.unwrap_err();
        assert!(matches!(error, AppError::ApiProvider { .. }));
    }
}
