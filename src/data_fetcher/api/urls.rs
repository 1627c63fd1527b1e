//! URL building utilities for provider endpoints

use crate::error::AppError;
use reqwest::Url;

fn build_url(base_url: &str, path: &str, params: &[(&str, String)]) -> Result<String, AppError> {
    let endpoint = format!("{}/v3/{path}", base_url.trim_end_matches('/'));
    let url = Url::parse_with_params(&endpoint, params).map_err(|e| {
        AppError::config_error(format!("Invalid API base URL '{base_url}': {e}"))
    })?;
    Ok(url.to_string())
}

/// Builds the URL asking for the current round label of a competition season.
///
/// # Example
/// ```
/// use premcli::data_fetcher::api::build_current_round_url;
///
/// let url = build_current_round_url("https://api.example.com", 39, 2023).unwrap();
/// assert_eq!(url, "https://api.example.com/v3/fixtures/rounds?league=39&season=2023&current=true");
/// ```
pub fn build_current_round_url(
    base_url: &str,
    league: u32,
    season: i32,
) -> Result<String, AppError> {
    build_url(
        base_url,
        "fixtures/rounds",
        &[
            ("league", league.to_string()),
            ("season", season.to_string()),
            ("current", "true".to_string()),
        ],
    )
}

/// Builds the URL for all fixtures of one round. The timezone is omitted when empty.
///
/// # Example
/// ```
/// use premcli::data_fetcher::api::build_fixtures_url;
///
/// let url = build_fixtures_url(
///     "https://api.example.com", 39, 2023, "Regular Season - 9", "Europe/London",
/// ).unwrap();
/// assert_eq!(
///     url,
///     "https://api.example.com/v3/fixtures?league=39&season=2023&round=Regular+Season+-+9&timezone=Europe%2FLondon"
/// );
/// ```
pub fn build_fixtures_url(
    base_url: &str,
    league: u32,
    season: i32,
    round: &str,
    timezone: &str,
) -> Result<String, AppError> {
    let mut params = vec![
        ("league", league.to_string()),
        ("season", season.to_string()),
        ("round", round.to_string()),
    ];
    if !timezone.is_empty() {
        params.push(("timezone", timezone.to_string()));
    }
    build_url(base_url, "fixtures", &params)
}

/// Builds the URL for a single fixture by id.
///
/// # Example
/// ```
/// use premcli::data_fetcher::api::build_fixture_by_id_url;
///
/// let url = build_fixture_by_id_url("https://api.example.com", 1035100).unwrap();
/// assert_eq!(url, "https://api.example.com/v3/fixtures?id=1035100");
/// ```
pub fn build_fixture_by_id_url(base_url: &str, fixture_id: u64) -> Result<String, AppError> {
    build_url(base_url, "fixtures", &[("id", fixture_id.to_string())])
}

/// Builds the URL for the live events of a fixture.
///
/// # Example
/// ```
/// use premcli::data_fetcher::api::build_events_url;
///
/// let url = build_events_url("https://api.example.com", 1035100).unwrap();
/// assert_eq!(url, "https://api.example.com/v3/fixtures/events?fixture=1035100");
/// ```
pub fn build_events_url(base_url: &str, fixture_id: u64) -> Result<String, AppError> {
    build_url(base_url, "fixtures/events", &[("fixture", fixture_id.to_string())])
}

/// Builds the URL for the league table of a competition season.
///
/// # Example
/// ```
/// use premcli::data_fetcher::api::build_standings_url;
///
/// let url = build_standings_url("https://api.example.com", 39, 2023).unwrap();
/// assert_eq!(url, "https://api.example.com/v3/standings?league=39&season=2023");
/// ```
pub fn build_standings_url(base_url: &str, league: u32, season: i32) -> Result<String, AppError> {
    build_url(
        base_url,
        "standings",
        &[("league", league.to_string()), ("season", season.to_string())],
    )
}
