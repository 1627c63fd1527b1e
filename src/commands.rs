//! Command handlers.
//!
//! Every handler gathers its whole output in an [`OutputPage`] and only
//! writes it once all provider calls succeeded. Provider calls run one
//! after another.

use crate::cli::{Args, Command};
use crate::config::Config;
use crate::config::user_prompts::prompt_for_config;
use crate::data_fetcher::api::{
    create_http_client_with_timeout, current_season, fetch_events, fetch_fixture_by_id,
    fetch_fixtures, fetch_standings,
};
use crate::data_fetcher::processors::normalize_fixture;
use crate::data_fetcher::rounds::{RoundShift, resolve_round};
use crate::error::AppError;
use crate::ui::{OutputPage, fixtures_page, live_page, render_fixtures, render_live, standings_page};
use reqwest::Client;
use std::io::stdout;
use std::path::Path;
use tokio::io::AsyncBufRead;
use tracing::info;

/// Runs the parsed command line.
pub async fn run(args: &Args) -> Result<(), AppError> {
    match &args.command {
        Command::Config { overwrite, list } => {
            if *list {
                handle_list_config_command().await
            } else {
                handle_config_command(*overwrite).await
            }
        }
        Command::Fixtures { .. } => {
            handle_fixtures_command(args.command.round_shift(), args.plain).await
        }
        Command::Live { fixture_id } => handle_live_command(*fixture_id, args.plain).await,
        Command::Standings => handle_standings_command(args.plain).await,
    }
}

/// Loads the config and builds an HTTP client with its timeout.
async fn load_config_and_client() -> Result<(Config, Client), AppError> {
    let config = Config::load().await?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    Ok((config, client))
}

fn print_page(page: &OutputPage) -> Result<(), AppError> {
    page.render(&mut stdout())?;
    Ok(())
}

/// Handles `premcli config --list`.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    let config = Config::load().await?;
    println!("{}", config.describe(&Config::get_config_path()));
    Ok(())
}

/// Handles `premcli config [--overwrite]` by prompting on stdin.
pub async fn handle_config_command(overwrite: bool) -> Result<(), AppError> {
    let mut reader = tokio::io::BufReader::new(tokio::io::stdin());
    let message = setup_config_at(&Config::get_config_path(), overwrite, &mut reader).await?;
    println!("{message}");
    Ok(())
}

/// Writes a new config file at `config_path` from prompted values.
///
/// An existing file is kept unless `overwrite` is set. Returns the message
/// to show the user.
pub async fn setup_config_at<R>(
    config_path: &str,
    overwrite: bool,
    reader: &mut R,
) -> Result<String, AppError>
where
    R: AsyncBufRead + Unpin,
{
    if Path::new(config_path).exists() && !overwrite {
        return Ok(format!(
            "Config file already exists at {config_path}\nUse the --overwrite flag to replace it."
        ));
    }

    let config = prompt_for_config(reader).await?;
    if config.api_key.is_empty() {
        return Err(AppError::config_error("API_KEY cannot be empty"));
    }

    config.save_to_path(config_path).await?;
    info!("Configuration saved to {config_path}");

    match config.fav_team.as_deref() {
        Some(code) if config.favourite_team().is_none() => Ok(format!(
            "Configuration saved!\nUnknown team code '{code}'; no fixture will be highlighted."
        )),
        _ => Ok("Configuration saved!".to_string()),
    }
}

/// Handles `premcli fixtures`.
pub async fn handle_fixtures_command(shift: RoundShift, plain: bool) -> Result<(), AppError> {
    let (config, client) = load_config_and_client().await?;
    let page = build_fixtures_page(&client, &config, current_season(), shift, plain).await?;
    print_page(&page)
}

/// Resolves the round, fetches its fixtures and renders them sorted by
/// kickoff with the favourite team highlighted.
pub async fn build_fixtures_page(
    client: &Client,
    config: &Config,
    season: i32,
    shift: RoundShift,
    plain: bool,
) -> Result<OutputPage, AppError> {
    let round = resolve_round(client, config, season, shift).await?;
    let fixtures = fetch_fixtures(client, config, season, round.as_str()).await?;

    let blocks = fixtures
        .iter()
        .map(normalize_fixture)
        .collect::<Result<Vec<_>, _>>()?;
    let rendered = render_fixtures(blocks, config.favourite_team());
    info!(
        "Rendered {} fixtures for '{round}' ({} highlighted)",
        rendered.len(),
        rendered.iter().filter(|f| f.highlighted).count()
    );

    Ok(fixtures_page(&round, &rendered, plain))
}

/// Handles `premcli live <FIXTURE_ID>`.
pub async fn handle_live_command(fixture_id: u64, plain: bool) -> Result<(), AppError> {
    let (config, client) = load_config_and_client().await?;
    let page = build_live_page(&client, &config, fixture_id, plain).await?;
    print_page(&page)
}

/// Fetches the events and the fixture summary of one fixture. Both must
/// succeed for anything to be rendered.
pub async fn build_live_page(
    client: &Client,
    config: &Config,
    fixture_id: u64,
    plain: bool,
) -> Result<OutputPage, AppError> {
    let events = fetch_events(client, config, fixture_id).await?;
    let fixture = fetch_fixture_by_id(client, config, fixture_id).await?;
    let view = render_live(&fixture, &events)?;
    Ok(live_page(&view, plain))
}

/// Handles `premcli standings`.
pub async fn handle_standings_command(plain: bool) -> Result<(), AppError> {
    let (config, client) = load_config_and_client().await?;
    let page = build_standings_page(&client, &config, current_season(), plain).await?;
    print_page(&page)
}

pub async fn build_standings_page(
    client: &Client,
    config: &Config,
    season: i32,
    plain: bool,
) -> Result<OutputPage, AppError> {
    let standings = fetch_standings(client, config, season).await?;
    Ok(standings_page(&standings, plain))
}
