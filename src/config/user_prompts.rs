//! User prompts for the `config` command
//!
//! Collects the API key, timezone and favourite team interactively
//! when the user sets up a new configuration file.

use crate::config::Config;
use crate::error::AppError;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWriteExt};

/// Prints `prompt` and returns the trimmed next line from `reader`.
pub async fn prompt_line<R>(reader: &mut R, prompt: &str) -> Result<String, AppError>
where
    R: AsyncBufRead + Unpin,
{
    let mut stdout = io::stdout();
    stdout.write_all(prompt.as_bytes()).await?;
    stdout.flush().await?;

    let mut input = String::new();
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}

/// Asks for the three config file values and returns them as a new [`Config`].
pub async fn prompt_for_config<R>(reader: &mut R) -> Result<Config, AppError>
where
    R: AsyncBufRead + Unpin,
{
    let api_key = prompt_line(reader, "Enter your API key: ").await?;
    let timezone = prompt_line(reader, "Enter your Timezone: ").await?;
    let fav_team =
        prompt_line(reader, "Enter your Premier League team (e.g. ARS, MCI, WOL): ").await?;

    Ok(Config {
        api_key,
        timezone,
        fav_team: Some(fav_team.to_uppercase()).filter(|v| !v.is_empty()),
        ..Config::default()
    })
}
