//! Premier League terminal client library
//!
//! Fetches rounds, fixtures, live events and standings from the football
//! data provider and formats them for the terminal.
//!
//! # Examples
//!
//! ```rust,no_run
//! use premcli::commands::build_fixtures_page;
//! use premcli::data_fetcher::api::{create_http_client_with_timeout, current_season};
//! use premcli::data_fetcher::rounds::RoundShift;
//! use premcli::{AppError, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     let page =
//!         build_fixtures_page(&client, &config, current_season(), RoundShift::Next, false).await?;
//!     page.render(&mut std::io::stdout())?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::processors::{DisplayBlock, normalize_fixture};
pub use data_fetcher::rounds::{RoundLabel, RoundShift, resolve_round};
pub use error::AppError;
pub use ui::components::abbreviations::{TeamAlias, resolve_alias};
pub use ui::{OutputPage, render_fixtures};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
