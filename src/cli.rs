use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

use crate::data_fetcher::rounds::RoundShift;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Premier League fixtures, live events and standings in the terminal
///
/// Shows the fixtures of the current round (or the previous/next one),
/// follows the events of a single fixture and prints the league table.
/// Your favourite team's fixture is highlighted.
///
/// Run `premcli config` first to store your API key, timezone and team.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Also write logs to the terminal.
    /// Logs always go to the log file.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,

    /// Print plain text without colours or underlining.
    #[arg(long = "plain", global = true, help_heading = "Display Options")]
    pub plain: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set up the API key, timezone and favourite team
    Config {
        /// Replace an existing configuration file.
        #[arg(short, long)]
        overwrite: bool,

        /// List current configuration settings with the API key masked.
        #[arg(long, short = 'l', conflicts_with = "overwrite")]
        list: bool,
    },

    /// Show the fixtures of a round
    Fixtures {
        /// Show the previous round instead of the current one.
        #[arg(short, long, conflicts_with = "next")]
        previous: bool,

        /// Show the next round instead of the current one.
        #[arg(short, long)]
        next: bool,
    },

    /// Show the events of a single fixture
    Live {
        /// Fixture id as printed by `premcli fixtures`.
        #[arg(value_name = "FIXTURE_ID")]
        fixture_id: u64,
    },

    /// Show the league table
    Standings,
}

impl Command {
    /// The round to show for `fixtures`; `Current` for every other command.
    pub fn round_shift(&self) -> RoundShift {
        match self {
            Command::Fixtures { previous, next } => RoundShift::from_flags(*previous, *next),
            _ => RoundShift::Current,
        }
    }
}
