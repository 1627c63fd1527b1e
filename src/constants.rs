//! Application-wide constants and configuration values
//!
//! This module centralizes provider identifiers, layout widths and
//! environment variable names so they are defined in one place.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Football data provider settings
pub mod provider {
    /// Default base URL of the provider (without the `/v3` path)
    pub const DEFAULT_BASE_URL: &str = "https://api-football-v1.p.rapidapi.com";

    /// Host identifier sent with every request
    pub const API_HOST: &str = "api-football-v1.p.rapidapi.com";

    /// Header carrying the API key
    pub const KEY_HEADER: &str = "X-RapidAPI-Key";

    /// Header carrying the host identifier
    pub const HOST_HEADER: &str = "X-RapidAPI-Host";

    /// Provider competition id of the Premier League
    pub const PREMIER_LEAGUE_ID: u32 = 39;
}

/// Season boundaries
pub mod season {
    /// First month (1-based) that belongs to the season starting in the same calendar year
    pub const CUTOFF_MONTH: u32 = 7;
}

/// Fixture and event layout constants
pub mod layout {
    /// Width of the "[H] name ... score" column
    pub const NAME_SCORE_WIDTH: usize = 26;

    /// Marker printed in front of the home team
    pub const HOME_MARKER: &str = "[H]";

    /// Marker printed in front of the away team
    pub const AWAY_MARKER: &str = "[A]";

    /// Text shown in the score column before kickoff
    pub const VERSUS: &str = "vs.";

    /// chrono format for kickoff times, e.g. "21 Oct 2023, 03:00 PM"
    pub const KICKOFF_FORMAT: &str = "%d %b %Y, %I:%M %p";
}

/// Environment variable names
pub mod env_vars {
    /// Overrides `API_KEY` from the config file
    pub const API_KEY: &str = "PREMCLI_API_KEY";

    /// Overrides `TIMEZONE` from the config file
    pub const TIMEZONE: &str = "PREMCLI_TIMEZONE";

    /// Overrides `FAVTEAM` from the config file
    pub const FAV_TEAM: &str = "PREMCLI_FAVTEAM";

    /// Overrides the provider base URL
    pub const API_BASE_URL: &str = "PREMCLI_API_BASE_URL";

    /// Overrides the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "PREMCLI_HTTP_TIMEOUT";

    /// Overrides the log file path
    pub const LOG_FILE: &str = "PREMCLI_LOG_FILE";
}
