use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Payload decoding errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    #[error("API reported an error: {message}")]
    ApiProvider { message: String },

    // Domain errors
    #[error("There is no previous round available")]
    NoPreviousRound,

    #[error("No round information found in the API response")]
    NoRoundInformation,

    #[error("Unexpected round format: {0}")]
    RoundFormat(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Fixture not found: {fixture_id}")]
    FixtureNotFound { fixture_id: u64 },

    // Configuration errors
    #[error("No configuration found at {path}. Please run 'premcli config' to set up a configuration.")]
    ConfigMissing { path: String },

    #[error("Invalid config line: {line}")]
    ConfigInvalidLine { line: String },

    #[error("Unknown config key: {key}")]
    ConfigUnknownKey { key: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a round label format error
    pub fn round_format(label: impl Into<String>) -> Self {
        Self::RoundFormat(label.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API rate limit error
    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an error for problems the provider reports inside a 200 response
    pub fn api_provider(message: impl Into<String>) -> Self {
        Self::ApiProvider {
            message: message.into(),
        }
    }

    /// Missing, malformed or invalid configuration. Raised before any network call.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            AppError::Config(_)
                | AppError::ConfigMissing { .. }
                | AppError::ConfigInvalidLine { .. }
                | AppError::ConfigUnknownKey { .. }
        )
    }

    /// Request construction or execution failures, including HTTP status errors.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            AppError::ApiFetch(_)
                | AppError::ApiNotFound { .. }
                | AppError::ApiServerError { .. }
                | AppError::ApiClientError { .. }
                | AppError::ApiRateLimit { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
        )
    }

    /// Payloads that arrived but could not be understood.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            AppError::ApiMalformedJson { .. }
                | AppError::ApiUnexpectedStructure { .. }
                | AppError::ApiNoData { .. }
                | AppError::ApiProvider { .. }
        )
    }

    /// Failures of the round/fixture logic itself rather than of the plumbing.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            AppError::NoPreviousRound
                | AppError::NoRoundInformation
                | AppError::RoundFormat(_)
                | AppError::DateTimeParse(_)
                | AppError::FixtureNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("API_KEY cannot be empty");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: API_KEY cannot be empty"
        );
    }

    #[test]
    fn test_config_missing_mentions_setup_command() {
        let error = AppError::ConfigMissing {
            path: "/home/user/.config/premcli/premcli.conf".to_string(),
        };
        assert!(error.to_string().contains("premcli config"));
        assert!(error.is_config_error());
    }

    #[test]
    fn test_no_previous_round_message() {
        let error = AppError::NoPreviousRound;
        assert_eq!(error.to_string(), "There is no previous round available");
        assert!(error.is_domain_error());
        assert!(!error.is_transport_error());
    }

    #[test]
    fn test_round_format_helper() {
        let error = AppError::round_format("Regular Season - X");
        assert_eq!(
            error.to_string(),
            "Unexpected round format: Regular Season - X"
        );
    }

    #[test]
    fn test_api_not_found_helper() {
        let error = AppError::api_not_found("https://api.example.com/v3/fixtures");
        assert!(matches!(error, AppError::ApiNotFound { .. }));
        assert_eq!(
            error.to_string(),
            "API request not found (404): https://api.example.com/v3/fixtures"
        );
    }

    #[test]
    fn test_api_server_error_helper() {
        let error =
            AppError::api_server_error(500, "Internal server error", "https://api.example.com");
        assert_eq!(
            error.to_string(),
            "API server error (500): Internal server error (URL: https://api.example.com)"
        );
    }

    #[test]
    fn test_api_rate_limit_helper() {
        let error = AppError::api_rate_limit("Too many requests", "https://api.example.com");
        assert_eq!(
            error.to_string(),
            "API rate limit exceeded (429): Too many requests (URL: https://api.example.com)"
        );
    }

    #[test]
    fn test_error_kinds_are_disjoint() {
        let errors = vec![
            AppError::config_error("bad"),
            AppError::ConfigUnknownKey {
                key: "FOO".to_string(),
            },
            AppError::network_timeout("url"),
            AppError::api_client_error(403, "forbidden", "url"),
            AppError::api_malformed_json("bad json", "url"),
            AppError::api_provider("Missing application key"),
            AppError::NoRoundInformation,
            AppError::FixtureNotFound { fixture_id: 1 },
        ];

        for error in errors {
            let kinds = [
                error.is_config_error(),
                error.is_transport_error(),
                error.is_decode_error(),
                error.is_domain_error(),
            ];
            assert_eq!(
                kinds.iter().filter(|k| **k).count(),
                1,
                "Error {error:?} should belong to exactly one kind"
            );
        }
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }
}
