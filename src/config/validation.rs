use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API key cannot be empty
/// - Base URL must start with http:// or https://
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty and its parent must be creatable
pub fn validate_config(
    api_key: &str,
    api_base_url: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_key.trim().is_empty() {
        return Err(AppError::config_error(
            "API_KEY cannot be empty. Run 'premcli config --overwrite' to set it",
        ));
    }

    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "API base URL must start with http:// or https://: {api_base_url}"
        )));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://api-football-v1.p.rapidapi.com";

    #[test]
    fn test_valid_config() {
        assert!(validate_config("key", URL, 30, &None).is_ok());
    }

    #[test]
    fn test_empty_api_key_is_rejected() {
        let error = validate_config("  ", URL, 30, &None).unwrap_err();
        assert!(error.is_config_error());
    }

    #[test]
    fn test_base_url_needs_scheme() {
        assert!(validate_config("key", "api.example.com", 30, &None).is_err());
        assert!(validate_config("key", "http://localhost:8080", 30, &None).is_ok());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(validate_config("key", URL, 0, &None).is_err());
    }

    #[test]
    fn test_empty_log_path_is_rejected() {
        assert!(validate_config("key", URL, 30, &Some(String::new())).is_err());
    }
}
