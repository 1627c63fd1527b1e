//! Generic provider fetching with status and payload error handling

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::config::Config;
use crate::constants::provider::{API_HOST, HOST_HEADER, KEY_HEADER};
use crate::data_fetcher::models::ApiEnvelope;
use crate::error::AppError;

/// Fetches a provider endpoint and returns the `response` array of its envelope.
///
/// This function:
/// - Sends the API key and host identifier headers with the request
/// - Maps HTTP status codes to specific transport errors
/// - Distinguishes empty, non-JSON and mis-shaped payloads
/// - Surfaces errors the provider reports inside a successful response
///
/// Requests are made exactly once; there is no retry or caching.
#[instrument(skip(client, config))]
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    config: &Config,
    url: &str,
) -> Result<Vec<T>, AppError> {
    info!("Fetching data from URL: {url}");

    let response = client
        .get(url)
        .header(KEY_HEADER, &config.api_key)
        .header(HOST_HEADER, API_HOST)
        .send()
        .await
        .map_err(|e| {
            error!("Request failed for URL {}: {}", url, e);
            if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            }
        })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    debug!("Response length: {} bytes", response_text.len());

    parse_envelope(&response_text, url)
}

/// Decodes a provider envelope, classifying what went wrong when it fails.
pub(super) fn parse_envelope<T: DeserializeOwned>(
    response_text: &str,
    url: &str,
) -> Result<Vec<T>, AppError> {
    let trimmed = response_text.trim_start();
    if trimmed.is_empty() {
        return Err(AppError::api_no_data("Response body is empty", url));
    }

    let envelope = match serde_json::from_str::<ApiEnvelope<T>>(response_text) {
        Ok(envelope) => envelope,
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                response_text.chars().take(200).collect::<String>()
            );

            return Err(if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                AppError::api_malformed_json("Response is not valid JSON", url)
            } else {
                AppError::api_unexpected_structure(e.to_string(), url)
            });
        }
    };

    let provider_errors = envelope.error_messages();
    if !provider_errors.is_empty() {
        error!("Provider reported errors for {}: {:?}", url, provider_errors);
        return Err(AppError::api_provider(provider_errors.join("; ")));
    }

    Ok(envelope.response)
}
