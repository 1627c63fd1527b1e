mod core;
mod fetch_utils;
pub mod http_client;
pub mod season_utils;
pub mod urls;

// Re-export core API functions
pub use self::core::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export season utilities
pub use season_utils::{current_season, season_for_date};
// Re-export URL utilities
pub use urls::*;
