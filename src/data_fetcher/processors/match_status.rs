use crate::data_fetcher::models::FixtureStatus;
use tracing::debug;

/// Status code of a fixture that has not kicked off.
pub const NOT_STARTED: &str = "NS";
/// Status code of a fixture that has finished in regular time.
pub const FULL_TIME: &str = "FT";

/// Display classification of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchState {
    NotStarted,
    InProgress { elapsed: u32 },
    Finished,
}

impl MatchState {
    /// Classifies a provider status. Every code other than `NS` and `FT` counts
    /// as in progress with the provider's elapsed minutes (0 when missing).
    pub fn from_status(status: &FixtureStatus) -> Self {
        match status.short.as_str() {
            NOT_STARTED => MatchState::NotStarted,
            FULL_TIME => MatchState::Finished,
            other => {
                let elapsed = status.elapsed.unwrap_or(0);
                debug!("Status '{other}' treated as in progress at {elapsed}'");
                MatchState::InProgress { elapsed }
            }
        }
    }

    /// The last line of a fixture block.
    pub fn status_line(&self) -> String {
        match self {
            MatchState::NotStarted => "Status: Game Hasn't Started.".to_string(),
            MatchState::Finished => "Status: Game Has Finished.".to_string(),
            MatchState::InProgress { elapsed } => format!("Time Elapsed: {elapsed}"),
        }
    }

    pub fn shows_score(&self) -> bool {
        !matches!(self, MatchState::NotStarted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(short: &str, elapsed: Option<u32>) -> FixtureStatus {
        FixtureStatus {
            long: None,
            short: short.to_string(),
            elapsed,
        }
    }

    #[test]
    fn test_classification() {
        assert_eq!(MatchState::from_status(&status("NS", None)), MatchState::NotStarted);
        assert_eq!(MatchState::from_status(&status("FT", Some(90))), MatchState::Finished);
        assert_eq!(
            MatchState::from_status(&status("2H", Some(67))),
            MatchState::InProgress { elapsed: 67 }
        );
        assert_eq!(
            MatchState::from_status(&status("HT", None)),
            MatchState::InProgress { elapsed: 0 }
        );
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(MatchState::NotStarted.status_line(), "Status: Game Hasn't Started.");
        assert_eq!(MatchState::Finished.status_line(), "Status: Game Has Finished.");
        assert_eq!(
            MatchState::InProgress { elapsed: 34 }.status_line(),
            "Time Elapsed: 34"
        );
    }
}
