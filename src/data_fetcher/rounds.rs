//! Round label arithmetic and current-round resolution

use crate::config::Config;
use crate::data_fetcher::api::fetch_current_round;
use crate::error::AppError;
use reqwest::Client;
use std::fmt;
use tracing::{debug, instrument};

/// Which round to show relative to the provider's current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundShift {
    #[default]
    Current,
    Previous,
    Next,
}

impl RoundShift {
    /// Maps the `--previous`/`--next` command line flags. Previous wins if both are set.
    pub fn from_flags(previous: bool, next: bool) -> Self {
        if previous {
            RoundShift::Previous
        } else if next {
            RoundShift::Next
        } else {
            RoundShift::Current
        }
    }
}

/// A provider round label such as `"Regular Season - 9"`.
///
/// The final space-separated token is the 1-based round ordinal; everything
/// before it is an opaque prefix kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoundLabel(String);

impl RoundLabel {
    pub fn new(label: impl Into<String>) -> Self {
        RoundLabel(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the label into its prefix and ordinal.
    ///
    /// The ordinal is the last whitespace-delimited token and must be plain
    /// ASCII digits. A label without whitespace has an empty prefix. Fails with
    /// [`AppError::RoundFormat`] when the last token is not a positive integer.
    pub fn parts(&self) -> Result<(&str, u32), AppError> {
        let (head, ordinal) = self.split_ordinal()?;
        Ok((head.trim_end_matches(char::is_whitespace), ordinal))
    }

    /// Everything up to and including the whitespace before the ordinal,
    /// followed by the ordinal itself.
    fn split_ordinal(&self) -> Result<(&str, u32), AppError> {
        let label = self.0.trim_end();
        let start = label
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(index, c)| index + c.len_utf8());
        let (head, last) = label.split_at(start);

        if last.is_empty() || !last.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::round_format(self.0.clone()));
        }
        match last.parse::<u32>() {
            Ok(ordinal) if ordinal >= 1 => Ok((head, ordinal)),
            _ => Err(AppError::round_format(self.0.clone())),
        }
    }

    /// Everything before the ordinal, e.g. `"Regular Season -"`.
    pub fn prefix(&self) -> Result<&str, AppError> {
        self.parts().map(|(prefix, _)| prefix)
    }

    /// The round ordinal, e.g. `9` for `"Regular Season - 9"`.
    pub fn ordinal(&self) -> Result<u32, AppError> {
        self.parts().map(|(_, ordinal)| ordinal)
    }

    /// Returns the label of the neighbouring round.
    ///
    /// `Previous` fails with [`AppError::NoPreviousRound`] at round 1. `Next`
    /// has no upper bound since the season length is unknown here.
    /// `Current` returns the label unchanged without parsing it.
    ///
    /// # Example
    /// ```
    /// use premcli::data_fetcher::rounds::{RoundLabel, RoundShift};
    ///
    /// let label = RoundLabel::new("Regular Season - 9");
    /// assert_eq!(label.shift(RoundShift::Previous).unwrap().as_str(), "Regular Season - 8");
    /// assert_eq!(label.shift(RoundShift::Next).unwrap().as_str(), "Regular Season - 10");
    /// ```
    pub fn shift(&self, direction: RoundShift) -> Result<RoundLabel, AppError> {
        if direction == RoundShift::Current {
            return Ok(self.clone());
        }

        let (head, ordinal) = self.split_ordinal()?;
        let shifted = match direction {
            RoundShift::Previous if ordinal <= 1 => return Err(AppError::NoPreviousRound),
            RoundShift::Previous => ordinal - 1,
            RoundShift::Next => ordinal
                .checked_add(1)
                .ok_or_else(|| AppError::round_format(self.0.clone()))?,
            RoundShift::Current => ordinal,
        };

        let label = format!("{head}{shifted}");
        debug!("Shifted round '{}' to '{label}'", self.0);
        Ok(RoundLabel(label))
    }
}

impl fmt::Display for RoundLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fetches the current round label and applies the requested shift.
///
/// The label is fetched fresh on every call.
#[instrument(skip(client, config))]
pub async fn resolve_round(
    client: &Client,
    config: &Config,
    season: i32,
    direction: RoundShift,
) -> Result<RoundLabel, AppError> {
    let current = RoundLabel::new(fetch_current_round(client, config, season).await?);
    current.shift(direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIXES: &[&str] = &["Regular Season -", "Round", "Group Stage - Matchday", ""];

    fn label(prefix: &str, ordinal: u32) -> RoundLabel {
        if prefix.is_empty() {
            RoundLabel::new(ordinal.to_string())
        } else {
            RoundLabel::new(format!("{prefix} {ordinal}"))
        }
    }

    #[test]
    fn test_previous_decrements() {
        for prefix in PREFIXES {
            for n in 2..=40 {
                let shifted = label(prefix, n).shift(RoundShift::Previous).unwrap();
                assert_eq!(shifted, label(prefix, n - 1));
            }
        }
    }

    #[test]
    fn test_previous_then_next_is_identity() {
        for prefix in PREFIXES {
            for n in 2..=40 {
                let original = label(prefix, n);
                let back = original
                    .shift(RoundShift::Previous)
                    .and_then(|l| l.shift(RoundShift::Next))
                    .unwrap();
                assert_eq!(back, original);
            }
        }
    }

    #[test]
    fn test_no_previous_round_at_one() {
        let error = RoundLabel::new("Regular Season - 1")
            .shift(RoundShift::Previous)
            .unwrap_err();
        assert!(matches!(error, AppError::NoPreviousRound));
        assert_eq!(error.to_string(), "There is no previous round available");
    }

    #[test]
    fn test_next_from_first_round() {
        let shifted = RoundLabel::new("Regular Season - 1")
            .shift(RoundShift::Next)
            .unwrap();
        assert_eq!(shifted.as_str(), "Regular Season - 2");
    }

    #[test]
    fn test_next_is_unbounded() {
        let shifted = RoundLabel::new("Regular Season - 38")
            .shift(RoundShift::Next)
            .unwrap();
        assert_eq!(shifted.ordinal().unwrap(), 39);
    }

    #[test]
    fn test_shift_never_produces_non_positive_ordinal() {
        let mut current = RoundLabel::new("Regular Season - 5");
        while let Ok(previous) = current.shift(RoundShift::Previous) {
            assert!(previous.ordinal().unwrap() >= 1);
            current = previous;
        }
        assert_eq!(current.as_str(), "Regular Season - 1");
    }

    #[test]
    fn test_prefix_is_preserved_verbatim() {
        let shifted = RoundLabel::new("Regular  Season -  12")
            .shift(RoundShift::Previous)
            .unwrap();
        assert_eq!(shifted.as_str(), "Regular  Season -  11");
    }

    #[test]
    fn test_prefix_and_ordinal() {
        let label = RoundLabel::new("Regular Season - 9");
        assert_eq!(label.prefix().unwrap(), "Regular Season -");
        assert_eq!(label.ordinal().unwrap(), 9);
        assert_eq!(label.to_string(), "Regular Season - 9");
    }

    #[test]
    fn test_ordinal_after_any_whitespace() {
        let shifted = RoundLabel::new("Regular Season -\t9")
            .shift(RoundShift::Previous)
            .unwrap();
        assert_eq!(shifted.as_str(), "Regular Season -\t8");

        let label = RoundLabel::new("Regular Season -\t9");
        assert_eq!(label.prefix().unwrap(), "Regular Season -");
        assert_eq!(label.ordinal().unwrap(), 9);
    }

    #[test]
    fn test_prefixless_label() {
        let shifted = RoundLabel::new("7").shift(RoundShift::Next).unwrap();
        assert_eq!(shifted.as_str(), "8");
    }

    #[test]
    fn test_unparseable_ordinal() {
        for bad in [
            "Regular Season - X",
            "Quarter-finals",
            "",
            "Round 0",
            "Round -3",
            "Round +5",
            "Round 5a",
        ] {
            let error = RoundLabel::new(bad).shift(RoundShift::Next).unwrap_err();
            assert!(
                matches!(error, AppError::RoundFormat(_)),
                "'{bad}' should be a format error, got {error:?}"
            );
        }
    }

    #[test]
    fn test_current_does_not_parse() {
        let label = RoundLabel::new("Quarter-finals");
        assert_eq!(label.shift(RoundShift::Current).unwrap(), label);
    }

    #[test]
    fn test_shift_from_flags() {
        assert_eq!(RoundShift::from_flags(false, false), RoundShift::Current);
        assert_eq!(RoundShift::from_flags(true, false), RoundShift::Previous);
        assert_eq!(RoundShift::from_flags(false, true), RoundShift::Next);
    }
}
