//! Column alignment for stacked team/score lines

use crate::constants::layout::NAME_SCORE_WIDTH;
use unicode_width::UnicodeWidthStr;

/// Spaces between a team name and its score so that the score ends at
/// [`NAME_SCORE_WIDTH`] + 1 columns.
///
/// Names too long for the column still get a single separating space
/// instead of a negative pad.
pub fn score_padding(marker: &str, name: &str, score: &str) -> usize {
    NAME_SCORE_WIDTH
        .saturating_sub(marker.width())
        .saturating_sub(name.width())
        .saturating_sub(score.width())
        .max(1)
}

/// Renders `"[H] Arsenal               2"`. An empty score renders the bare name.
///
/// # Examples
/// ```
/// use premcli::ui::formatting::team_line;
///
/// let home = team_line("[H]", "Arsenal", "2");
/// let away = team_line("[A]", "Manchester United", "10");
/// assert_eq!(home.len(), away.len());
/// assert!(home.ends_with(" 2"));
/// ```
pub fn team_line(marker: &str, name: &str, score: &str) -> String {
    if score.is_empty() {
        return format!("{marker} {name}");
    }
    let padding = score_padding(marker, name, score);
    format!("{marker} {name}{}{score}", " ".repeat(padding))
}
