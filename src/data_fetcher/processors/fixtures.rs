use crate::constants::layout::{AWAY_MARKER, HOME_MARKER, VERSUS};
use crate::data_fetcher::models::{MatchRecord, MatchTeam};
use crate::error::AppError;
use crate::ui::components::abbreviations::TeamAlias;
use crate::ui::formatting::team_line;
use chrono::{DateTime, FixedOffset};

use super::match_status::MatchState;
use super::time_formatting::{format_kickoff, parse_kickoff};

/// A team as it appears in one fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamLine {
    /// Provider team id, when the provider sent one.
    pub id: Option<u32>,
    pub name: String,
    pub goals: Option<u32>,
}

impl TeamLine {
    pub fn new(team: &MatchTeam, goals: Option<u32>) -> Self {
        TeamLine {
            id: team.id,
            name: team.name.clone(),
            goals,
        }
    }

    /// Whether this team is the given alias.
    ///
    /// Compares provider ids; falls back to a case-insensitive name
    /// comparison only when the provider omitted the id.
    pub fn is_team(&self, alias: &TeamAlias) -> bool {
        match self.id {
            Some(id) => id == alias.id,
            None => self.name.eq_ignore_ascii_case(alias.name),
        }
    }
}

/// One normalized fixture ready for display.
///
/// The kickoff instant and team identities are kept as structured fields so
/// sorting and favourite matching never look at the rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBlock {
    pub fixture_id: u64,
    pub kickoff: DateTime<FixedOffset>,
    pub state: MatchState,
    pub home: TeamLine,
    pub away: TeamLine,
    pub lines: Vec<String>,
}

impl DisplayBlock {
    /// The rendered block, one line per entry.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Whether either side of the fixture is the given team.
    pub fn involves(&self, alias: &TeamAlias) -> bool {
        self.home.is_team(alias) || self.away.is_team(alias)
    }
}

/// The `Date:` line followed by the stacked home/away score lines.
///
/// Without scores the home column shows `vs.` and the away line ends at the
/// team name. Shared by fixture blocks and the live event header.
pub fn score_lines(
    kickoff: &DateTime<FixedOffset>,
    home: &TeamLine,
    away: &TeamLine,
    show_score: bool,
) -> Vec<String> {
    let (home_score, away_score) = if show_score {
        (
            home.goals.unwrap_or(0).to_string(),
            away.goals.unwrap_or(0).to_string(),
        )
    } else {
        (VERSUS.to_string(), String::new())
    };

    vec![
        format!("Date: {}", format_kickoff(kickoff)),
        team_line(HOME_MARKER, &home.name, &home_score),
        team_line(AWAY_MARKER, &away.name, &away_score),
    ]
}

/// Converts a provider fixture into a [`DisplayBlock`].
///
/// ```text
/// Date: 21 Oct 2023, 03:00 PM
/// [H] Manchester City       2
/// [A] Chelsea               1
/// Status: Game Has Finished.
/// Fixture ID: 1035100
/// ```
///
/// Fails with [`AppError::DateTimeParse`] when the kickoff is not RFC 3339.
pub fn normalize_fixture(record: &MatchRecord) -> Result<DisplayBlock, AppError> {
    let kickoff = parse_kickoff(&record.fixture.date)?;
    let state = MatchState::from_status(&record.fixture.status);
    let home = TeamLine::new(&record.teams.home, record.goals.home);
    let away = TeamLine::new(&record.teams.away, record.goals.away);

    let mut lines = score_lines(&kickoff, &home, &away, state.shows_score());
    lines.push(state.status_line());
    lines.push(format!("Fixture ID: {}", record.fixture.id));

    Ok(DisplayBlock {
        fixture_id: record.fixture.id,
        kickoff,
        state,
        home,
        away,
        lines,
    })
}
