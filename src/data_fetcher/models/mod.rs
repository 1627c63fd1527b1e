pub mod common;
pub mod events;
pub mod fixtures;
pub mod standings;

pub use common::{ApiEnvelope, NamedRef};
pub use events::{EventKind, EventRecord, EventTime};
pub use fixtures::{FixtureInfo, FixtureStatus, Goals, MatchRecord, MatchTeam, MatchTeams};
pub use standings::{
    LeagueStandings, StandingGoals, StandingRecord, StandingStats, StandingsResponse,
};
