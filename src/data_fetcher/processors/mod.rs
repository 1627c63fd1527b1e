pub mod fixtures;
pub mod match_status;
pub mod time_formatting;

pub use fixtures::{DisplayBlock, TeamLine, normalize_fixture, score_lines};
pub use match_status::MatchState;
pub use time_formatting::{format_kickoff, parse_kickoff};
