pub mod api;
pub mod models;
pub mod processors;
pub mod rounds;

pub use api::{fetch_current_round, fetch_fixtures, fetch_standings};
pub use models::{EventRecord, MatchRecord};
pub use rounds::{RoundLabel, RoundShift, resolve_round};
