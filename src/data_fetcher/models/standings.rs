use super::common::NamedRef;
use serde::{Deserialize, Serialize};

/// One entry of the `standings` endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsResponse {
    pub league: LeagueStandings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueStandings {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub season: Option<i32>,
    /// One table per group; the Premier League has a single group.
    #[serde(default)]
    pub standings: Vec<Vec<StandingRecord>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingRecord {
    pub rank: u32,
    pub team: NamedRef,
    pub points: i32,
    #[serde(rename = "goalsDiff")]
    pub goals_diff: i32,
    #[serde(default)]
    pub form: Option<String>,
    pub all: StandingStats,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandingStats {
    pub played: u32,
    pub win: u32,
    pub draw: u32,
    pub lose: u32,
    pub goals: StandingGoals,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandingGoals {
    #[serde(rename = "for")]
    pub scored: u32,
    pub against: u32,
}
