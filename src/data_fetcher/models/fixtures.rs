use serde::{Deserialize, Serialize};

/// One fixture as returned by the `fixtures` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub fixture: FixtureInfo,
    pub teams: MatchTeams,
    #[serde(default)]
    pub goals: Goals,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureInfo {
    pub id: u64,
    /// Kickoff instant in ISO-8601 / RFC 3339 form, e.g. "2023-10-21T14:00:00+00:00".
    pub date: String,
    pub status: FixtureStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureStatus {
    #[serde(default)]
    pub long: Option<String>,
    /// Short status code: "NS", "FT", "1H", "HT", "2H", ...
    pub short: String,
    #[serde(default)]
    pub elapsed: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchTeams {
    pub home: MatchTeam,
    pub away: MatchTeam,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchTeam {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
}

/// Goal counts; both are `null` before kickoff.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Goals {
    #[serde(default)]
    pub home: Option<u32>,
    #[serde(default)]
    pub away: Option<u32>,
}
