use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A short team code with its canonical name and provider team id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamAlias {
    /// Three-letter code, always upper case.
    pub code: &'static str,
    /// Canonical team name as the provider spells it.
    pub name: &'static str,
    /// Provider team id.
    pub id: u32,
}

/// Every team code users can configure as their favourite.
pub const TEAM_ALIASES: &[TeamAlias] = &[
    TeamAlias {
        code: "ARS",
        name: "Arsenal",
        id: 42,
    },
    TeamAlias {
        code: "AVL",
        name: "Aston Villa",
        id: 66,
    },
    TeamAlias {
        code: "BOU",
        name: "Bournemouth",
        id: 35,
    },
    TeamAlias {
        code: "BRE",
        name: "Brentford",
        id: 55,
    },
    TeamAlias {
        code: "BHA",
        name: "Brighton",
        id: 51,
    },
    TeamAlias {
        code: "BUR",
        name: "Burnley",
        id: 44,
    },
    TeamAlias {
        code: "CHE",
        name: "Chelsea",
        id: 49,
    },
    TeamAlias {
        code: "CRY",
        name: "Crystal Palace",
        id: 52,
    },
    TeamAlias {
        code: "EVE",
        name: "Everton",
        id: 45,
    },
    TeamAlias {
        code: "FUL",
        name: "Fulham",
        id: 36,
    },
    TeamAlias {
        code: "LEE",
        name: "Leeds",
        id: 63,
    },
    TeamAlias {
        code: "LEI",
        name: "Leicester City",
        id: 46,
    },
    TeamAlias {
        code: "LIV",
        name: "Liverpool",
        id: 40,
    },
    TeamAlias {
        code: "LUT",
        name: "Luton",
        id: 1359,
    },
    TeamAlias {
        code: "MCI",
        name: "Manchester City",
        id: 50,
    },
    TeamAlias {
        code: "MUN",
        name: "Manchester United",
        id: 33,
    },
    TeamAlias {
        code: "NEW",
        name: "Newcastle",
        id: 34,
    },
    TeamAlias {
        code: "NOR",
        name: "Norwich City",
        id: 71,
    },
    TeamAlias {
        code: "NOT",
        name: "Nottingham Forest",
        id: 65,
    },
    TeamAlias {
        code: "SHU",
        name: "Sheffield United",
        id: 62,
    },
    TeamAlias {
        code: "SOU",
        name: "Southampton",
        id: 41,
    },
    TeamAlias {
        code: "TOT",
        name: "Tottenham Hotspur",
        id: 47,
    },
    TeamAlias {
        code: "WAT",
        name: "Watford",
        id: 38,
    },
    TeamAlias {
        code: "WBR",
        name: "West Brom",
        id: 60,
    },
    TeamAlias {
        code: "WHU",
        name: "West Ham",
        id: 48,
    },
    TeamAlias {
        code: "WOL",
        name: "Wolves",
        id: 39,
    },
];

static ALIAS_INDEX: Lazy<HashMap<&'static str, &'static TeamAlias>> =
    Lazy::new(|| TEAM_ALIASES.iter().map(|alias| (alias.code, alias)).collect());

/// Looks up a team code, ignoring case and surrounding whitespace.
///
/// # Examples
/// ```
/// use premcli::ui::components::abbreviations::resolve_alias;
///
/// assert_eq!(resolve_alias("wol").map(|a| a.name), Some("Wolves"));
/// assert_eq!(resolve_alias("XXX"), None);
/// ```
pub fn resolve_alias(code: &str) -> Option<&'static TeamAlias> {
    let code = code.trim().to_uppercase();
    ALIAS_INDEX.get(code.as_str()).copied()
}
