use super::common::NamedRef;
use serde::{Deserialize, Serialize};

/// One live event as returned by the `fixtures/events` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub time: EventTime,
    #[serde(default)]
    pub team: NamedRef,
    #[serde(default)]
    pub player: NamedRef,
    /// Assisting player for goals; the second player for substitutions.
    #[serde(default)]
    pub assist: NamedRef,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventTime {
    pub elapsed: u32,
    /// Injury-time minutes, `null` outside stoppage time.
    #[serde(default)]
    pub extra: Option<i32>,
}

impl EventTime {
    /// Formats the minute marker, e.g. `23'` or `90'+3`.
    ///
    /// The injury suffix appears only when strictly positive.
    pub fn marker(&self) -> String {
        match self.extra {
            Some(extra) if extra > 0 => format!("{}'+{extra}", self.elapsed),
            _ => format!("{}'", self.elapsed),
        }
    }
}

/// Event category. The provider's spelling is irregular ("subst" is lower case).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    Card,
    Substitution,
    Goal,
    Var,
    Other(String),
}

impl From<String> for EventKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Card" => EventKind::Card,
            "subst" => EventKind::Substitution,
            "Goal" => EventKind::Goal,
            "Var" => EventKind::Var,
            _ => EventKind::Other(value),
        }
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        kind.label().to_string()
    }
}

impl EventKind {
    /// The category as the provider spells it.
    pub fn label(&self) -> &str {
        match self {
            EventKind::Card => "Card",
            EventKind::Substitution => "subst",
            EventKind::Goal => "Goal",
            EventKind::Var => "Var",
            EventKind::Other(label) => label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_goal_event() {
        let json = r#"{
            "time": {"elapsed": 23, "extra": null},
            "team": {"id": 42, "name": "Arsenal", "logo": "x"},
            "player": {"id": 1460, "name": "Saka"},
            "assist": {"id": 37127, "name": "Odegaard"},
            "type": "Goal",
            "detail": "Normal Goal",
            "comments": null
        }"#;

        let event: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, EventKind::Goal);
        assert_eq!(event.player.name_or_empty(), "Saka");
        assert_eq!(event.assist.name_or_empty(), "Odegaard");
        assert_eq!(event.time.marker(), "23'");
    }

    #[test]
    fn test_event_kind_mapping() {
        assert_eq!(EventKind::from("subst".to_string()), EventKind::Substitution);
        assert_eq!(EventKind::from("Card".to_string()), EventKind::Card);
        assert_eq!(
            EventKind::from("Penalty Shootout".to_string()),
            EventKind::Other("Penalty Shootout".to_string())
        );
        assert_eq!(EventKind::Substitution.label(), "subst");
    }

    #[test]
    fn test_injury_time_marker() {
        let stoppage = EventTime {
            elapsed: 90,
            extra: Some(3),
        };
        assert_eq!(stoppage.marker(), "90'+3");

        let zero = EventTime {
            elapsed: 45,
            extra: Some(0),
        };
        assert_eq!(zero.marker(), "45'");
    }
}
