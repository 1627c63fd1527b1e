//! Live event rendering for a single fixture

use super::page::{LineStyle, OutputPage};
use crate::data_fetcher::models::{EventKind, EventRecord, MatchRecord};
use crate::data_fetcher::processors::{TeamLine, parse_kickoff, score_lines};
use crate::error::AppError;
use tracing::warn;

/// Header and per-event text units of a live view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveView {
    pub header: Vec<String>,
    pub events: Vec<Vec<String>>,
}

/// Renders the header of a live view from the fixture summary.
///
/// ```text
/// Date: 21 Oct 2023, 03:00 PM
/// [H] Arsenal               1
/// [A] Chelsea               0
/// Time Elapsed: 67
/// Events:
/// ```
pub fn render_live_header(fixture: &MatchRecord) -> Result<Vec<String>, AppError> {
    let kickoff = parse_kickoff(&fixture.fixture.date)?;
    let home = TeamLine::new(&fixture.teams.home, fixture.goals.home);
    let away = TeamLine::new(&fixture.teams.away, fixture.goals.away);

    let mut header = score_lines(&kickoff, &home, &away, true);
    header.push(format!(
        "Time Elapsed: {}",
        fixture.fixture.status.elapsed.unwrap_or(0)
    ));
    header.push("Events:".to_string());
    Ok(header)
}

/// Renders one event as a list of lines.
///
/// Returns `None` for categories this renderer does not know; those are
/// logged rather than dropped silently.
pub fn render_event(event: &EventRecord) -> Option<Vec<String>> {
    let marker = event.time.marker();
    let team = event.team.name_or_empty().to_string();
    let player = event.player.name_or_empty();

    let mut lines = match &event.kind {
        EventKind::Card => {
            let mut lines = vec![format!("{marker} {}", event.detail), team, player.to_string()];
            lines.extend(event.comments.clone().filter(|c| !c.is_empty()));
            lines
        }
        EventKind::Substitution => {
            let mut lines = vec![
                format!("{marker} {}", event.detail),
                team,
                format!("{player} IN"),
            ];
            lines.extend(event.assist.name.as_ref().map(|out| format!("{out} OUT")));
            lines
        }
        EventKind::Goal => {
            let mut lines = vec![
                format!("{marker} GOAL!!!"),
                team,
                format!("Player: {player}"),
            ];
            lines.extend(event.assist.name.as_ref().map(|assist| format!("Assist: {assist}")));
            lines.push(event.detail.clone());
            lines
        }
        EventKind::Var => vec![
            format!("{marker} {}", event.kind.label()),
            team,
            player.to_string(),
            event.detail.clone(),
        ],
        EventKind::Other(label) => {
            warn!("Skipping event with unknown event category '{label}' at {marker}");
            return None;
        }
    };

    lines.retain(|line| !line.trim().is_empty());
    Some(lines)
}

/// Renders the header and all events in provider order.
pub fn render_live(fixture: &MatchRecord, events: &[EventRecord]) -> Result<LiveView, AppError> {
    Ok(LiveView {
        header: render_live_header(fixture)?,
        events: events.iter().filter_map(render_event).collect(),
    })
}

/// Builds the `live` command output.
pub fn live_page(view: &LiveView, plain: bool) -> OutputPage {
    let mut page = OutputPage::new(plain);
    let (events_label, score) = match view.header.split_last() {
        Some((last, rest)) => (Some(last), rest),
        None => (None, view.header.as_slice()),
    };

    page.add_block(score.iter().cloned(), LineStyle::Text);
    if let Some(label) = events_label {
        page.add_line(label.clone(), LineStyle::Title);
    }
    for event in &view.events {
        page.add_blank();
        page.add_block(event.iter().cloned(), LineStyle::Text);
    }
    page
}
