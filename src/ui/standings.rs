//! League table rendering

use super::page::{LineStyle, OutputPage};
use crate::data_fetcher::models::{StandingRecord, StandingsResponse};
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 11] = [
    "Rank", "Club", "MP", "W", "D", "L", "GF", "GA", "GD", "Pts", "Form",
];

/// Index of the only left-aligned column besides `Form`.
const CLUB_COLUMN: usize = 1;
const FORM_COLUMN: usize = 10;

fn row_cells(record: &StandingRecord) -> [String; 11] {
    let stats = &record.all;
    [
        record.rank.to_string(),
        record.team.name_or_empty().to_string(),
        stats.played.to_string(),
        stats.win.to_string(),
        stats.draw.to_string(),
        stats.lose.to_string(),
        stats.goals.scored.to_string(),
        stats.goals.against.to_string(),
        record.goals_diff.to_string(),
        record.points.to_string(),
        record.form.clone().unwrap_or_default(),
    ]
}

fn pad(cell: &str, width: usize, column: usize) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    if column == CLUB_COLUMN || column == FORM_COLUMN {
        format!("{cell}{fill}")
    } else {
        format!("{fill}{cell}")
    }
}

fn join_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(column, (cell, width))| pad(cell, *width, column))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Renders one standings group as aligned text rows, header first.
///
/// Rows follow the provider's order.
pub fn render_table(group: &[StandingRecord]) -> Vec<String> {
    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let rows: Vec<Vec<String>> = group.iter().map(|r| row_cells(r).to_vec()).collect();

    let widths: Vec<usize> = (0..HEADERS.len())
        .map(|column| {
            rows.iter()
                .map(|row| row[column].width())
                .chain(std::iter::once(header[column].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    std::iter::once(&header)
        .chain(rows.iter())
        .map(|row| join_row(row, &widths))
        .collect()
}

/// Builds the `standings` command output. Multiple groups are printed one
/// after another.
pub fn standings_page(standings: &[StandingsResponse], plain: bool) -> OutputPage {
    let mut page = OutputPage::new(plain);

    for response in standings {
        let league = &response.league;
        let title = match (&league.name, league.season) {
            (Some(name), Some(season)) => format!("{name} {season}/{:02}", (season + 1) % 100),
            (Some(name), None) => name.clone(),
            _ => "Standings".to_string(),
        };

        for group in &league.standings {
            if !page.lines().is_empty() {
                page.add_blank();
            }
            page.add_line(title.clone(), LineStyle::Title);
            page.add_blank();

            let mut table = render_table(group).into_iter();
            if let Some(header) = table.next() {
                page.add_line(header, LineStyle::Header);
            }
            page.add_block(table, LineStyle::Text);
        }
    }

    if page.lines().is_empty() {
        page.add_text("No standings available.");
    }
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{LeagueStandings, NamedRef, StandingGoals, StandingStats};

    fn record(rank: u32, name: &str, points: i32, gd: i32, form: Option<&str>) -> StandingRecord {
        StandingRecord {
            rank,
            team: NamedRef {
                id: None,
                name: Some(name.to_string()),
            },
            points,
            goals_diff: gd,
            form: form.map(str::to_string),
            all: StandingStats {
                played: 10,
                win: 7,
                draw: 3,
                lose: 0,
                goals: StandingGoals {
                    scored: 20,
                    against: 8,
                },
            },
        }
    }

    #[test]
    fn test_table_columns_align() {
        let rows = render_table(&[
            record(1, "Arsenal", 24, 12, Some("WWDWW")),
            record(20, "Sheffield Utd", 1, -22, None),
        ]);

        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("Rank  Club"));
        assert!(rows[0].ends_with("Form"));

        let pts = rows[0].find("Pts").unwrap() + "Pts".len();
        assert_eq!(&rows[1][pts - 2..pts], "24");
        assert_eq!(&rows[2][pts - 2..pts], " 1");
        assert!(rows[1].ends_with("WWDWW"));
        assert!(rows[2].contains("-22"));
    }

    #[test]
    fn test_rows_follow_provider_order() {
        let rows = render_table(&[
            record(2, "Chelsea", 20, 5, None),
            record(1, "Arsenal", 24, 12, None),
        ]);
        assert!(rows[1].contains("Chelsea"));
        assert!(rows[2].contains("Arsenal"));
    }

    #[test]
    fn test_standings_page() {
        let response = StandingsResponse {
            league: LeagueStandings {
                name: Some("Premier League".to_string()),
                season: Some(2023),
                standings: vec![vec![record(1, "Arsenal", 24, 12, Some("WWDWW"))]],
            },
        };
        let page = standings_page(&[response], true);
        let lines = page.lines();
        assert_eq!(lines[0].text, "Premier League 2023/24");
        assert_eq!(lines[2].style, LineStyle::Header);
        assert!(lines[3].text.contains("Arsenal"));
    }

    #[test]
    fn test_empty_standings() {
        let page = standings_page(&[], true);
        assert_eq!(page.plain_text(), "No standings available.\n");
    }
}
