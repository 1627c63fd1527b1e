//! Chronological fixture listing with favourite-team highlighting

use super::components::abbreviations::TeamAlias;
use super::page::{LineStyle, OutputPage};
use crate::data_fetcher::processors::DisplayBlock;
use crate::data_fetcher::rounds::RoundLabel;

/// A fixture block after sorting, tagged for highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFixture {
    pub fixture_id: u64,
    pub text: String,
    pub highlighted: bool,
}

/// Orders blocks by kickoff, earliest first. Blocks with the same kickoff
/// keep their input order.
pub fn sort_by_kickoff(blocks: &mut [DisplayBlock]) {
    blocks.sort_by_key(|block| block.kickoff);
}

/// Sorts the blocks and flags those involving the favourite team.
///
/// An unknown or unset favourite never highlights anything.
pub fn render_fixtures(
    mut blocks: Vec<DisplayBlock>,
    favourite: Option<&TeamAlias>,
) -> Vec<RenderedFixture> {
    sort_by_kickoff(&mut blocks);
    blocks
        .iter()
        .map(|block| RenderedFixture {
            fixture_id: block.fixture_id,
            text: block.text(),
            highlighted: favourite.is_some_and(|alias| block.involves(alias)),
        })
        .collect()
}

/// Builds the `fixtures` command output: the underlined round label followed
/// by one block per fixture separated by blank lines.
pub fn fixtures_page(
    round: &RoundLabel,
    fixtures: &[RenderedFixture],
    plain: bool,
) -> OutputPage {
    let mut page = OutputPage::new(plain);
    page.add_line(round.as_str(), LineStyle::Title);

    if fixtures.is_empty() {
        page.add_blank();
        page.add_text("No fixtures found for this round.");
        return page;
    }

    for fixture in fixtures {
        page.add_blank();
        let style = if fixture.highlighted {
            LineStyle::Favourite
        } else {
            LineStyle::Text
        };
        page.add_block(fixture.text.lines(), style);
    }
    page
}
