pub mod colors;
pub mod components;
pub mod events;
pub mod fixtures;
pub mod formatting;
pub mod page;
pub mod standings;

pub use events::{LiveView, live_page, render_live};
pub use fixtures::{RenderedFixture, fixtures_page, render_fixtures};
pub use page::{LineStyle, OutputPage};
pub use standings::standings_page;
