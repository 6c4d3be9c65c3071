//! Data module - sheet fetching, CSV parsing and ranking

mod fetcher;
mod loader;
mod parser;
mod ranking;

pub use fetcher::{FetchError, HttpSheetSource, SheetSource};
pub use loader::{spawn_load, InFlight, LoadError, LoadOutcome};
pub use ranking::{RankedTeam, DEFAULT_DISPLAY_LIMIT};
