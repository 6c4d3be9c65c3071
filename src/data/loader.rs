//! Leaderboard Loader Module
//! Fetches the sheet, parses it and ranks the teams on a background thread.

use super::fetcher::{FetchError, SheetSource};
use super::parser::parse_csv;
use super::ranking::{rank_top, RankedTeam};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to fetch sheet: {0}")]
    Fetch(#[from] FetchError),
    #[error("Load worker exited before reporting a result")]
    Abandoned,
}

/// Result of one load, tagged with the generation that started it.
#[derive(Debug)]
pub struct LoadOutcome {
    pub generation: u64,
    pub result: Result<Vec<RankedTeam>, LoadError>,
}

/// Fetch, parse and rank in one go.
pub fn load_leaderboard(
    source: &dyn SheetSource,
    limit: usize,
) -> Result<Vec<RankedTeam>, LoadError> {
    let text = source.fetch()?;
    let records = parse_csv(&text);
    let parsed = records.len();
    let ranked = rank_top(records, limit);
    info!(parsed, shown = ranked.len(), "leaderboard loaded");
    Ok(ranked)
}

/// Completion handle for one in-flight load.
///
/// Exactly one outcome is sent per handle. Dropping it unfinished reports
/// `LoadError::Abandoned`, so the loading flag is cleared on every exit path.
pub struct InFlight {
    generation: u64,
    tx: Option<Sender<LoadOutcome>>,
}

impl InFlight {
    pub fn new(generation: u64, tx: Sender<LoadOutcome>) -> Self {
        Self {
            generation,
            tx: Some(tx),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn finish(mut self, result: Result<Vec<RankedTeam>, LoadError>) {
        self.send(result);
    }

    fn send(&mut self, result: Result<Vec<RankedTeam>, LoadError>) {
        if let Some(tx) = self.tx.take() {
            // Receiver gone means the window closed; nothing left to update.
            let _ = tx.send(LoadOutcome {
                generation: self.generation,
                result,
            });
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.send(Err(LoadError::Abandoned));
    }
}

/// Run a load on a background thread, reporting through `handle`.
pub fn spawn_load(source: Arc<dyn SheetSource>, limit: usize, handle: InFlight) {
    thread::spawn(move || {
        let result = load_leaderboard(source.as_ref(), limit);
        handle.finish(result);
    });
}
