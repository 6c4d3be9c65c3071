//! Board module - leaderboard view state

mod state;

pub use state::{BoardEvent, BoardPhase, BoardState, LOAD_ERROR_MESSAGE};
