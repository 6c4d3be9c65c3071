//! GUI module - User interface components

mod app;
mod board_panel;
mod header;

pub use app::LeaderboardApp;
pub use board_panel::{BoardPanel, BoardPanelAction};
pub use header::{Header, HeaderAction};
