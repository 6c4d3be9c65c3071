//! Board State Module
//! Loading flag, error banner and displayed teams, updated by explicit events.

use crate::data::{LoadError, LoadOutcome, RankedTeam};
use tracing::{debug, error};

/// The only error text ever shown to the user.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load leaderboard data.";

/// Coarse phase of the board, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardPhase {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Events that move the board between phases.
#[derive(Debug)]
pub enum BoardEvent {
    LoadStarted {
        generation: u64,
    },
    LoadSucceeded {
        generation: u64,
        teams: Vec<RankedTeam>,
    },
    LoadFailed {
        generation: u64,
        error: LoadError,
    },
}

impl From<LoadOutcome> for BoardEvent {
    fn from(outcome: LoadOutcome) -> Self {
        let generation = outcome.generation;
        match outcome.result {
            Ok(teams) => BoardEvent::LoadSucceeded { generation, teams },
            Err(error) => BoardEvent::LoadFailed { generation, error },
        }
    }
}

/// Everything the leaderboard view renders from.
#[derive(Debug, Default)]
pub struct BoardState {
    pub teams: Vec<RankedTeam>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    /// Generation of the most recently started load.
    latest_generation: u64,
    has_loaded: bool,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> BoardPhase {
        if self.is_loading {
            BoardPhase::Loading
        } else if self.error_message.is_some() {
            BoardPhase::Errored
        } else if self.has_loaded {
            BoardPhase::Loaded
        } else {
            BoardPhase::Idle
        }
    }

    /// Apply one event. Completions from a superseded load are ignored.
    pub fn apply(&mut self, event: BoardEvent) {
        match event {
            BoardEvent::LoadStarted { generation } => {
                self.latest_generation = generation;
                self.is_loading = true;
                self.error_message = None;
            }
            BoardEvent::LoadSucceeded { generation, teams } => {
                if generation != self.latest_generation {
                    debug!(generation, latest = self.latest_generation, "discarding stale leaderboard");
                    return;
                }
                self.teams = teams;
                self.has_loaded = true;
                self.is_loading = false;
            }
            BoardEvent::LoadFailed {
                generation,
                error: cause,
            } => {
                if generation != self.latest_generation {
                    debug!(generation, latest = self.latest_generation, error = %cause, "discarding stale load failure");
                    return;
                }
                error!(generation, error = %cause, "leaderboard load failed");
                // Previously shown teams stay on the board.
                self.error_message = Some(LOAD_ERROR_MESSAGE.to_string());
                self.is_loading = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FetchError;
    use reqwest::StatusCode;

    fn board(names: &[&str]) -> Vec<RankedTeam> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| RankedTeam {
                rank: i + 1,
                team: name.to_string(),
                score: (10 - i) as f64,
            })
            .collect()
    }

    fn http_failure() -> LoadError {
        LoadError::Fetch(FetchError::Status(StatusCode::SERVICE_UNAVAILABLE))
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = BoardState::new();
        assert_eq!(state.phase(), BoardPhase::Idle);
        assert!(state.teams.is_empty());
        assert!(!state.is_loading);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn success_replaces_board_and_clears_loading() {
        let mut state = BoardState::new();
        state.apply(BoardEvent::LoadStarted { generation: 1 });
        assert_eq!(state.phase(), BoardPhase::Loading);

        state.apply(BoardEvent::LoadSucceeded {
            generation: 1,
            teams: board(&["A", "B"]),
        });
        assert_eq!(state.phase(), BoardPhase::Loaded);
        assert_eq!(state.teams, board(&["A", "B"]));
    }

    #[test]
    fn failure_keeps_previous_board() {
        let mut state = BoardState::new();
        state.apply(BoardEvent::LoadStarted { generation: 1 });
        state.apply(BoardEvent::LoadSucceeded {
            generation: 1,
            teams: board(&["A"]),
        });

        state.apply(BoardEvent::LoadStarted { generation: 2 });
        state.apply(BoardEvent::LoadFailed {
            generation: 2,
            error: http_failure(),
        });

        assert_eq!(state.phase(), BoardPhase::Errored);
        assert_eq!(state.error_message.as_deref(), Some(LOAD_ERROR_MESSAGE));
        assert_eq!(state.teams, board(&["A"]));
        assert!(!state.is_loading);
    }

    #[test]
    fn failure_before_any_load_leaves_board_empty() {
        let mut state = BoardState::new();
        state.apply(BoardEvent::LoadStarted { generation: 1 });
        state.apply(BoardEvent::LoadFailed {
            generation: 1,
            error: http_failure(),
        });

        assert!(state.teams.is_empty());
        assert_eq!(state.error_message.as_deref(), Some(LOAD_ERROR_MESSAGE));
    }

    #[test]
    fn new_load_clears_error_banner() {
        let mut state = BoardState::new();
        state.apply(BoardEvent::LoadStarted { generation: 1 });
        state.apply(BoardEvent::LoadFailed {
            generation: 1,
            error: LoadError::Abandoned,
        });
        state.apply(BoardEvent::LoadStarted { generation: 2 });

        assert!(state.error_message.is_none());
        assert!(state.is_loading);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut state = BoardState::new();
        state.apply(BoardEvent::LoadStarted { generation: 1 });
        state.apply(BoardEvent::LoadStarted { generation: 2 });

        state.apply(BoardEvent::LoadSucceeded {
            generation: 2,
            teams: board(&["Fresh"]),
        });
        state.apply(BoardEvent::LoadSucceeded {
            generation: 1,
            teams: board(&["Stale"]),
        });

        assert_eq!(state.teams, board(&["Fresh"]));
        assert_eq!(state.phase(), BoardPhase::Loaded);
    }

    #[test]
    fn stale_failure_does_not_raise_banner() {
        let mut state = BoardState::new();
        state.apply(BoardEvent::LoadStarted { generation: 1 });
        state.apply(BoardEvent::LoadStarted { generation: 2 });
        state.apply(BoardEvent::LoadSucceeded {
            generation: 2,
            teams: board(&["Fresh"]),
        });

        state.apply(BoardEvent::LoadFailed {
            generation: 1,
            error: http_failure(),
        });

        assert!(state.error_message.is_none());
        assert_eq!(state.phase(), BoardPhase::Loaded);
        assert_eq!(state.teams, board(&["Fresh"]));
    }

    #[test]
    fn outcomes_map_to_events() {
        let mut state = BoardState::new();
        state.apply(BoardEvent::LoadStarted { generation: 4 });
        state.apply(
            LoadOutcome {
                generation: 4,
                result: Ok(board(&["A", "B", "C"])),
            }
            .into(),
        );
        assert_eq!(state.teams.len(), 3);

        state.apply(BoardEvent::LoadStarted { generation: 5 });
        state.apply(
            LoadOutcome {
                generation: 5,
                result: Err(http_failure()),
            }
            .into(),
        );
        assert_eq!(state.teams.len(), 3);
        assert_eq!(state.phase(), BoardPhase::Errored);
    }

    #[test]
    fn loading_stays_set_until_latest_load_finishes() {
        let mut state = BoardState::new();
        state.apply(BoardEvent::LoadStarted { generation: 1 });
        state.apply(BoardEvent::LoadStarted { generation: 2 });

        state.apply(BoardEvent::LoadFailed {
            generation: 1,
            error: http_failure(),
        });
        assert!(state.is_loading);
        assert!(state.error_message.is_none());

        state.apply(BoardEvent::LoadSucceeded {
            generation: 2,
            teams: board(&["A"]),
        });
        assert!(!state.is_loading);
    }
}
