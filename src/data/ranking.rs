//! Ranking Module
//! Orders team records by points and cuts the board down to its display size.

use super::parser::TeamRecord;

/// Number of teams shown on the board.
pub const DEFAULT_DISPLAY_LIMIT: usize = 4;

/// A team record with its 1-based board position.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTeam {
    pub rank: usize,
    pub team: String,
    pub score: f64,
}

impl RankedTeam {
    /// Score as shown on the board: whole numbers without a fraction.
    pub fn score_label(&self) -> String {
        format_score(self.score)
    }
}

/// Sort by score descending, assign ranks, keep the first `limit` entries.
///
/// Equal scores keep their input order.
pub fn rank_top(mut records: Vec<TeamRecord>, limit: usize) -> Vec<RankedTeam> {
    records.sort_by(|a, b| b.score.total_cmp(&a.score));

    records
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(idx, record)| RankedTeam {
            rank: idx + 1,
            team: record.team,
            score: record.score,
        })
        .collect()
}

/// Render a score the way a spreadsheet user typed it.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{}", score as i64)
    } else {
        format!("{}", score)
    }
}
