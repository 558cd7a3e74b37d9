//! Per-column evaluation: the inner row × agent loops.

use reach_core::{Agent, AgentId, GridConfig};
use reach_solver::time_to_point;

/// The outcome for a single cell: the fastest agent and its arrival time.
///
/// A cell for which no agent could be timed stays *unset*: `winner` is
/// [`AgentId::INVALID`] and `time_secs` is NaN.  The explicit sentinel means
/// a genuine near-zero arrival time is an ordinary winning value, not a
/// marker collision.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellResult {
    /// Minimum arrival time over all agents, seconds.  NaN when unset.
    pub time_secs: f64,

    /// The first agent achieving the minimum.  `INVALID` when unset.
    pub winner: AgentId,
}

impl CellResult {
    /// The "no candidate" sentinel.
    pub const UNSET: CellResult = CellResult {
        time_secs: f64::NAN,
        winner:    AgentId::INVALID,
    };

    #[inline]
    pub fn is_unset(&self) -> bool {
        self.winner == AgentId::INVALID
    }
}

/// One fully evaluated column of the field.
///
/// Created whole by exactly one worker and never touched after the hand-off
/// to the collector.  `cells[y]` is the result for row `y`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// This column's x index in `[0, width)`.
    pub x: u32,
    /// One result per y index, in y order.
    pub cells: Vec<CellResult>,
}

/// Evaluate every cell of column `x` against the full agent list.
///
/// Agent iteration order is list order; the first agent achieving the
/// strictly smallest time wins, so ties keep the earliest agent.  NaN solver
/// results are never candidates.  Always returns a complete column —
/// per-cell solver failures surface as unset cells, never as a short or
/// aborted column.
pub fn evaluate_column(x: u32, grid: &GridConfig, agents: &[Agent]) -> Column {
    let mut cells = Vec::with_capacity(grid.height as usize);

    for y in 0..grid.height {
        let point = grid.field_point(x, y);

        let mut best: Option<CellResult> = None;
        for agent in agents {
            let t = time_to_point(point, agent);
            if t.is_nan() {
                continue;
            }
            if best.is_none_or(|b| t < b.time_secs) {
                best = Some(CellResult { time_secs: t, winner: agent.id });
            }
        }

        cells.push(best.unwrap_or(CellResult::UNSET));
    }

    Column { x, cells }
}
