//! Plain data row types written by output backends.

use reach_core::Agent;
use reach_pipeline::Field;

/// One agent of the input population, recorded alongside the field so a run
/// can be reproduced from its output directory alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentRow {
    pub agent_id:  u32,
    pub x:         f64,
    pub y:         f64,
    pub vx:        f64,
    pub vy:        f64,
    pub max_speed: f64,
    pub max_accel: f64,
}

impl From<&Agent> for AgentRow {
    fn from(agent: &Agent) -> Self {
        Self {
            agent_id:  agent.id.0,
            x:         agent.pos.x,
            y:         agent.pos.y,
            vx:        agent.vel.vx,
            vy:        agent.vel.vy,
            max_speed: agent.max_speed,
            max_accel: agent.max_accel,
        }
    }
}

/// One cell of the completed field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRow {
    pub x:         u32,
    pub y:         u32,
    /// Arrival time in seconds; NaN when no agent could be timed.
    pub time_secs: f64,
    /// Winning agent id; `u32::MAX` when the cell is unset.
    pub winner:    u32,
}

/// Flatten a field into cell rows in (x, then y) order.
pub fn cell_rows(field: &Field) -> Vec<CellRow> {
    field
        .iter_cells()
        .map(|(x, y, cell)| CellRow {
            x,
            y,
            time_secs: cell.time_secs,
            winner:    cell.winner.0,
        })
        .collect()
}

/// Convert an agent slice into rows.
pub fn agent_rows(agents: &[Agent]) -> Vec<AgentRow> {
    agents.iter().map(AgentRow::from).collect()
}
