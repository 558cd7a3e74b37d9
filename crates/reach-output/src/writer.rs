//! The `FieldWriter` trait implemented by all backend writers.

use reach_core::Agent;
use reach_pipeline::Field;

use crate::row::{agent_rows, cell_rows, AgentRow, CellRow};
use crate::OutputResult;

/// Trait implemented by output backends.
pub trait FieldWriter {
    /// Write the input agent population.
    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()>;

    /// Write a batch of field cells.
    fn write_cells(&mut self, rows: &[CellRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Record one complete run: agents, then every cell, then finish.
pub fn write_run<W: FieldWriter>(
    writer: &mut W,
    agents: &[Agent],
    field:  &Field,
) -> OutputResult<()> {
    writer.write_agents(&agent_rows(agents))?;
    writer.write_cells(&cell_rows(field))?;
    writer.finish()
}
