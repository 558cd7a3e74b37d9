//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agents.csv`
//! - `cells.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::row::{AgentRow, CellRow};
use crate::writer::FieldWriter;
use crate::OutputResult;

/// Writes run output to two CSV files.
pub struct CsvWriter {
    agents:   Writer<File>,
    cells:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut agents = Writer::from_path(dir.join("agents.csv"))?;
        agents.write_record(["agent_id", "x", "y", "vx", "vy", "max_speed", "max_accel"])?;

        let mut cells = Writer::from_path(dir.join("cells.csv"))?;
        cells.write_record(["x", "y", "time_secs", "winner"])?;

        Ok(Self {
            agents,
            cells,
            finished: false,
        })
    }
}

impl FieldWriter for CsvWriter {
    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()> {
        for row in rows {
            self.agents.write_record(&[
                row.agent_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.vx.to_string(),
                row.vy.to_string(),
                row.max_speed.to_string(),
                row.max_accel.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_cells(&mut self, rows: &[CellRow]) -> OutputResult<()> {
        for row in rows {
            // Unset cells: empty winner column, NaN time.
            let winner = if row.winner == u32::MAX {
                String::new()
            } else {
                row.winner.to_string()
            };
            self.cells.write_record(&[
                row.x.to_string(),
                row.y.to_string(),
                row.time_secs.to_string(),
                winner,
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.agents.flush()?;
        self.cells.flush()?;
        Ok(())
    }
}
