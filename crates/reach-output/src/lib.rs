//! `reach-output` — output writers for completed intercept fields.
//!
//! The CSV backend creates two files per run in the configured directory:
//!
//! | File         | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | `agents.csv` | The input agent population (for reproducibility)  |
//! | `cells.csv`  | One row per field cell: winner and arrival time   |
//!
//! All backends implement [`FieldWriter`]; [`write_run`] drives a writer
//! through one complete run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use reach_output::{CsvWriter, write_run};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! write_run(&mut writer, &agents, &field)?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{AgentRow, CellRow};
pub use writer::{FieldWriter, write_run};
