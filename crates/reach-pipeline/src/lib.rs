//! `reach-pipeline` — the parallel field-evaluation pipeline.
//!
//! # Fan-out / fan-in
//!
//! ```text
//! distributor ──column indices──▶ work queue ──▶ worker 0 ─┐
//!   (0..width, exactly once)      (mpsc, shared) worker …  ├─columns─▶ collector ─▶ Field
//!                                                worker W−1┘           (single thread,
//!                                                                      slot per x index)
//! ```
//!
//! - The **distributor** sends every column index once, then closes the work
//!   queue; a closed queue is the workers' exit signal.
//! - Each of the **W workers** is a scoped thread looping over the shared
//!   queue.  A worker owns each column it evaluates exclusively and hands it
//!   off — ownership moves create → evaluate → collect, never shared.
//! - The **collector** drains completed columns in whatever order they
//!   arrive and slots each by its x index, so scheduling order can never
//!   leak into the result.  It is the only writer of the field and runs on
//!   the calling thread, so the assembly needs no lock.
//!
//! Workers share the agent list as a plain `&[Agent]` borrow: nothing writes
//! to it during a run.
//!
//! # Determinism
//!
//! Every cell's value is a pure function of (cell, agent list).  Repeated
//! runs with any worker count produce byte-identical fields.
//!
//! # Cargo features
//!
//! | Feature | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `CellResult`/`Field`.    |

pub mod column;
pub mod error;
pub mod field;
pub mod observer;
pub mod pipeline;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use column::{CellResult, Column, evaluate_column};
pub use error::{PipelineError, PipelineResult};
pub use field::{Field, FieldBuilder};
pub use observer::{NoopObserver, PipelineObserver};
pub use pipeline::Pipeline;
