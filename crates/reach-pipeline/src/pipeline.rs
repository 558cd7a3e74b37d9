//! The `Pipeline` struct: distributor, worker pool, and collector.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;

use reach_core::{Agent, GridConfig};

use crate::column::{Column, evaluate_column};
use crate::field::{Field, FieldBuilder};
use crate::observer::PipelineObserver;
use crate::PipelineResult;

/// A validated, ready-to-run field-evaluation pipeline.
///
/// Construction validates the grid configuration — a malformed config is
/// rejected before any worker exists.  `run` may then be called any number
/// of times, each with its own agent list.
pub struct Pipeline {
    grid:    GridConfig,
    workers: usize,
}

impl Pipeline {
    /// Validate `grid` and resolve the worker count.
    pub fn new(grid: GridConfig) -> PipelineResult<Self> {
        grid.validate()?;
        let workers = grid.worker_count();
        Ok(Self { grid, workers })
    }

    #[inline]
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// The resolved worker thread count for this pipeline.
    #[inline]
    pub fn worker_count(&self) -> usize {
        self.workers
    }

    /// Compute the full time-to-intercept field for `agents`.
    ///
    /// Spawns the worker pool, dispatches every column index exactly once,
    /// collects completed columns in arrival order, and returns the
    /// assembled [`Field`].  An empty agent list is not an error: every
    /// cell simply comes back unset.
    ///
    /// The returned field is complete — a column lost to a dying worker
    /// surfaces as [`PipelineError::MissingColumn`][crate::PipelineError],
    /// never as a partial field.
    pub fn run<O: PipelineObserver>(
        &self,
        agents:   &[Agent],
        observer: &mut O,
    ) -> PipelineResult<Field> {
        let width = self.grid.width;
        let mut builder = FieldBuilder::new(&self.grid);
        observer.on_start(width);

        // Work queue: dropping the sender after dispatch is the "no more
        // work" signal workers exit on.  The single receiver is shared
        // behind a mutex so whichever worker is idle takes the next index.
        let (work_tx, work_rx) = mpsc::channel::<u32>();
        let work_rx = Arc::new(Mutex::new(work_rx));

        // Result queue: one sender clone per worker; the collector's recv
        // loop ends when the last worker exits and drops its clone.
        let (done_tx, done_rx) = mpsc::channel::<Column>();

        thread::scope(|s| {
            for _ in 0..self.workers {
                let work_rx = Arc::clone(&work_rx);
                let done_tx = done_tx.clone();
                let grid = &self.grid;

                s.spawn(move || {
                    loop {
                        // Hold the queue lock for the dequeue only, not the
                        // evaluation.
                        let next = match work_rx.lock() {
                            Ok(rx) => rx.recv(),
                            Err(_) => break, // a sibling worker panicked
                        };
                        let Ok(x) = next else {
                            break; // queue closed: no more columns
                        };

                        let column = evaluate_column(x, grid, agents);
                        if done_tx.send(column).is_err() {
                            break; // collector is gone
                        }
                    }
                });
            }
            // The workers now hold the only result senders and the only
            // receiver handles.
            drop(done_tx);
            drop(work_rx);

            // Distributor: each column index exactly once, then close.
            for x in 0..width {
                if work_tx.send(x).is_err() {
                    break; // every worker already exited; finish() will report
                }
            }
            drop(work_tx);

            // Collector: the single writer of the field, on this thread.
            for column in &done_rx {
                let x = column.x;
                builder.insert(column);
                observer.on_column(x, builder.filled());
            }
        });

        let field = builder.finish()?;
        observer.on_complete(width);
        Ok(field)
    }
}
