//! Grid configuration and the cell → field coordinate mapping.
//!
//! # Design
//!
//! All run parameters live in one explicit [`GridConfig`] value handed to the
//! pipeline entry point — there is no process-wide state.  Validation is
//! strict and happens before any work is dispatched: a zero dimension, scale
//! or worker count is rejected, never clamped.
//!
//! # Coordinate mapping
//!
//! A cell `(x, y)` with integer grid indices maps to continuous field
//! coordinates as
//!
//!   x' = (x − width/2) / scale_factor
//!   y' =  y            / scale_factor
//!
//! The horizontal recentering makes the continuous x-span symmetric about
//! the field's midline; y is left anchored at 0.  The scale factor affects
//! only this conversion — the number of cells evaluated is always
//! `width × height`.

use crate::error::{ConfigError, CoreResult};
use crate::point::FieldPoint;

/// Dimensions, coordinate scale, and worker count for one field computation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Number of columns.  Must be positive.
    pub width: u32,

    /// Number of rows per column.  Must be positive.
    pub height: u32,

    /// Grid-index → field-coordinate divisor.  Must be positive.  1 means
    /// one cell per field unit.
    pub scale_factor: u32,

    /// Worker thread count.  `None` uses all available hardware parallelism.
    /// `Some(0)` is rejected by [`validate`][Self::validate].
    pub workers: Option<usize>,
}

impl GridConfig {
    /// A `width × height` grid at scale 1 with default worker count.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, scale_factor: 1, workers: None }
    }

    /// Reject non-positive dimensions, scale, or worker count.
    ///
    /// Called by the pipeline before any thread spawns; a malformed config
    /// never produces partial work.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension { what: "width" });
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroDimension { what: "height" });
        }
        if self.scale_factor == 0 {
            return Err(ConfigError::ZeroDimension { what: "scale factor" });
        }
        if self.workers == Some(0) {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }

    /// Resolved worker count: the configured value, or all available
    /// hardware parallelism when unset.
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(std::num::NonZeroUsize::get)
                .unwrap_or(1)
        })
    }

    /// Map cell indices to continuous field coordinates (see module docs).
    #[inline]
    pub fn field_point(&self, x: u32, y: u32) -> FieldPoint {
        let scale = f64::from(self.scale_factor);
        FieldPoint {
            x: (f64::from(x) - f64::from(self.width) / 2.0) / scale,
            y: f64::from(y) / scale,
        }
    }

    /// Total cell count, `width × height`.
    #[inline]
    pub fn total_cells(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}
