//! Progress callbacks for pipeline runs.

/// Callbacks invoked by [`Pipeline::run`][crate::Pipeline::run] as the
/// computation progresses.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Every callback fires on the calling
/// thread (the collector side of the pipeline), so implementors need no
/// `Sync` bound and may hold plain mutable state.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { every: usize }
///
/// impl PipelineObserver for ProgressPrinter {
///     fn on_column(&mut self, _x: u32, completed: usize) {
///         if completed % self.every == 0 {
///             println!("{completed} columns done");
///         }
///     }
/// }
/// ```
pub trait PipelineObserver {
    /// Called once before any work is dispatched.
    fn on_start(&mut self, _total_columns: u32) {}

    /// Called as each completed column is collected.
    ///
    /// `x` is the column's index; `completed` is the number of columns
    /// collected so far (including this one).  Columns arrive in no
    /// particular x order.
    fn on_column(&mut self, _x: u32, _completed: usize) {}

    /// Called once after the field has been fully assembled.
    fn on_complete(&mut self, _total_columns: u32) {}
}

/// A [`PipelineObserver`] that does nothing.  Use when you need to call
/// `run` but don't want progress callbacks.
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}
