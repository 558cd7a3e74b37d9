use reach_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("grid configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("column {x} missing at field assembly — a worker exited without delivering it")]
    MissingColumn { x: u32 },
}

pub type PipelineResult<T> = Result<T, PipelineError>;
