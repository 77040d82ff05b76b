use thiserror::Error;

use ue_core::UeError;
use ue_flow::FlowError;
use ue_map::MapError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] UeError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Flow(#[from] FlowError),

    /// The operation needs a prefecture and none has been selected yet.
    #[error("no prefecture selected")]
    NothingSelected,
}

pub type EngineResult<T> = Result<T, EngineError>;
