use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("flow animation configuration error: {0}")]
    Config(String),
}

pub type FlowResult<T> = Result<T, FlowError>;
