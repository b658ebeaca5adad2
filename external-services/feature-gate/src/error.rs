use thiserror::Error;

#[derive(Error, Debug)]
pub enum GateError {
    #[error("Gate request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Gate service returned an invalid response: {0}")]
    InvalidResponse(String),

    #[error("Unknown gate: {0}")]
    UnknownGate(String),

    #[error("Gate client configuration error: {0}")]
    ConfigurationError(String),
}

pub type GateResult<T> = Result<T, GateError>;
