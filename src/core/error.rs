use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    /// The request never got a response: connection refused,
    /// name resolution, broken socket and the like.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// A payload or response body could not be (de)serialized.
    #[error("bad payload: {0}")]
    Payload(#[from] serde_json::Error)
}

pub type ProbeResult<T> = Result<T, ProbeError>;
