use thiserror::Error;

/// Failures raised below the handler flows.
///
/// The flows never propagate these to the caller: each one is caught at
/// the call site and replaced by a localized message on the status sink.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
