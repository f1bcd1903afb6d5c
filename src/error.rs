//! Pipeline error types.
//!
//! Failures are tagged by kind (transport per service, format-contract
//! violation, configuration) so callers can distinguish them, while each
//! kind renders as the single generic message shown to the user.

use thiserror::Error;

/// A failure talking to a provider endpoint.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("response contained no content")]
    EmptyResponse,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A failure anywhere in the translate, summarize, speak chain.
///
/// The run is all-or-nothing: the first error aborts the chain and no
/// partial results are surfaced.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("translation failed")]
    Translation(#[source] ProviderError),

    #[error("summary generation failed")]
    Summary(#[source] ProviderError),

    #[error("speech generation failed")]
    Speech(#[source] ProviderError),

    /// The model responded, but the output violated the expected format.
    /// Never retried or auto-corrected.
    #[error("{0}")]
    FormatViolation(String),

    #[error("configuration error: {0}")]
    Config(String),
}
