use thiserror::Error;

/// Failure to translate a single phrase.
///
/// These never abort a run; the pipeline logs them and moves on to the next entry.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The service answered with something other than `200 OK`.
    #[error("translation service returned HTTP {status}")]
    Status { status: u16 },

    /// The request never got a response.
    #[error("failed to reach translation service: {0}")]
    Transport(reqwest::Error),

    /// A `200 OK` response whose body is not the expected JSON.
    #[error("unexpected response from translation service: {0}")]
    Decode(reqwest::Error),

    /// A `200 OK` response with an empty `translations` array.
    #[error("translation service returned no translations")]
    EmptyResult,
}
