/// Application-level errors
///
/// The public HTTP surface never maps these to error responses: the buy and
/// predict endpoints report their failures as JSON payloads with HTTP 200,
/// and image-lookup failures are absorbed into a placeholder URL before
/// they reach a handler. The taxonomy exists for the fallible internals
/// (outbound HTTP, configuration).
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("image search credentials not configured")]
    MissingCredentials,
}

pub type AppResult<T> = Result<T, AppError>;
