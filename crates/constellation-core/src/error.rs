pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("contribution response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("contribution response has no calendar: {message}")]
    MissingCalendar { message: String },
}
