#[derive(Debug, thiserror::Error)]
pub enum TrafficViewError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error {code}: {msg}")]
    Api { code: i64, msg: String },

    #[error("Unexpected payload: {0}")]
    Shape(String),
}

pub type Result<T> = std::result::Result<T, TrafficViewError>;
