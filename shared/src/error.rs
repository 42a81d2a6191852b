use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextMenuError {
    #[error("Invalid popover options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
    #[error("Unknown placement: {0}")]
    UnknownPlacement(String),
    #[error("Unknown positioning strategy: {0}")]
    UnknownStrategy(String),
    #[error("Selector query `{selector}` failed: {message}")]
    Selector { selector: String, message: String },
}
