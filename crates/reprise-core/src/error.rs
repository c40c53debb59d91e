use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no clickable target matches `{0}`")]
    UnknownTarget(String),
    #[error("target `{0}` has no click handler")]
    NoHandler(String),
    #[error("render backend failed: {0}")]
    Render(#[from] std::io::Error),
}
