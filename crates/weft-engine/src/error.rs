use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum WeftError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("metadata already loaded from {}", .0.display())]
    DuplicateMetaData(PathBuf),
    #[error(transparent)]
    Tangle(#[from] TangleError),
    #[error("rendering failed: {0}")]
    Render(#[from] std::fmt::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum TangleError {
    /// Expanding `id` led back to itself through `chain`.
    #[error("scrap `{id}` expands into itself: {}", .chain.join(" -> "))]
    Cycle { id: String, chain: Vec<String> },
    #[error("formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}
