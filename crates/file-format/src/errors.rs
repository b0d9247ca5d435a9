use std::path::PathBuf;

/// Errors while writing a scene file.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("failed to write scene file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write scene: {0}")]
    Write(#[from] std::io::Error),
}
