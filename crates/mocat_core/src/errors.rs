use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoError {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Persist: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("No usable catalog at {0}")]
    Missing(std::path::PathBuf),

    #[error("Bad magic or revision")]
    BadHeader,

    #[error("Truncated catalog: {size} bytes, need {required}")]
    Truncated { size: u64, required: i64 },

    #[error("Seek to negative offset {0}")]
    BadSeek(i64),

    #[error("Corrupt cache: {0}")]
    CacheCorrupt(&'static str),

    #[error("Unsupported cache version {0}")]
    CacheVersion(u16),
}

pub type Result<T> = std::result::Result<T, MoError>;
