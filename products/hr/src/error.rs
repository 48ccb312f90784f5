use platform_db::DbError;
use thiserror::Error;

pub type HrResult<T> = Result<T, HrError>;

#[derive(Debug, Error)]
pub enum HrError {
    #[error("backing store unavailable: {0}")]
    Backend(#[from] DbError),
    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("seed dataset repeats id {0:?}")]
    DuplicateSeedId(String),
    /// The snapshot write failed; the in-memory change was rolled back.
    #[error("{operation} rolled back: snapshot write failed: {source}")]
    Unpersisted {
        operation: &'static str,
        #[source]
        source: DbError,
    },
}
