use engine::MatchError;
use thiserror::Error;

pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Match(#[from] MatchError),
}

impl DatabaseError {
    pub fn io(path: &str, source: std::io::Error) -> Self {
        DatabaseError::Io {
            path: path.to_string(),
            source,
        }
    }
}
