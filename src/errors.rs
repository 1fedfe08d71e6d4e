use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipError {
    #[error("Git operation failed: {0}")]
    Git(String),

    #[error("Git repository error: {0}")]
    Git2(#[from] git2::Error),

    #[error("Failed to extract tracked branch's remote name from '{0}'")]
    UnresolvableMerge(String),

    #[error("No such remote named '{0}'")]
    UnknownRemote(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ClipError>,
    },
}

pub type Result<T> = std::result::Result<T, ClipError>;

/// Attach the operation that was in progress to an error before handing it up.
pub trait Context<T> {
    fn context(self, context: &str) -> Result<T>;
}

impl<T, E: Into<ClipError>> Context<T> for std::result::Result<T, E> {
    fn context(self, context: &str) -> Result<T> {
        self.map_err(|e| ClipError::Context {
            context: context.to_string(),
            source: Box::new(e.into()),
        })
    }
}
