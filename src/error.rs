use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashError>;

#[derive(Debug, Error)]
pub enum DashError {
    /// The terminal could not be acquired; the session cannot start.
    #[error("could not initialize terminal: {0}")]
    Init(#[source] io::Error),

    /// A row asked for more layout units than the grid has.
    #[error("could not create row: size {total} too big")]
    RowOverflow { total: u32 },

    #[error("could not draw dashboard: {0}")]
    Render(#[source] io::Error),

    #[error("unknown key: {0:?}")]
    InvalidKey(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl DashError {
    /// Errors after which the caller may fix its input and try again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DashError::RowOverflow { .. } | DashError::InvalidKey(_))
    }
}
