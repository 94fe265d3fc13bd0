use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no token filter registered under name '{0}'")]
    UnknownFilter(String),
    #[error("token filter '{0}' is already registered")]
    DuplicateFilter(String),
}

pub type Result<T> = std::result::Result<T, Error>;
