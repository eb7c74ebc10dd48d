use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StubError {
    #[error("no place matches {0:?}")]
    UnknownPlace(String),
}
