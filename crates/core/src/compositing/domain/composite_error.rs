use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompositeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl CompositeError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        CompositeError::InvalidInput(reason.into())
    }
}
