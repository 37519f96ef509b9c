use labeling_core::ConstraintOperationError;
use thiserror::Error;

pub(crate) type LabelingResult<T> = Result<T, LabelingError>;

#[derive(Error, Debug)]
pub(crate) enum LabelingError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Failed to build the model, more details: {0}")]
    Model(#[from] ConstraintOperationError),
    #[error("The instance is invalid: {0}")]
    InvalidInstance(String),
}

impl LabelingError {
    pub(crate) fn invalid_instance(reason: impl Into<String>) -> Self {
        Self::InvalidInstance(reason.into())
    }
}
