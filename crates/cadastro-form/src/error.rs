use thiserror::Error;

/// Errors raised by the host-facing API
///
/// Validation failures are not errors; they are reported through
/// [`ValidationErrors`](crate::ValidationErrors).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
