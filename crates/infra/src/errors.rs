//! Conversions from external infrastructure errors into domain errors.

use shopfront_domain::ShopfrontError;
use tokio::task::JoinError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ShopfrontError);

impl From<InfraError> for ShopfrontError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ShopfrontError> for InfraError {
    fn from(value: ShopfrontError) -> Self {
        InfraError(value)
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(ShopfrontError::Storage(value.to_string()))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(ShopfrontError::Storage(format!("serialization failed: {value}")))
    }
}

/// Map `JoinError` to `ShopfrontError` for blocking storage task failures.
pub(crate) fn map_join_error(err: JoinError) -> ShopfrontError {
    if err.is_cancelled() {
        ShopfrontError::Internal("blocking storage task cancelled".into())
    } else {
        ShopfrontError::Internal(format!("blocking storage task failed: {err}"))
    }
}
