use thiserror::Error;

/// Returned by [`Maybe::try_get`](crate::Maybe::try_get) when no value is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("value is absent")]
pub struct AbsentError;
