//! Error types and handling for lazy streams
//!
//! Running out of elements is not an error: `take`, `collect`, `head_or`
//! and friends signal scarcity through shorter-than-requested results.
//! Only precondition violations (demanding a non-empty answer from an
//! exhausted stream) surface as a `StreamError`.

/// Error type for stream operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// A non-empty answer was demanded from an exhausted stream.
    ///
    /// Returned by [`Stream::head`](crate::Stream::head) when no element
    /// is available. Callers that can tolerate emptiness should use
    /// [`Stream::head_or`](crate::Stream::head_or) instead.
    #[error("stream exhausted: no element available")]
    Exhausted,
}

/// Result type for stream operations.
pub type StreamResult<T> = Result<T, StreamError>;
