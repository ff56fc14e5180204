use thiserror::Error;

/// An error that occurs when a queue or cursor operation fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
  /// A constructor argument was rejected.
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),
  /// `remove` or `peek` found no retrievable element.
  #[error("The queue is empty")]
  EmptyContainer,
  /// A cursor was used after the queue changed, or outside its positioned range.
  #[error("Invalid cursor state: {0}")]
  InvalidState(String),
}

static_assertions::assert_impl_all!(QueueError: Send, Sync, std::error::Error);

impl QueueError {
  pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
    QueueError::InvalidArgument(message.into())
  }

  pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
    QueueError::InvalidState(message.into())
  }
}

#[cfg(test)]
mod tests {
  use super::QueueError;

  #[test]
  fn test_display_messages() {
    assert_eq!(
      QueueError::invalid_argument("capacity must be non-negative").to_string(),
      "Invalid argument: capacity must be non-negative"
    );
    assert_eq!(QueueError::EmptyContainer.to_string(), "The queue is empty");
    assert_eq!(
      QueueError::invalid_state("queue was modified").to_string(),
      "Invalid cursor state: queue was modified"
    );
  }
}
