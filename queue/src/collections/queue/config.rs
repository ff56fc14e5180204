use crate::collections::queue::QueueConfigOption;

/// Number of slots allocated by [`Queue::new`](crate::Queue::new).
pub const DEFAULT_CAPACITY: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueConfig {
  initial_capacity: usize,
}

impl Default for QueueConfig {
  fn default() -> Self {
    Self {
      initial_capacity: DEFAULT_CAPACITY,
    }
  }
}

impl QueueConfig {
  pub fn from(options: impl IntoIterator<Item = QueueConfigOption>) -> QueueConfig {
    let mut config = QueueConfig::default();
    for option in options {
      option.apply(&mut config);
    }
    config
  }

  pub fn initial_capacity(&self) -> usize {
    self.initial_capacity
  }

  pub fn set_initial_capacity(&mut self, initial_capacity: usize) {
    self.initial_capacity = initial_capacity;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config() {
    let config = QueueConfig::default();
    assert_eq!(config.initial_capacity(), DEFAULT_CAPACITY);
  }

  #[test]
  fn test_from_options_last_one_wins() {
    let config = QueueConfig::from(vec![
      QueueConfigOption::with_initial_capacity(8),
      QueueConfigOption::with_initial_capacity(16),
    ]);
    assert_eq!(config.initial_capacity(), 16);
  }

  #[test]
  fn test_from_no_options() {
    let config = QueueConfig::from(Vec::new());
    assert_eq!(config, QueueConfig::default());
  }
}
