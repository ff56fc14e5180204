use crate::collections::queue::QueueConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueConfigOption {
  SetInitialCapacity(usize),
}

impl QueueConfigOption {
  pub fn apply(&self, config: &mut QueueConfig) {
    match self {
      QueueConfigOption::SetInitialCapacity(initial_capacity) => {
        config.set_initial_capacity(*initial_capacity);
      }
    }
  }

  pub fn with_initial_capacity(initial_capacity: usize) -> QueueConfigOption {
    QueueConfigOption::SetInitialCapacity(initial_capacity)
  }
}
