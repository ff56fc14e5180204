mod config;
mod config_option;
mod cursor;
mod fifo_queue;
mod queue_error;

pub use self::{
  config::{QueueConfig, DEFAULT_CAPACITY},
  config_option::QueueConfigOption,
  cursor::{Cursor, CursorState, Iter},
  fifo_queue::Queue,
  queue_error::QueueError,
};
