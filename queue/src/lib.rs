pub mod collections;

pub use collections::{
  Cursor, CursorState, Element, Iter, Queue, QueueConfig, QueueConfigOption, QueueError, DEFAULT_CAPACITY,
};
