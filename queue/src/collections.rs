pub mod element;
pub mod queue;

pub use element::Element;
pub use queue::{Cursor, CursorState, Iter, Queue, QueueConfig, QueueConfigOption, QueueError, DEFAULT_CAPACITY};
