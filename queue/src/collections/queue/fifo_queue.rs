use std::fmt::Display;
use std::mem;

use crate::collections::element::Element;
use crate::collections::queue::{Cursor, Iter, QueueConfig, QueueError, DEFAULT_CAPACITY};

/// A growable first-in-first-out queue over a single contiguous buffer.
///
/// The most recently inserted element lives in slot `0` and older elements sit at
/// increasing indices, so the oldest element is always the highest occupied slot.
/// Every structural mutation bumps [`Queue::version`], which invalidates outstanding
/// [`Cursor`]s.
///
/// # Count and length
///
/// [`Queue::count`] keeps its historical meaning: it grows on every insertion and is only
/// brought back in line with the occupied region by [`Queue::trim_to_actual_size`].
/// [`Queue::remove`] does not decrement it. Use [`Queue::len`] for the number of elements
/// that can still be removed.
#[derive(Debug, Clone)]
pub struct Queue<T> {
  buffer: Box<[T]>,
  count: usize,
  head: Option<usize>,
  version: u64,
}

impl<T: Element> Queue<T> {
  /// Creates an empty queue with [`DEFAULT_CAPACITY`] slots.
  pub fn new() -> Self {
    Self::from_capacity(DEFAULT_CAPACITY)
  }

  /// Creates an empty queue with exactly `capacity` slots.
  ///
  /// # Errors
  /// - `QueueError::InvalidArgument` - If `capacity` is negative or does not fit in `usize`.
  pub fn with_capacity<C>(capacity: C) -> Result<Self, QueueError>
  where
    C: TryInto<usize> + Display + Copy, {
    let slots = capacity
      .try_into()
      .map_err(|_| QueueError::invalid_argument(format!("capacity must be non-negative, got {}", capacity)))?;
    Ok(Self::from_capacity(slots))
  }

  /// Creates an empty queue sized by `config`.
  pub fn with_config(config: &QueueConfig) -> Self {
    Self::from_capacity(config.initial_capacity())
  }

  /// Creates a queue holding the elements of `source`, enqueued in iteration order.
  ///
  /// # Errors
  /// - `QueueError::InvalidArgument` - If `source` is `None`.
  pub fn from_source<I>(source: Option<I>) -> Result<Self, QueueError>
  where
    I: IntoIterator<Item = T>, {
    let source = source.ok_or_else(|| QueueError::invalid_argument("can't create a queue from an absent source"))?;
    let mut queue = Self::new();
    queue.extend(source);
    queue.version = 1;
    Ok(queue)
  }

  fn from_capacity(capacity: usize) -> Self {
    Self {
      buffer: Self::alloc_buffer(capacity),
      count: 0,
      head: None,
      version: 1,
    }
  }

  fn alloc_buffer(capacity: usize) -> Box<[T]> {
    let mut vec = Vec::with_capacity(capacity);
    vec.resize_with(capacity, T::default);
    vec.into_boxed_slice()
  }

  fn grow(&mut self) {
    let old_capacity = self.buffer.len();
    let new_capacity = old_capacity.saturating_mul(2).max(1);
    let mut slots = mem::take(&mut self.buffer).into_vec();
    slots.resize_with(new_capacity, T::default);
    self.buffer = slots.into_boxed_slice();
    tracing::debug!("Queue::grow: {} -> {}", old_capacity, new_capacity);
  }

  /// Inserts `element` as the most recent entry.
  pub fn insert(&mut self, element: T) {
    if self.count == self.buffer.len() {
      self.grow();
    }
    let len = self.len();
    // Slot `len` is unoccupied; rotating brings it to the front for the new element.
    self.buffer[..=len].rotate_right(1);
    self.buffer[0] = element;
    self.head = Some(len);
    self.count += 1;
    self.version += 1;
    tracing::trace!("Queue::insert: len = {}, version = {}", len + 1, self.version);
  }

  /// Removes and returns the oldest element, leaving its slot at `T::default()`.
  ///
  /// # Errors
  /// - `QueueError::EmptyContainer` - If no element is left to remove.
  pub fn remove(&mut self) -> Result<T, QueueError> {
    let head = self.head.ok_or(QueueError::EmptyContainer)?;
    let element = mem::take(&mut self.buffer[head]);
    self.head = head.checked_sub(1);
    self.version += 1;
    tracing::trace!("Queue::remove: len = {}, version = {}", head, self.version);
    Ok(element)
  }

  /// Shrinks the buffer to the occupied region and resets `count` to match it.
  pub fn trim_to_actual_size(&mut self) {
    let len = self.len();
    let mut slots = mem::take(&mut self.buffer).into_vec();
    slots.truncate(len);
    self.buffer = slots.into_boxed_slice();
    self.count = len;
    self.version += 1;
    tracing::debug!("Queue::trim_to_actual_size: capacity = {}", len);
  }
}

impl<T> Queue<T> {
  /// Returns the oldest element without removing it.
  ///
  /// # Errors
  /// - `QueueError::EmptyContainer` - If no element is left to peek.
  pub fn peek(&self) -> Result<&T, QueueError> {
    self.head.map(|head| &self.buffer[head]).ok_or(QueueError::EmptyContainer)
  }

  /// Returns whether an occupied slot compares equal to `element`.
  pub fn contains(&self, element: &T) -> bool
  where
    T: PartialEq, {
    self.occupied().iter().any(|e| e == element)
  }

  /// Returns a copy of every slot, including the unoccupied ones past the oldest element.
  pub fn to_array(&self) -> Box<[T]>
  where
    T: Clone, {
    self.buffer.clone()
  }

  pub fn count(&self) -> usize {
    self.count
  }

  pub fn len(&self) -> usize {
    self.head.map_or(0, |head| head + 1)
  }

  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  pub fn capacity(&self) -> usize {
    self.buffer.len()
  }

  /// Index of the slot holding the oldest element, `None` when nothing is retrievable.
  pub fn oldest_index(&self) -> Option<usize> {
    self.head
  }

  pub fn version(&self) -> u64 {
    self.version
  }

  /// Creates a fail-fast cursor over the current slots.
  pub fn cursor(&self) -> Cursor {
    Cursor::new(self)
  }

  /// Iterates the slots in buffer order, newest first.
  pub fn iter(&self) -> Iter<'_, T> {
    Iter::new(self)
  }

  pub(crate) fn slot(&self, index: usize) -> Option<&T> {
    self.buffer.get(index)
  }

  fn occupied(&self) -> &[T] {
    &self.buffer[..self.len()]
  }
}

impl<T: Element> Default for Queue<T> {
  fn default() -> Self {
    Queue::new()
  }
}

impl<T: Element> Extend<T> for Queue<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for element in iter {
      self.insert(element);
    }
  }
}

impl<T: Element> FromIterator<T> for Queue<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut queue = Queue::new();
    queue.extend(iter);
    queue
  }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
  type IntoIter = Iter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
