use std::iter::FusedIterator;

use crate::collections::queue::{Queue, QueueError};

/// Position of a [`Cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
  NotStarted,
  Positioned(usize),
  Exhausted,
}

/// A fail-fast, read-only cursor over the slots of a [`Queue`].
///
/// The cursor does not borrow the queue. It records the queue's version and oldest index
/// when created and takes the queue on every call, so a structural mutation made in the
/// meantime is reported as `QueueError::InvalidState` on next use. Versions are compared
/// by value: the cursor must be used with the queue it was created from.
///
/// Slots are visited in buffer order, `0..count`, which is newest element first. A cursor
/// created while the oldest index is `0` or absent is exhausted on its first advance.
#[derive(Debug, Clone)]
pub struct Cursor {
  version: u64,
  oldest_index: Option<usize>,
  state: CursorState,
}

impl Cursor {
  pub(crate) fn new<T>(queue: &Queue<T>) -> Self {
    Self {
      version: queue.version(),
      oldest_index: queue.oldest_index(),
      state: CursorState::NotStarted,
    }
  }

  pub fn state(&self) -> CursorState {
    self.state
  }

  fn check_version<T>(&self, queue: &Queue<T>) -> Result<(), QueueError> {
    if queue.version() != self.version {
      tracing::debug!(
        "Cursor: version mismatch, captured = {}, current = {}",
        self.version,
        queue.version()
      );
      return Err(QueueError::invalid_state("the queue was modified after the cursor was created"));
    }
    Ok(())
  }

  /// Moves to the next slot.
  ///
  /// # Return Value
  /// - `Ok(true)` - If the cursor is positioned on a slot.
  /// - `Ok(false)` - If the cursor is exhausted.
  /// - `Err(QueueError::InvalidState(_))` - If the queue was modified.
  pub fn advance<T>(&mut self, queue: &Queue<T>) -> Result<bool, QueueError> {
    self.check_version(queue)?;
    let next = match self.state {
      CursorState::NotStarted => match self.oldest_index {
        None | Some(0) => None,
        Some(_) => Some(0),
      },
      CursorState::Positioned(index) => Some(index + 1),
      CursorState::Exhausted => None,
    };
    match next.filter(|index| *index < queue.count()) {
      Some(index) => {
        self.state = CursorState::Positioned(index);
        Ok(true)
      }
      None => {
        self.state = CursorState::Exhausted;
        Ok(false)
      }
    }
  }

  /// Returns the slot the cursor is positioned on.
  pub fn current<'a, T>(&self, queue: &'a Queue<T>) -> Result<&'a T, QueueError> {
    self.check_version(queue)?;
    match self.state {
      CursorState::Positioned(index) => queue
        .slot(index)
        .ok_or_else(|| QueueError::invalid_state(format!("slot {} is out of range", index))),
      CursorState::NotStarted => Err(QueueError::invalid_state("the cursor has not been advanced")),
      CursorState::Exhausted => Err(QueueError::invalid_state("the cursor is exhausted")),
    }
  }

  /// Returns the cursor to `NotStarted`.
  pub fn reset<T>(&mut self, queue: &Queue<T>) -> Result<(), QueueError> {
    self.check_version(queue)?;
    self.state = CursorState::NotStarted;
    Ok(())
  }
}

/// Borrowing iterator over the slots of a [`Queue`], driven by a [`Cursor`].
///
/// The borrow rules out mutation while iterating, so the cursor never goes stale.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
  queue: &'a Queue<T>,
  cursor: Cursor,
}

impl<'a, T> Iter<'a, T> {
  pub(crate) fn new(queue: &'a Queue<T>) -> Self {
    Self {
      queue,
      cursor: queue.cursor(),
    }
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    match self.cursor.advance(self.queue) {
      Ok(true) => self.cursor.current(self.queue).ok(),
      _ => None,
    }
  }
}

impl<T> FusedIterator for Iter<'_, T> {}
