use fifo_queue_rs::{CursorState, Queue, QueueConfig, QueueConfigOption, QueueError};
use rstest::*;

#[rstest(elements)]
#[case(vec![1])]
#[case(vec![1, 2])]
#[case(vec![3, 1, 4, 1, 5, 9, 2, 6])]
fn first_inserted_is_first_removed(elements: Vec<i32>) {
  let mut queue = Queue::new();
  for element in &elements {
    queue.insert(*element);
  }
  assert_eq!(queue.remove(), Ok(elements[0]));
}

#[test]
fn drains_in_insertion_order() {
  let mut queue = Queue::new();
  let words = ["alpha", "beta", "gamma", "delta", "epsilon"];
  for word in words {
    queue.insert(word.to_string());
  }

  let mut drained = Vec::new();
  while let Ok(word) = queue.remove() {
    drained.push(word);
  }
  assert_eq!(drained, words);
}

#[test]
fn source_queue_peeks_first_element_until_removed() {
  let mut queue = Queue::from_source(Some([1, 2, 3])).unwrap();
  assert_eq!(queue.peek(), Ok(&1));
  assert_eq!(queue.peek(), Ok(&1));
  assert_eq!(queue.remove(), Ok(1));
  assert_eq!(queue.peek(), Ok(&2));
}

#[test]
fn construction_errors() {
  assert!(matches!(
    Queue::<u32>::with_capacity(-1),
    Err(QueueError::InvalidArgument(_))
  ));
  assert!(matches!(
    Queue::<u32>::from_source(None::<Vec<u32>>),
    Err(QueueError::InvalidArgument(_))
  ));
  assert_eq!(Queue::<u32>::with_capacity(0).map(|queue| queue.count()), Ok(0));
}

#[test]
fn cursor_fails_fast_after_mutation() {
  let mut queue = Queue::from_source(Some(vec!['a', 'b', 'c'])).unwrap();
  let mut cursor = queue.cursor();
  assert_eq!(cursor.advance(&queue), Ok(true));
  assert_eq!(cursor.current(&queue), Ok(&'c'));

  queue.insert('d');
  assert!(matches!(cursor.advance(&queue), Err(QueueError::InvalidState(_))));
  assert!(matches!(cursor.current(&queue), Err(QueueError::InvalidState(_))));

  let mut fresh = queue.cursor();
  assert_eq!(fresh.state(), CursorState::NotStarted);
  assert_eq!(fresh.advance(&queue), Ok(true));
  assert_eq!(fresh.current(&queue), Ok(&'d'));
}

#[test]
fn configured_queue_uses_initial_capacity() {
  let config = QueueConfig::from([QueueConfigOption::with_initial_capacity(2)]);
  let mut queue = Queue::with_config(&config);
  queue.insert(1u64);
  queue.insert(2);
  assert_eq!(queue.capacity(), 2);
  queue.insert(3);
  assert_eq!(queue.capacity(), 4);
  assert_eq!(queue.peek(), Ok(&1));
}
