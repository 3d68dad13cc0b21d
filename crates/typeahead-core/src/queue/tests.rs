use proptest::prelude::*;

use crate::queue::{coerce_priority, normalize_priority, StablePriorityQueue};

fn drain_requests<R>(queue: &mut StablePriorityQueue<R>) -> Vec<R> {
    queue.drain().map(|e| e.request).collect()
}

#[test]
fn test_equal_priority_is_fifo() {
    let mut queue = StablePriorityQueue::new();
    queue.enqueue("A", 0.0);
    queue.enqueue("B", 0.0);
    queue.enqueue("C", 1.0);
    assert_eq!(queue.dequeue().map(|e| e.request), Some("C"));
    assert_eq!(queue.dequeue().map(|e| e.request), Some("A"));
    assert_eq!(queue.dequeue().map(|e| e.request), Some("B"));
    assert!(queue.dequeue().is_none());
}

#[test]
fn test_dispatch_order_of_mixed_requests() {
    let mut queue = StablePriorityQueue::new();
    queue.enqueue("b", 0.0);
    queue.enqueue("app", 0.0);
    queue.enqueue("bi", 1.0);
    queue.enqueue("ba", 0.0);
    assert_eq!(drain_requests(&mut queue), vec!["bi", "b", "app", "ba"]);
}

#[test]
fn test_many_equal_priorities_keep_arrival_order() {
    let mut queue = StablePriorityQueue::new();
    for i in 0..100 {
        queue.enqueue(i, 3.0);
    }
    assert_eq!(drain_requests(&mut queue), (0..100).collect::<Vec<_>>());
}

#[test]
fn test_sequence_numbers_are_monotonic() {
    let mut queue = StablePriorityQueue::new();
    assert_eq!(queue.enqueue('x', 1.0), 0);
    assert_eq!(queue.enqueue('y', 2.0), 1);
    queue.dequeue();
    queue.dequeue();
    // The counter never rewinds, even once the queue is empty again.
    assert_eq!(queue.enqueue('z', 0.0), 2);
    assert_eq!(queue.peek().map(|e| e.sequence), Some(2));
}

#[test]
fn test_nan_priority_is_zero() {
    assert_eq!(normalize_priority(f64::NAN), 0.0);
    assert_eq!(normalize_priority(-2.5), -2.5);

    let mut queue = StablePriorityQueue::new();
    queue.enqueue("nan", f64::NAN);
    queue.enqueue("zero", 0.0);
    queue.enqueue("neg", -1.0);
    let first = queue.dequeue().unwrap();
    assert_eq!(first.request, "nan");
    assert_eq!(first.priority, 0.0);
    assert_eq!(drain_requests(&mut queue), vec!["zero", "neg"]);
}

#[test]
fn test_coerce_priority() {
    assert_eq!(coerce_priority("2"), 2.0);
    assert_eq!(coerce_priority(" -1.5 "), -1.5);
    assert_eq!(coerce_priority("urgent"), 0.0);
    assert_eq!(coerce_priority(""), 0.0);
    assert_eq!(coerce_priority("NaN"), 0.0);
    assert_eq!(coerce_priority("inf"), f64::INFINITY);
}

#[test]
fn test_fractional_and_infinite_priorities() {
    let mut queue = StablePriorityQueue::new();
    queue.enqueue("low", f64::NEG_INFINITY);
    queue.enqueue("half", 0.5);
    queue.enqueue("top", f64::INFINITY);
    queue.enqueue("quarter", 0.25);
    assert_eq!(
        drain_requests(&mut queue),
        vec!["top", "half", "quarter", "low"]
    );
}

#[test]
fn test_empty_queue() {
    let mut queue: StablePriorityQueue<()> = StablePriorityQueue::default();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert!(queue.peek().is_none());
    assert!(queue.dequeue().is_none());
    assert_eq!(queue.drain().count(), 0);
}

#[test]
fn test_len_and_peek_track_contents() {
    let mut queue = StablePriorityQueue::with_capacity(4);
    queue.enqueue("a", 1.0);
    queue.enqueue("b", 5.0);
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.peek().map(|e| e.request), Some("b"));
    assert_eq!(queue.drain().size_hint(), (2, Some(2)));
}

#[test]
fn test_interleaved_enqueue_dequeue() {
    let mut queue = StablePriorityQueue::new();
    queue.enqueue("a0", 0.0);
    queue.enqueue("b1", 1.0);
    assert_eq!(queue.dequeue().map(|e| e.request), Some("b1"));
    queue.enqueue("c0", 0.0);
    queue.enqueue("d1", 1.0);
    assert_eq!(drain_requests(&mut queue), vec!["d1", "a0", "c0"]);
}

#[test]
fn test_into_request() {
    let mut queue = StablePriorityQueue::new();
    queue.enqueue(String::from("payload"), 0.0);
    assert_eq!(queue.dequeue().unwrap().into_request(), "payload");
}

proptest! {
    #[test]
    fn prop_matches_stable_sort(priorities in prop::collection::vec(-3i32..4, 0..120)) {
        let mut queue = StablePriorityQueue::new();
        for (i, &p) in priorities.iter().enumerate() {
            queue.enqueue(i, f64::from(p));
        }

        let mut expected: Vec<usize> = (0..priorities.len()).collect();
        // sort_by is stable: equal priorities stay in arrival order.
        expected.sort_by(|&a, &b| priorities[b].cmp(&priorities[a]));

        prop_assert_eq!(drain_requests(&mut queue), expected);
    }
}
