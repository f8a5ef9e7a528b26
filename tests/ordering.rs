//! Volume tests for the priority queue ordering contract: priority decides,
//! insertion order breaks ties, for both comparison directions.

use lanes::{MaxPriorityQueue, MinPriorityQueue};

const N: usize = 10_000;

/// Deterministic scramble with plenty of collisions.
fn priority(i: usize) -> u32 {
    ((i * 7 + 13) % 97) as u32
}

#[test]
fn min_drains_in_nondecreasing_priority_fifo_on_ties() {
    let mut pq: MinPriorityQueue<usize, u32> = MinPriorityQueue::with_capacity(N);
    for i in 0..N {
        pq.enqueue(i, priority(i));
    }

    // Stable sort by priority models "priority order, ties by insertion".
    let mut expected: Vec<usize> = (0..N).collect();
    expected.sort_by_key(|&i| priority(i));

    let mut drained = Vec::with_capacity(N);
    while let Some(i) = pq.dequeue() {
        drained.push(i);
    }

    assert_eq!(drained, expected);
}

#[test]
fn max_drains_in_nonincreasing_priority_fifo_on_ties() {
    let mut pq: MaxPriorityQueue<usize, u32> = MaxPriorityQueue::with_capacity(N);
    for i in 0..N {
        pq.enqueue(i, priority(i));
    }

    let mut expected: Vec<usize> = (0..N).collect();
    expected.sort_by_key(|&i| std::cmp::Reverse(priority(i)));

    let mut drained = Vec::with_capacity(N);
    while let Some(i) = pq.dequeue() {
        drained.push(i);
    }

    assert_eq!(drained, expected);
}

#[test]
fn size_invariant_under_mixed_operations() {
    let mut pq: MaxPriorityQueue<usize, u32> = MaxPriorityQueue::new();
    let mut enqueued = 0;
    let mut dequeued = 0;

    for round in 0..100 {
        for i in 0..round {
            pq.enqueue(i, priority(i));
            enqueued += 1;
        }
        for _ in 0..round / 2 {
            assert!(pq.dequeue().is_some());
            dequeued += 1;
        }
        assert_eq!(pq.len(), enqueued - dequeued);
    }
}

#[test]
fn float_priorities_drain_sorted() {
    let mut pq: MinPriorityQueue<usize> = MinPriorityQueue::with_capacity(N);
    for i in 0..N {
        pq.enqueue(i, f64::from(priority(i)) / 3.0);
    }

    let mut last = f64::NEG_INFINITY;
    while let Some(i) = pq.dequeue() {
        let p = f64::from(priority(i)) / 3.0;
        assert!(p >= last, "priority order violated");
        last = p;
    }
}
