use randqueue::{QueueError, RandomizedQueue};

#[test]
fn size_tracks_enqueues() {
    let mut queue = RandomizedQueue::with_seed(1);
    for k in 1..=50 {
        queue.enqueue(k);
        assert_eq!(queue.len(), k);
        assert!(!queue.is_empty());
    }
}

#[test]
fn dequeue_returns_exactly_what_went_in() {
    let mut queue = RandomizedQueue::with_seed(31);
    let items: Vec<String> = (0..200).map(|i| format!("item-{}", i)).collect();
    queue.extend(items.iter().cloned());

    let mut drained = Vec::new();
    while !queue.is_empty() {
        drained.push(queue.dequeue().unwrap());
    }
    drained.sort();

    let mut expected = items;
    expected.sort();
    assert_eq!(drained, expected);
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.capacity(), 1);
    assert_eq!(queue.dequeue(), Err(QueueError::Empty));
}

#[test]
fn dequeue_order_differs_from_insertion_order() {
    let mut queue = RandomizedQueue::with_seed(77);
    queue.extend(0..30);
    let drained: Vec<i32> = (0..30).map(|_| queue.dequeue().unwrap()).collect();
    assert_ne!(drained, (0..30).collect::<Vec<_>>());
}

#[test]
fn collects_and_iterates_by_reference() {
    let queue: RandomizedQueue<char> = "queue".chars().collect();
    assert_eq!(queue.len(), 5);

    let mut seen = Vec::new();
    for c in &queue {
        seen.push(*c);
    }
    seen.sort_unstable();
    assert_eq!(seen, vec!['e', 'e', 'q', 'u', 'u']);
}

#[test]
fn fresh_iteration_after_exhaustion() {
    let mut queue = RandomizedQueue::with_seed(12);
    queue.extend(1..=3);

    let mut iter = queue.iter();
    while iter.advance().is_ok() {}
    assert_eq!(iter.advance(), Err(QueueError::EndOfSequence));

    assert_eq!(queue.iter().count(), 3);
}

#[test]
fn works_with_custom_rng() {
    let rng = rand::rngs::mock::StepRng::new(0, 0);
    let mut queue = RandomizedQueue::with_rng(rng);
    queue.extend(["first", "second", "third"]);

    // A generator stuck at zero always picks slot 0
    assert_eq!(queue.sample(), Ok(&"first"));
    assert_eq!(queue.dequeue(), Ok("first"));
    assert_eq!(queue.dequeue(), Ok("third"));
    assert_eq!(queue.dequeue(), Ok("second"));
}
