#![no_main]

use std::collections::VecDeque;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ringlink_queue::{ArrayStack, CircularArrayQueue};

#[derive(Debug, Arbitrary)]
struct Input {
    limit: u8,
    ops: Vec<Option<u16>>,
}

fuzz_target!(|input: Input| {
    // `Some(v)` inserts, `None` removes. The ring buffer has no element
    // counter, so len/is_full/is_empty are checked against the model
    // after every step, across many wrap-arounds.
    let limit = usize::from(input.limit % 16);
    let mut queue = CircularArrayQueue::with_limit(limit);
    let mut stack = ArrayStack::with_limit(limit);
    let mut fifo: VecDeque<u16> = VecDeque::new();
    let mut lifo: Vec<u16> = Vec::new();

    for op in input.ops {
        match op {
            Some(v) => {
                assert_eq!(queue.enqueue(v).is_ok(), fifo.len() < limit);
                if fifo.len() < limit {
                    fifo.push_back(v);
                }
                assert_eq!(stack.push(v).is_ok(), lifo.len() < limit);
                if lifo.len() < limit {
                    lifo.push(v);
                }
            }
            None => {
                assert_eq!(queue.dequeue(), fifo.pop_front());
                assert_eq!(stack.pop(), lifo.pop());
            }
        }

        assert_eq!(queue.len(), fifo.len());
        assert_eq!(queue.is_empty(), fifo.is_empty());
        assert_eq!(queue.is_full(), fifo.len() == limit);
        assert!(queue.iter().eq(fifo.iter()));
        assert!(stack.iter().eq(lifo.iter()));
    }
});
