#![no_main]

use std::collections::VecDeque;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ringlink_list::DoublyLinkedList;

#[derive(Debug, Arbitrary)]
enum ListOp {
    Insert(i8),
    InsertAscending(i8),
    RemoveHead,
    RemoveTail,
    Delete(i8),
    Reverse,
    NthFromBeginning(u8),
    NthFromEnd(u8),
    Clear,
}

fuzz_target!(|ops: Vec<ListOp>| {
    // Drives the list and a VecDeque model in lockstep.
    //
    // After every step this checks:
    // - forward and backward traversal agree with each other and the model
    // - head/tail presence agree (both or neither)
    // - the middle value follows the upper-middle convergence rule
    let mut list = DoublyLinkedList::new();
    let mut model: VecDeque<i8> = VecDeque::new();

    for op in ops {
        match op {
            ListOp::Insert(v) => {
                list.insert(v);
                model.push_front(v);
            }
            ListOp::InsertAscending(v) => {
                list.insert_ascending(v);
                let position = match model.front() {
                    Some(&first) if v > first => {
                        let mut position = 0;
                        while position + 1 < model.len() && model[position + 1] < v {
                            position += 1;
                        }
                        position + 1
                    }
                    _ => 0,
                };
                model.insert(position, v);
            }
            ListOp::RemoveHead => assert_eq!(list.remove_head(), model.pop_front()),
            ListOp::RemoveTail => assert_eq!(list.remove_tail(), model.pop_back()),
            ListOp::Delete(v) => {
                let position = model.iter().position(|&x| x == v);
                if let Some(position) = position {
                    model.remove(position);
                }
                assert_eq!(list.delete(&v), position.is_some());
            }
            ListOp::Reverse => {
                list.reverse();
                model.make_contiguous().reverse();
            }
            ListOp::NthFromBeginning(n) => {
                assert_eq!(list.find_nth_from_beginning(n.into()), model.get(n.into()));
            }
            ListOp::NthFromEnd(n) => {
                let expected = model.iter().rev().nth(n.into());
                assert_eq!(list.find_nth_from_end(n.into()), expected);
            }
            ListOp::Clear => {
                list.clear();
                model.clear();
            }
        }

        let forward: Vec<i8> = list.iter().copied().collect();
        let backward: Vec<i8> = list.iter().rev().copied().collect();
        assert!(forward.iter().eq(model.iter()));
        assert!(backward.iter().eq(model.iter().rev()));
        assert_eq!(list.head_id().is_none(), list.tail_id().is_none());
        assert_eq!(list.find_middle_value(), model.get(model.len() / 2));
    }
});
