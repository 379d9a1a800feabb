// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::VecDeque;

use parking_queue::{Keyed, QueueError, RingQueue};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Item {
    key: u8,
    serial: u32,
}

impl Keyed for Item {
    type Key = u8;
    fn key(&self) -> &u8 {
        &self.key
    }
}

#[derive(Debug, Clone)]
enum Op {
    Enqueue(u8),
    Dequeue,
    Resize(usize),
    Clear,
    Remove(u8),
}

fn op() -> impl Strategy<Value = Op> {
    // Few distinct keys so that duplicates and hits are common.
    prop_oneof![
        4 => (0u8..4).prop_map(Op::Enqueue),
        3 => Just(Op::Dequeue),
        1 => (0usize..7).prop_map(Op::Resize),
        1 => Just(Op::Clear),
        2 => (0u8..4).prop_map(Op::Remove),
    ]
}

fn logical_order(queue: &RingQueue<Item>) -> Vec<Item> {
    queue.iter().copied().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_matches_a_vecdeque_model(capacity in 1usize..6, ops in prop::collection::vec(op(), 0..64)) {
        let mut queue = RingQueue::new(capacity).unwrap();
        let mut model_capacity = capacity;
        let mut model = VecDeque::new();

        for (serial, op) in ops.into_iter().enumerate() {
            match op {
                Op::Enqueue(key) => {
                    let item = Item { key, serial: serial as u32 };
                    let result = queue.enqueue(item);
                    if model.len() == model_capacity {
                        prop_assert_eq!(Err(QueueError::CapacityExceeded { capacity: model_capacity }), result);
                    } else {
                        let index = result.unwrap();
                        prop_assert_eq!(Some(&item), queue.slots()[index].as_ref());
                        model.push_back(item);
                    }
                }
                Op::Dequeue => {
                    prop_assert_eq!(model.pop_front().ok_or(QueueError::EmptyQueue), queue.dequeue());
                }
                Op::Resize(new_capacity) => {
                    let result = queue.resize(new_capacity);
                    if new_capacity == 0 {
                        prop_assert_eq!(Err(QueueError::InvalidCapacity { requested: 0 }), result);
                    } else {
                        prop_assert!(result.is_ok());
                        model.truncate(new_capacity);
                        model_capacity = new_capacity;
                        prop_assert_eq!(0, queue.front());
                    }
                }
                Op::Clear => {
                    queue.clear();
                    model.clear();
                }
                Op::Remove(key) => {
                    let position = model.iter().position(|item| item.key == key);
                    let expected = position.and_then(|i| model.remove(i));
                    prop_assert_eq!(expected, queue.remove_by_key(&key));
                }
            }

            prop_assert_eq!(model_capacity, queue.capacity());
            prop_assert_eq!(model.len(), queue.len());
            prop_assert_eq!(model.iter().copied().collect::<Vec<_>>(), logical_order(&queue));
            prop_assert_eq!(model.len(), queue.slots().iter().flatten().count());
        }
    }

    #[test]
    fn prop_dequeues_in_enqueue_order(capacity in 1usize..16, keys in prop::collection::vec(any::<u8>(), 0..16)) {
        let mut queue = RingQueue::new(capacity.max(keys.len()).max(1)).unwrap();
        let items = keys
            .iter()
            .enumerate()
            .map(|(serial, &key)| Item { key, serial: serial as u32 })
            .collect::<Vec<_>>();
        for item in &items {
            queue.enqueue(*item).unwrap();
        }
        let dequeued = (0..items.len()).map(|_| queue.dequeue().unwrap()).collect::<Vec<_>>();
        prop_assert_eq!(items, dequeued);
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn prop_resize_keeps_the_oldest(len in 0usize..10, rotation in 0usize..10, new_capacity in 1usize..12) {
        // Rotate the front around first so that resizing has to unwrap.
        let mut queue = RingQueue::new(10).unwrap();
        for serial in 0..rotation {
            queue.enqueue(Item { key: 0, serial: serial as u32 }).unwrap();
            queue.dequeue().unwrap();
        }
        let items = (0..len).map(|serial| Item { key: 1, serial: serial as u32 }).collect::<Vec<_>>();
        for item in &items {
            queue.enqueue(*item).unwrap();
        }

        queue.resize(new_capacity).unwrap();
        prop_assert_eq!(&items[..len.min(new_capacity)], &logical_order(&queue)[..]);
    }

    #[test]
    fn prop_find_returns_the_lowest_matching_slot(capacity in 1usize..8, ops in prop::collection::vec(op(), 0..32), key in 0u8..4) {
        let mut queue = RingQueue::new(capacity).unwrap();
        for (serial, op) in ops.into_iter().enumerate() {
            match op {
                Op::Enqueue(key) => {
                    let _ = queue.enqueue(Item { key, serial: serial as u32 });
                }
                Op::Dequeue => {
                    let _ = queue.dequeue();
                }
                Op::Resize(new_capacity) => {
                    let _ = queue.resize(new_capacity);
                }
                Op::Clear => queue.clear(),
                Op::Remove(key) => {
                    queue.remove_by_key(&key);
                }
            }
        }

        // Map the logical positions of the matches to physical indices, and
        // pick the lowest one.
        let expected = queue
            .iter()
            .enumerate()
            .filter(|(_, item)| item.key == key)
            .map(|(logical_index, _)| (queue.front() + logical_index) % queue.capacity())
            .min();
        prop_assert_eq!(expected, queue.find_index_by_key(&key));
    }
}
