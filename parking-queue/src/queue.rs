// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use tracing::debug;

use crate::{Keyed, QueueError};

/// Bounded FIFO queue of `T`, laid out as a ring over a fixed number of slots.
///
/// Unlike a plain ring buffer, the physical layout is part of the API: slots
/// have stable indices that callers can show to users (see
/// [`RingQueue::slots`]), at least until an operation that rebuilds the ring
/// ([`RingQueue::resize`], [`RingQueue::remove_by_key`]) moves things around.
#[derive(Debug, Clone)]
pub struct RingQueue<T> {
    /// Backing slots. Invariant: the `len` slots from index `front` onwards
    /// (possibly wrapping around the end of the slice) are occupied, and the
    /// rest are empty.
    slots: Box<[Option<T>]>,
    front: usize,
    len: usize,
}

/// Allocates `capacity` empty slots, or returns None if that much memory
/// can't be allocated.
fn try_empty_slots<T>(capacity: usize) -> Option<Box<[Option<T>]>> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(capacity).ok()?;
    slots.resize_with(capacity, || None);
    Some(slots.into_boxed_slice())
}

impl<T> RingQueue<T> {
    /// Creates an empty queue with `capacity` slots. The capacity must be at
    /// least one, and small enough that the slots can be allocated.
    pub fn new(capacity: usize) -> Result<RingQueue<T>, QueueError> {
        let slots = match capacity {
            0 => None,
            _ => try_empty_slots(capacity),
        };
        let slots = slots.ok_or(QueueError::InvalidCapacity {
            requested: capacity,
        })?;
        Ok(RingQueue {
            slots,
            front: 0,
            len: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The amount of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// The amount of elements that could be enqueued before the queue is full.
    pub fn spare_capacity(&self) -> usize {
        self.capacity() - self.len
    }

    /// Physical index of the oldest element. Only meaningful when the queue is
    /// not empty.
    pub fn front(&self) -> usize {
        self.front
    }

    /// Physical index of the newest element, or None if the queue is empty.
    pub fn rear(&self) -> Option<usize> {
        self.len.checked_sub(1).map(|last| self.physical_index(last))
    }

    /// All the slots in physical order, empty ones included.
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    fn physical_index(&self, logical_index: usize) -> usize {
        (self.front + logical_index) % self.capacity()
    }

    /// Places the value in the slot after the current rear, and returns the
    /// physical index of that slot.
    pub fn enqueue(&mut self, value: T) -> Result<usize, QueueError> {
        if self.is_full() {
            return Err(QueueError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        // Since `len < capacity`, this wraps at most once and lands on the
        // first empty slot after the occupied span.
        let i = self.physical_index(self.len);
        debug_assert!(self.slots[i].is_none(), "enqueue would overwrite slot {i}");
        self.slots[i] = Some(value);
        self.len += 1;

        Ok(i)
    }

    /// Removes and returns the oldest element.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::EmptyQueue);
        }

        // The slot at `front` is occupied when `len > 0`, see the invariant on
        // `slots`.
        let value = self.slots[self.front]
            .take()
            .ok_or(QueueError::EmptyQueue)?;
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;

        Ok(value)
    }

    /// Returns the oldest element without removing it.
    pub fn peek_front(&self) -> Result<&T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        self.slots[self.front]
            .as_ref()
            .ok_or(QueueError::EmptyQueue)
    }

    /// Empties every slot and moves the front back to index 0.
    pub fn clear(&mut self) {
        self.slots.fill_with(|| None);
        self.front = 0;
        self.len = 0;
    }

    /// Changes the amount of slots, keeping the elements in FIFO order
    /// starting from index 0.
    ///
    /// If there are more elements than fit in `new_capacity` slots, the newest
    /// ones are dropped. This is not an error, and the dropped elements can't
    /// be recovered.
    ///
    /// Fails without touching the queue if `new_capacity` is zero or the new
    /// slots can't be allocated.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), QueueError> {
        let new_slots = match new_capacity {
            0 => None,
            _ => try_empty_slots(new_capacity),
        };
        let new_slots = new_slots.ok_or(QueueError::InvalidCapacity {
            requested: new_capacity,
        })?;

        let mut values = self.take_all();
        if values.len() > new_capacity {
            debug!(
                "Resizing from {} to {} slots drops the {} newest elements.",
                self.capacity(),
                new_capacity,
                values.len() - new_capacity,
            );
            values.truncate(new_capacity);
        }

        self.slots = new_slots;
        self.refill(values);

        Ok(())
    }

    /// Iterates through the elements in FIFO order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let (wrapped, from_front) = self.slots.split_at(self.front);
        from_front
            .iter()
            .chain(wrapped.iter())
            .take(self.len)
            .filter_map(Option::as_ref)
    }

    /// Moves all the elements out in FIFO order, leaving every slot empty and
    /// the front at 0.
    fn take_all(&mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        for logical_index in 0..self.len {
            let i = self.physical_index(logical_index);
            values.extend(self.slots[i].take());
        }
        self.front = 0;
        self.len = 0;
        values
    }

    /// Enqueues all of `values`, which must fit. Expects an empty queue, so
    /// that the values end up at indices `0..values.len()`.
    fn refill(&mut self, values: Vec<T>) {
        debug_assert!(self.is_empty() && self.front == 0);
        debug_assert!(values.len() <= self.capacity());
        for (slot, value) in self.slots.iter_mut().zip(values) {
            *slot = Some(value);
            self.len += 1;
        }
    }
}

impl<T: Keyed> RingQueue<T> {
    /// Returns the physical index of the first slot, counting from index 0
    /// rather than from the front, holding an element with the given key.
    pub fn find_index_by_key(&self, key: &T::Key) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|value| value.key() == key))
    }

    /// Removes the oldest element with the given key, keeping the rest in
    /// FIFO order.
    ///
    /// When something is removed, the remaining elements are packed to the
    /// start of the slots with the front at 0, so any physical indices held
    /// from before this call are invalid. When nothing matches, the queue is
    /// not touched.
    pub fn remove_by_key(&mut self, key: &T::Key) -> Option<T> {
        let position = self.iter().position(|value| value.key() == key)?;
        let mut values = self.take_all();
        let removed = values.remove(position);
        self.refill(values);
        Some(removed)
    }
}
