// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! A fixed-capacity parking lot modeled as a ring queue.
//!
//! [`RingQueue`] is the whole data structure: FIFO parking and leaving, plus
//! the less queue-like operations a parking lot needs (resizing the lot,
//! finding a car, and letting a car out of the middle of the line). It does
//! not render anything. Callers mutate it, then read [`RingQueue::slots`] and
//! friends to redraw.

mod entry;
mod error;
mod queue;

pub use entry::{CarId, Entry, Keyed, CAR_ID_LENGTH};
pub use error::QueueError;
pub use queue::RingQueue;
