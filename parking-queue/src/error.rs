// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

/// Failures of [`RingQueue`](crate::RingQueue) operations. All of these are
/// recoverable, and the queue is left unchanged when one is returned.
///
/// Lookup misses are not errors: the keyed operations return [`None`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("Parking is full (all {capacity} slots are taken)")]
    CapacityExceeded { capacity: usize },

    #[error("Parking is empty")]
    EmptyQueue,

    #[error("Invalid capacity {requested}: must be at least 1 and fit in memory")]
    InvalidCapacity { requested: usize },
}
