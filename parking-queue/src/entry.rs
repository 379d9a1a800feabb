// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::SystemTime;

use arrayvec::ArrayString;

#[allow(unused_imports)] // used in docs
use crate::RingQueue;

pub const CAR_ID_LENGTH: usize = 32;

/// Identifier of a parked car, e.g. a license plate or a generated `Car7`.
pub type CarId = ArrayString<CAR_ID_LENGTH>;

/// Values which can be looked up by a key in a [`RingQueue`].
///
/// Keys are not required to be unique. Lookups resolve to the first match.
pub trait Keyed {
    type Key: PartialEq + ?Sized;
    fn key(&self) -> &Self::Key;
}

/// A car occupying a parking slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: CarId,
    /// When the car was parked. Recorded by whoever parks the car, the queue
    /// itself never looks at the clock.
    pub entry_time: SystemTime,
}

impl Entry {
    pub fn new(id: CarId, entry_time: SystemTime) -> Entry {
        Entry { id, entry_time }
    }
}

impl Keyed for Entry {
    type Key = str;
    fn key(&self) -> &str {
        self.id.as_str()
    }
}
