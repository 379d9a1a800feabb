// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::SystemTime;

/// Source of the entry and exit times of parked cars.
pub trait Clock {
    fn now(&self) -> SystemTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

#[cfg(test)]
pub use stepping::SteppingClock;

#[cfg(test)]
mod stepping {
    use std::{cell::Cell, time::Duration, time::SystemTime};

    use super::Clock;

    /// Clock for tests: every reading is `step` later than the previous one.
    pub struct SteppingClock {
        next: Cell<SystemTime>,
        step: Duration,
    }

    impl SteppingClock {
        pub fn new(start: SystemTime, step: Duration) -> SteppingClock {
            SteppingClock {
                next: Cell::new(start),
                step,
            }
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> SystemTime {
            let now = self.next.get();
            self.next.set(now + self.step);
            now
        }
    }
}
