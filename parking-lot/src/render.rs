// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    io::{self, Write},
    time::{Duration, SystemTime},
};

use chrono::{DateTime, Local};
use parking_queue::{Entry, RingQueue};

/// The slot touched by the latest command, drawn with a mark next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// A car parked there, or was found there.
    Marked(usize),
    /// A car left, and this is the slot at the front afterwards.
    Departed(usize),
}

impl Highlight {
    fn slot(self) -> usize {
        match self {
            Highlight::Marked(slot) | Highlight::Departed(slot) => slot,
        }
    }

    fn mark(self) -> char {
        match self {
            Highlight::Marked(_) => '+',
            Highlight::Departed(_) => '-',
        }
    }
}

pub fn format_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format("%H:%M:%S").to_string()
}

/// Formats as whole minutes and seconds, e.g. `2 min 5 sec`.
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    format!("{} min {} sec", total_secs / 60, total_secs % 60)
}

fn index_or_dash(index: Option<usize>) -> String {
    index.map_or_else(|| String::from("-"), |index| index.to_string())
}

/// Draws the dashboard and every slot of the lot, in physical order.
pub fn draw(
    queue: &RingQueue<Entry>,
    highlight: Option<Highlight>,
    out: &mut impl Write,
) -> io::Result<()> {
    let front = (!queue.is_empty()).then(|| queue.front());
    let rear = queue.rear();

    writeln!(
        out,
        "Total Slots: {}  |  Occupied: {}  |  Free: {}  |  Front Index: {}  |  Rear Index: {}",
        queue.capacity(),
        queue.len(),
        queue.spare_capacity(),
        index_or_dash(front),
        index_or_dash(rear),
    )?;

    for (i, slot) in queue.slots().iter().enumerate() {
        let mark = highlight
            .filter(|highlight| highlight.slot() == i)
            .map_or(' ', Highlight::mark);
        let marker = match (front == Some(i), rear == Some(i)) {
            (true, true) => "F/R",
            (true, false) => "F",
            (false, true) => "R",
            (false, false) => "",
        };
        match slot {
            Some(entry) => writeln!(out, "{mark} {i:>4}  {marker:<3}  {}", entry.id)?,
            None => writeln!(out, "{mark} {i:>4}  {marker:<3}  .")?,
        }
    }

    writeln!(
        out,
        "Slots: {}  |  Occupied: {}  |  Front: {}",
        queue.capacity(),
        queue.len(),
        queue.front(),
    )
}
