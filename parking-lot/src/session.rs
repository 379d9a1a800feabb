// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    io::{self, BufRead, Write},
    ops::ControlFlow,
};

use parking_queue::{CarId, Entry, QueueError, RingQueue};
use tracing::{debug, info, warn};

use crate::{
    clock::Clock,
    command::{self, Command, HELP},
    render::{self, format_duration, format_time, Highlight},
    settings::Settings,
};

const PROMPT: &str = "> ";

/// An interactive parking lot: reads commands, applies them to the queue, and
/// draws the lot again after each one.
pub struct Session<C: Clock> {
    queue: RingQueue<Entry>,
    clock: C,
    id_prefix: String,
    next_car_number: u64,
    confirm_clear: bool,
    highlight: Option<Highlight>,
}

fn notify(out: &mut impl Write, message: impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "! {message}")
}

impl<C: Clock> Session<C> {
    pub fn new(settings: &Settings, clock: C) -> Result<Session<C>, QueueError> {
        Ok(Session {
            queue: RingQueue::new(settings.size)?,
            clock,
            id_prefix: settings.id_prefix.clone(),
            next_car_number: 1,
            confirm_clear: settings.confirm_clear,
            highlight: None,
        })
    }

    #[cfg(test)]
    pub fn queue(&self) -> &RingQueue<Entry> {
        &self.queue
    }

    /// Runs commands from `input` until it ends or a quit command is read.
    ///
    /// Only I/O errors end the session early. Everything that goes wrong with
    /// the parking lot itself is reported to the user and the session goes
    /// on.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        let mut lines = input.lines();
        render::draw(&self.queue, self.highlight, out)?;

        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;
            let Some(line) = lines.next().transpose()? else {
                break;
            };

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    debug!("Rejected input {line:?}: {err}");
                    notify(out, err)?;
                    continue;
                }
            };

            debug!("Running command: {command:?}");
            let flow = self.execute(command, out, || {
                lines.next().transpose().map(Option::unwrap_or_default)
            })?;
            if flow.is_break() {
                break;
            }
        }

        Ok(())
    }

    /// Applies one command. `read_answer` is used to ask for confirmation
    /// before destructive commands.
    fn execute(
        &mut self,
        command: Command,
        out: &mut impl Write,
        read_answer: impl FnOnce() -> io::Result<String>,
    ) -> io::Result<ControlFlow<()>> {
        match command {
            Command::Park(id) => self.park(id, out)?,
            Command::Leave => self.leave(out)?,
            Command::Peek => self.peek(out)?,
            Command::Search(id) => self.search(&id, out)?,
            Command::Remove(id) => self.remove(&id, out)?,
            Command::Size(size) => self.resize(size, out)?,
            Command::Clear => self.clear(out, read_answer)?,
            Command::Show => {}
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(ControlFlow::Continue(()));
            }
            Command::Quit => return Ok(ControlFlow::Break(())),
        }

        render::draw(&self.queue, self.highlight, out)?;
        Ok(ControlFlow::Continue(()))
    }

    fn generate_id(&mut self) -> Result<CarId, command::InputError> {
        let id = format!("{}{}", self.id_prefix, self.next_car_number);
        self.next_car_number = self.next_car_number.wrapping_add(1);
        command::car_id(&id)
    }

    fn park(&mut self, id: Option<CarId>, out: &mut impl Write) -> io::Result<()> {
        let id = match id {
            Some(id) => id,
            None => match self.generate_id() {
                Ok(id) => id,
                Err(err) => return notify(out, err),
            },
        };

        match self.queue.enqueue(Entry::new(id, self.clock.now())) {
            Ok(slot) => {
                info!("Parked {id} at slot {slot}.");
                writeln!(out, "Parked {id} at slot {slot}.")?;
                self.highlight = Some(Highlight::Marked(slot));
            }
            Err(err) => {
                warn!("Could not park {id}: {err}");
                notify(out, "Parking is full. Cannot park more cars.")?;
            }
        }
        Ok(())
    }

    /// Prints the entry and exit times of a car that just left.
    fn write_departure(&self, car: &Entry, verb: &str, out: &mut impl Write) -> io::Result<()> {
        let exit_time = self.clock.now();
        let duration = exit_time
            .duration_since(car.entry_time)
            .unwrap_or_default();
        info!("{} {verb} after {}.", car.id, format_duration(duration));
        writeln!(out, "Car {} {verb}.", car.id)?;
        writeln!(out, "Entry time : {}", format_time(car.entry_time))?;
        writeln!(out, "Exit time  : {}", format_time(exit_time))?;
        writeln!(out, "Duration   : {}", format_duration(duration))
    }

    fn leave(&mut self, out: &mut impl Write) -> io::Result<()> {
        match self.queue.dequeue() {
            Ok(car) => {
                self.write_departure(&car, "left the parking", out)?;
                // The new front, which is an empty slot if that was the last car.
                self.highlight = Some(Highlight::Departed(self.queue.front()));
                Ok(())
            }
            Err(_) => notify(out, "Parking is empty. No car to dequeue."),
        }
    }

    fn peek(&mut self, out: &mut impl Write) -> io::Result<()> {
        let car = match self.queue.peek_front() {
            Ok(car) => car,
            Err(_) => return notify(out, "No car is currently parked."),
        };
        writeln!(out, "Next car to leave (front):")?;
        writeln!(out, "Car ID    : {}", car.id)?;
        writeln!(out, "Entry time: {}", format_time(car.entry_time))?;
        self.highlight = Some(Highlight::Marked(self.queue.front()));
        Ok(())
    }

    fn search(&mut self, id: &str, out: &mut impl Write) -> io::Result<()> {
        match self.queue.find_index_by_key(id) {
            Some(slot) => {
                writeln!(out, "Car {id} found at slot {slot}.")?;
                self.highlight = Some(Highlight::Marked(slot));
            }
            None => {
                writeln!(out, "Car {id} not found in parking.")?;
                self.highlight = None;
            }
        }
        Ok(())
    }

    fn remove(&mut self, id: &str, out: &mut impl Write) -> io::Result<()> {
        match self.queue.remove_by_key(id) {
            Some(car) => {
                self.write_departure(&car, "removed from queue", out)?;
                // The ring was rebuilt, the old slot of the car is meaningless.
                self.highlight =
                    (!self.queue.is_empty()).then(|| Highlight::Departed(self.queue.front()));
            }
            None => {
                writeln!(out, "Car {id} not found. Nothing removed.")?;
                self.highlight = None;
            }
        }
        Ok(())
    }

    fn resize(&mut self, size: usize, out: &mut impl Write) -> io::Result<()> {
        match self.queue.resize(size) {
            Ok(()) => {
                info!("Resized the parking lot to {size} slots.");
                writeln!(
                    out,
                    "Size set to {size}. Existing cars preserved (up to new size)."
                )?;
                self.highlight = None;
                Ok(())
            }
            Err(err) => notify(out, err),
        }
    }

    fn clear(
        &mut self,
        out: &mut impl Write,
        read_answer: impl FnOnce() -> io::Result<String>,
    ) -> io::Result<()> {
        if self.confirm_clear {
            write!(out, "Clear all parked cars? [y/N] ")?;
            out.flush()?;
            let answer = read_answer()?;
            if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
                return writeln!(out, "Nothing cleared.");
            }
        }

        self.queue.clear();
        info!("Cleared all slots.");
        writeln!(out, "Cleared all slots.")?;
        self.highlight = None;
        Ok(())
    }
}
