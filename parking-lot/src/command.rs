// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use parking_queue::{CarId, CAR_ID_LENGTH};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  park [ID]     Park a car, with a generated ID if none is given
  leave         The car at the front leaves
  peek          Show the car at the front
  search ID     Find the slot of a car
  remove ID     A car leaves from anywhere in the line
  size N        Change the amount of slots
  clear         Remove all cars
  show          Draw the parking lot again
  help          Show this list
  quit          Exit";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Park(Option<CarId>),
    Leave,
    Peek,
    Search(CarId),
    Remove(CarId),
    Size(usize),
    Clear,
    Show,
    Help,
    Quit,
}

/// Problems with what the user typed. These never touch the parking lot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    UnknownCommand(String),

    #[error("Enter a Car ID to {action}.")]
    MissingId { action: &'static str },

    #[error("Car ID '{id}' is too long, the limit is {max} bytes.", max = CAR_ID_LENGTH)]
    IdTooLong { id: String },

    #[error("Please enter a positive integer for size.")]
    InvalidSize,
}

pub fn car_id(id: &str) -> Result<CarId, InputError> {
    CarId::from(id).map_err(|_| InputError::IdTooLong {
        id: id.to_string(),
    })
}

fn required_id(argument: &str, action: &'static str) -> Result<CarId, InputError> {
    if argument.is_empty() {
        return Err(InputError::MissingId { action });
    }
    car_id(argument)
}

impl Command {
    /// Parses a line of input. Blank lines are `Ok(None)`.
    ///
    /// Everything after the verb is the argument, so car ids may contain
    /// spaces.
    pub fn parse(line: &str) -> Result<Option<Command>, InputError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, argument) = line
            .split_once(char::is_whitespace)
            .map(|(verb, argument)| (verb, argument.trim()))
            .unwrap_or((line, ""));

        let command = match verb.to_ascii_lowercase().as_str() {
            "park" | "enqueue" if argument.is_empty() => Command::Park(None),
            "park" | "enqueue" => Command::Park(Some(car_id(argument)?)),
            "leave" | "dequeue" => Command::Leave,
            "peek" => Command::Peek,
            "search" | "find" => Command::Search(required_id(argument, "search")?),
            "remove" => Command::Remove(required_id(argument, "remove")?),
            "size" | "resize" => match argument.parse::<usize>() {
                Ok(size) if size >= 1 => Command::Size(size),
                _ => return Err(InputError::InvalidSize),
            },
            "clear" => Command::Clear,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(InputError::UnknownCommand(verb.to_string())),
        };

        Ok(Some(command))
    }
}
