// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The settings file, as it is on disk.
///
/// Has enum variants for breaking changes in the format of the settings file,
/// but [`read`] always returns the newest version's [`Settings`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "settings_file_version", rename_all = "snake_case")]
enum SettingsFile {
    V1(Settings),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Amount of parking slots at startup.
    pub size: usize,
    /// Prefix for the ids generated for cars parked without one.
    pub id_prefix: String,
    /// Whether clearing the lot asks for confirmation first.
    pub confirm_clear: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            size: 8,
            id_prefix: String::from("Car"),
            confirm_clear: true,
        }
    }
}

pub fn read(settings: &Path) -> anyhow::Result<Settings> {
    if !settings.exists() {
        debug!(
            "No settings file at {}, using defaults.",
            settings.display()
        );
        return Ok(Settings::default());
    }

    let settings = fs::read_to_string(settings).context("Failed to open the settings file")?;
    parse(&settings)
}

fn parse(settings: &str) -> anyhow::Result<Settings> {
    let settings: SettingsFile =
        serde_json::from_str(settings).context("Failed to parse the settings file")?;

    // NOTE: When there's new versions of SettingsFile, convert to the newest
    // here.
    let SettingsFile::V1(settings) = settings;

    Ok(settings)
}
