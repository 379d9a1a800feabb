// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

mod cli;
mod clock;
mod command;
mod render;
mod session;
mod settings;

use std::io;

use anyhow::Context;
use tracing::debug;

use crate::{clock::SystemClock, session::Session};

fn main() -> anyhow::Result<()> {
    let opts = cli::options().run();

    tracing_subscriber::fmt()
        .with_max_level(opts.verbosity_level)
        .with_writer(io::stderr)
        .init();
    debug!("Options: {opts:?}");

    let mut settings = settings::read(&opts.settings_path).with_context(|| {
        format!(
            "Failed to load settings from {}",
            opts.settings_path.display()
        )
    })?;
    if let Some(size) = opts.size {
        settings.size = size;
    }
    debug!("Settings: {settings:?}");

    let mut session =
        Session::new(&settings, SystemClock).context("Failed to create the parking lot")?;
    session
        .run(io::stdin().lock(), &mut io::stdout().lock())
        .context("Failed to talk to the terminal")?;

    Ok(())
}
