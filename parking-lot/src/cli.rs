// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use bpaf::{batteries::verbose_by_slice, construct, long, OptionParser, Parser};
use tracing::level_filters::LevelFilter;

pub const DEFAULT_SETTINGS_PATH: &str = "parking-lot.json";

#[derive(Debug, Clone)]
pub struct Options {
    pub verbosity_level: LevelFilter,
    pub settings_path: PathBuf,
    pub size: Option<usize>,
}

pub fn options() -> OptionParser<Options> {
    // Warnings by default, the log shares the terminal with the lot view.
    let verbosity_level = verbose_by_slice(
        2,
        [
            LevelFilter::OFF,
            LevelFilter::ERROR,
            LevelFilter::WARN,
            LevelFilter::INFO,
            LevelFilter::DEBUG,
            LevelFilter::TRACE,
        ],
    );

    let settings_path = long("config")
        .help("Selects the settings file to read, missing files mean default settings")
        .argument::<PathBuf>("FILE")
        .complete_shell(bpaf::ShellComp::File {
            mask: Some("*.json"),
        })
        .fallback(PathBuf::from(DEFAULT_SETTINGS_PATH));

    let size = long("size")
        .short('s')
        .help("Amount of parking slots to start with, overrides the settings file")
        .argument::<usize>("SLOTS")
        .optional();

    construct!(Options {
        verbosity_level,
        settings_path,
        size
    })
    .to_options()
    .descr("Parks cars in a circular queue of parking slots, one command per line")
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tracing::level_filters::LevelFilter;

    use super::{options, DEFAULT_SETTINGS_PATH};

    #[test]
    fn check_bpaf_invariants() {
        options().check_invariants(true);
    }

    #[test]
    fn defaults_without_arguments() {
        let opts = options().run_inner(&[] as &[&str]).unwrap();
        assert_eq!(LevelFilter::WARN, opts.verbosity_level);
        assert_eq!(Path::new(DEFAULT_SETTINGS_PATH), opts.settings_path);
        assert_eq!(None, opts.size);
    }

    #[test]
    fn size_and_config_are_parsed() {
        let opts = options()
            .run_inner(&["--size", "12", "--config", "lot.json"])
            .unwrap();
        assert_eq!(Some(12), opts.size);
        assert_eq!(Path::new("lot.json"), opts.settings_path);
    }

    #[test]
    fn non_numeric_size_is_rejected() {
        assert!(options().run_inner(&["--size", "many"]).is_err());
    }
}
