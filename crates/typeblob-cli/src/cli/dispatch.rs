//! Dispatch: extract params from `ArgMatches` and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use typeblob_compiler::merge::{DEFAULT_CAPACITY, DESCRIPTOR_SUFFIX};

use super::ColorChoice;
use crate::commands::merge::MergeArgs;

#[derive(Debug)]
pub struct MergeParams {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub capacity: usize,
    pub suffix: String,
    pub json: bool,
    pub dump: bool,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl MergeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_dir: m.get_one::<PathBuf>("input_dir").cloned().unwrap_or_default(),
            output_dir: m.get_one::<PathBuf>("output_dir").cloned().unwrap_or_default(),
            capacity: m.get_one::<usize>("capacity").copied().unwrap_or(DEFAULT_CAPACITY),
            suffix: m
                .get_one::<String>("suffix")
                .cloned()
                .unwrap_or_else(|| DESCRIPTOR_SUFFIX.to_owned()),
            json: !m.get_flag("no_json"),
            dump: m.get_flag("dump"),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<MergeParams> for MergeArgs {
    fn from(p: MergeParams) -> Self {
        Self {
            input_dir: p.input_dir,
            output_dir: p.output_dir,
            capacity: p.capacity,
            suffix: p.suffix,
            json: p.json,
            dump: p.dump,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
