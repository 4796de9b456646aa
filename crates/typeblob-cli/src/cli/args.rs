//! Argument builders for the CLI.
//!
//! Each function returns a `clap::Arg` composed into the command in
//! `commands.rs`.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use typeblob_compiler::merge::{DEFAULT_CAPACITY, DESCRIPTOR_SUFFIX};

/// Directory searched recursively for descriptor files (positional).
pub fn input_dir_arg() -> Arg {
    Arg::new("input_dir")
        .value_name("INPUT_DIR")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Directory searched recursively for descriptor files")
}

/// Directory receiving the blob and its assembly mirror (positional).
pub fn output_dir_arg() -> Arg {
    Arg::new("output_dir")
        .value_name("OUTPUT_DIR")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Directory for reflection.dat, reflection.dat.S and reflection.json")
}

/// Per-buffer capacity (--capacity).
pub fn capacity_arg() -> Arg {
    Arg::new("capacity")
        .long("capacity")
        .value_name("BYTES")
        .value_parser(value_parser!(usize))
        .help(format!(
            "Capacity of the string volume and of the type table, each [default: {DEFAULT_CAPACITY}]"
        ))
}

/// Descriptor file suffix (--suffix).
pub fn suffix_arg() -> Arg {
    Arg::new("suffix")
        .long("suffix")
        .value_name("SUFFIX")
        .default_value(DESCRIPTOR_SUFFIX)
        .help("File name suffix of descriptor files")
}

/// Skip the JSON debug dump (--no-json).
pub fn no_json_arg() -> Arg {
    Arg::new("no_json")
        .long("no-json")
        .action(ArgAction::SetTrue)
        .help("Do not write reflection.json")
}

/// Print the decoded blob (--dump).
pub fn dump_arg() -> Arg {
    Arg::new("dump")
        .long("dump")
        .action(ArgAction::SetTrue)
        .help("Print a listing of the emitted blob")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize the --dump listing")
}

/// Verbosity (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Verbosity level (-v info, -vv debug, -vvv trace; RUST_LOG overrides)")
}
