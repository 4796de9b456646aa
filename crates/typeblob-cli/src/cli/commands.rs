//! Command builder for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI.
pub fn build_cli() -> Command {
    Command::new("typeblob")
        .about("Merge per-translation-unit type descriptors into a linkable reflection blob")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(input_dir_arg())
        .arg(output_dir_arg())
        .arg(capacity_arg())
        .arg(suffix_arg())
        .arg(no_json_arg())
        .arg(dump_arg())
        .arg(color_arg())
        .arg(verbose_arg())
        .after_help(
            r#"EXAMPLES:
  typeblob build/ build/                  # merge every *.reflection.dat under build/
  typeblob obj/ gen/ --no-json            # skip the JSON debug dump
  typeblob obj/ gen/ --dump --color never # print the emitted blob
  RUST_LOG=debug typeblob obj/ gen/       # log every file and override"#,
        )
}
