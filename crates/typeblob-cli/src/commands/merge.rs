use std::fmt;
use std::fs;
use std::path::PathBuf;

use tracing::info;
use typeblob_compiler::emit::{Written, emit, write_outputs};
use typeblob_compiler::merge::{MergeOptions, MergeStats, merge_dir};
use typeblob_core::{ArchWidth, Colors};
use typeblob_format::{Blob, DecodeError, dump};

pub struct MergeArgs {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub capacity: usize,
    pub suffix: String,
    pub json: bool,
    pub dump: bool,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] typeblob_compiler::Error),

    #[error("cannot create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("emitted blob does not decode: {0}")]
    Decode(#[from] DecodeError),
}

/// What a successful run produced.
#[derive(Debug)]
pub struct Summary {
    pub stats: MergeStats,
    pub arch: ArchWidth,
    pub types: usize,
    pub strings: usize,
    pub bytes: usize,
    pub written: Written,
    /// Rendered listing, when `--dump` was given.
    pub dump: Option<String>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.stats;
        writeln!(
            f,
            "merged {} of {} descriptor files ({} skipped): {} types, {} strings, {} overrides",
            s.files_merged, s.files_found, s.files_skipped, self.types, self.strings, s.overrides
        )?;
        write!(
            f,
            "wrote {} bytes (arch {}) to {}",
            self.bytes,
            self.arch.bytes(),
            self.written.blob.display()
        )
    }
}

/// Merge, encode, and only then write the outputs.
pub fn execute(args: &MergeArgs) -> Result<Summary, Error> {
    let options = MergeOptions::new()
        .capacity(args.capacity)
        .suffix(args.suffix.as_str());

    let graph = merge_dir(&args.input_dir, &options)?;
    let emitted = emit(&graph, options.buffer_capacity())?;

    let listing = if args.dump {
        let blob = Blob::decode(&emitted.blob, emitted.arch)?;
        Some(dump(&blob, Colors::new(args.color)))
    } else {
        None
    };

    fs::create_dir_all(&args.output_dir).map_err(|source| Error::CreateDir {
        path: args.output_dir.clone(),
        source,
    })?;
    let written = write_outputs(&args.output_dir, &emitted, &graph, args.json)?;

    let stats = graph.stats();
    info!(
        files = stats.files_merged,
        skipped = stats.files_skipped,
        overrides = stats.overrides,
        types = graph.len(),
        bytes = emitted.blob.len(),
        "merge complete"
    );

    Ok(Summary {
        stats: *stats,
        arch: emitted.arch,
        types: graph.len(),
        strings: graph.strings().len(),
        bytes: emitted.blob.len(),
        written,
        dump: listing,
    })
}

pub fn run(args: MergeArgs) {
    let summary = match execute(&args) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(listing) = &summary.dump {
        print!("{}", listing);
    }
    println!("{}", summary);
}
