//! Last-writer-wins merge across descriptor files.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, debug_span, info, warn};
use typeblob_format::TypeId;

use super::{MergeOptions, TypeGraph, discover};
use crate::Result;
use crate::descriptor::{self, Context};
use crate::types::TypeRecord;

/// Counters reported at the end of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub files_found: usize,
    pub files_merged: usize,
    pub files_skipped: usize,
    pub records_parsed: usize,
    /// Records that replaced an earlier record of the same name.
    pub overrides: usize,
}

/// Accumulates records from descriptor files into one name-keyed table.
///
/// Feed files oldest first. A record whose name is already present replaces
/// the earlier record entirely but keeps its slot, so ids reflect the order
/// in which names were first seen, not the order of overrides.
#[derive(Debug)]
pub struct Merger {
    ctx: Context,
    types: IndexMap<String, TypeRecord>,
    stats: MergeStats,
}

impl Merger {
    pub fn new(options: &MergeOptions) -> Self {
        Self {
            ctx: Context::new(options.capacity),
            types: IndexMap::new(),
            stats: MergeStats::default(),
        }
    }

    /// Parse one descriptor's text and merge its records.
    ///
    /// Returns the number of records the source declared.
    pub fn add_source(&mut self, source: &str) -> Result<usize> {
        let records = descriptor::parse(source, &mut self.ctx)?;
        let count = records.len();
        self.stats.records_parsed += count;
        for record in records {
            self.insert(record);
        }
        Ok(count)
    }

    /// Read and merge one descriptor file.
    ///
    /// An unreadable file (missing, permission denied, not UTF-8) is logged
    /// and skipped. Only a full string volume is an error.
    pub fn add_file(&mut self, path: &Path) -> Result<()> {
        let _span = debug_span!("descriptor", path = %path.display()).entered();

        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable descriptor file");
                self.stats.files_skipped += 1;
                return Ok(());
            }
        };

        let count = self.add_source(&source)?;
        self.stats.files_merged += 1;
        debug!(records = count, "merged descriptor file");
        Ok(())
    }

    fn insert(&mut self, record: TypeRecord) {
        if record.name.is_empty() {
            debug!("dropping record with empty name");
            return;
        }
        let name = record.name.clone();
        if let Some(previous) = self.types.insert(name, record) {
            self.stats.overrides += 1;
            debug!(name = %previous.name, "record overrides earlier declaration");
        }
    }

    /// Drop empty names and assign ids 1..=N in table order.
    pub fn finish(self) -> TypeGraph {
        let (arch, strings) = self.ctx.finish();
        let mut types = self.types;
        types.shift_remove("");
        for (index, record) in types.values_mut().enumerate() {
            record.id = TypeId::from_position(index);
        }

        TypeGraph {
            arch,
            strings,
            types,
            stats: self.stats,
        }
    }
}

/// Merge the given files in order.
pub fn merge_files(paths: &[PathBuf], options: &MergeOptions) -> Result<TypeGraph> {
    let mut merger = Merger::new(options);
    merger.stats.files_found = paths.len();
    for path in paths {
        merger.add_file(path)?;
    }
    Ok(merger.finish())
}

/// Discover descriptor files under `root` and merge them oldest first.
pub fn merge_dir(root: &Path, options: &MergeOptions) -> Result<TypeGraph> {
    let files = discover(root, &options.suffix);
    if files.is_empty() {
        warn!(root = %root.display(), suffix = %options.suffix, "no descriptor files found");
    } else {
        info!(count = files.len(), "found descriptor files");
    }
    merge_files(&files, options)
}
