//! Writing emitted artifacts to the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::Emitted;
use crate::merge::TypeGraph;
use crate::{Error, Result};

pub const BLOB_FILE: &str = "reflection.dat";
pub const ASM_FILE: &str = "reflection.dat.S";
pub const JSON_FILE: &str = "reflection.json";

/// Paths of the files written by [`write_outputs`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Written {
    pub blob: PathBuf,
    pub asm: PathBuf,
    pub json: Option<PathBuf>,
}

/// Write the blob, the assembly mirror and, if `json` is set, the JSON dump
/// of the merged records into `out_dir`.
///
/// The JSON text is rendered before anything touches the disk.
pub fn write_outputs(out_dir: &Path, emitted: &Emitted, graph: &TypeGraph, json: bool) -> Result<Written> {
    let json_text = if json { Some(graph.to_json()?) } else { None };

    let blob = out_dir.join(BLOB_FILE);
    write_file(&blob, &emitted.blob)?;
    let asm = out_dir.join(ASM_FILE);
    write_file(&asm, emitted.asm.as_bytes())?;

    let json = match json_text {
        Some(text) => {
            let path = out_dir.join(JSON_FILE);
            write_file(&path, text.as_bytes())?;
            Some(path)
        }
        None => None,
    };

    info!(dir = %out_dir.display(), bytes = emitted.blob.len(), "wrote reflection outputs");
    Ok(Written { blob, asm, json })
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}
