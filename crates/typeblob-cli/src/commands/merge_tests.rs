use std::fs;
use std::path::Path;

use super::merge::{Error, MergeArgs, execute};

const POINT: &str = "arch 8\nbase\nname int\nsize 4\nstruct\nname Point\nsize 8\nfield\nname x\ntype int\n";

fn args(input: &Path, output: &Path) -> MergeArgs {
    MergeArgs {
        input_dir: input.to_owned(),
        output_dir: output.to_owned(),
        capacity: 1_000_000,
        suffix: ".reflection.dat".to_owned(),
        json: true,
        dump: false,
        color: false,
    }
}

#[test]
fn writes_all_outputs() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("point.reflection.dat"), POINT).unwrap();

    let summary = execute(&args(input.path(), output.path())).unwrap();

    assert_eq!(summary.types, 2);
    assert_eq!(summary.stats.files_merged, 1);
    let blob = fs::read(output.path().join("reflection.dat")).unwrap();
    assert_eq!(blob.len(), summary.bytes);
    let asm = fs::read_to_string(output.path().join("reflection.dat.S")).unwrap();
    assert!(asm.contains("_reflection_dat_start:"));
    let json = fs::read_to_string(output.path().join("reflection.json")).unwrap();
    assert!(json.contains("\"Point\""));

    let first_line = summary.to_string().lines().next().unwrap().to_owned();
    insta::assert_snapshot!(first_line, @"merged 1 of 1 descriptor files (0 skipped): 2 types, 3 strings, 0 overrides");
}

#[test]
fn no_json_skips_the_debug_dump() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("point.reflection.dat"), POINT).unwrap();

    let mut a = args(input.path(), output.path());
    a.json = false;
    let summary = execute(&a).unwrap();

    assert_eq!(summary.written.json, None);
    assert!(!output.path().join("reflection.json").exists());
    assert!(output.path().join("reflection.dat").exists());
}

#[test]
fn overflow_writes_nothing() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("point.reflection.dat"), POINT).unwrap();

    let mut a = args(input.path(), output.path());
    a.capacity = 8;
    let err = execute(&a).unwrap_err();

    assert!(matches!(err, Error::Compile(typeblob_compiler::Error::Overflow(_))));
    assert!(err.to_string().starts_with("buffer overflow"));
    assert!(!output.path().join("reflection.dat").exists());
    assert!(!output.path().join("reflection.dat.S").exists());
}

#[test]
fn dump_lists_the_blob() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("point.reflection.dat"), POINT).unwrap();

    let mut a = args(input.path(), output.path());
    a.dump = true;
    let summary = execute(&a).unwrap();

    let listing = summary.dump.unwrap();
    assert!(listing.contains("T2 struct Point size=8"));
    assert!(listing.contains("  x @0: int"));
}

#[test]
fn empty_input_still_emits_a_table() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let nested = output.path().join("gen/reflect");

    let summary = execute(&args(input.path(), &nested)).unwrap();

    assert_eq!(summary.types, 0);
    assert_eq!(fs::read(nested.join("reflection.dat")).unwrap().len(), 24);
}
