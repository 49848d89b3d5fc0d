//! Tests for target selection and file targets.

use std::io::Write;

use crate::config::FileExistsPolicy;
use crate::error::{OutputError, Stage};
use crate::io::{FileOutput, OutputTarget, target_for};

#[test]
fn dash_and_empty_select_stdout() {
    assert_eq!(target_for("-", "").id(), "-");
    assert_eq!(target_for("", "out").id(), "-");
}

#[test]
fn file_target_id_is_resolved_path() {
    let target = target_for("hosts.txt", "out");
    let expected = std::path::Path::new("out").join("hosts.txt");
    assert_eq!(target.id(), expected.to_string_lossy());
}

#[test]
fn file_output_creates_directory_and_honours_policy() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("nested").join("results");
    let target = FileOutput::new("hosts.txt", out_dir.to_string_lossy());

    target
        .open(FileExistsPolicy::Overwrite)
        .unwrap()
        .write_all(b"a\n")
        .unwrap();
    target
        .open(FileExistsPolicy::Append)
        .unwrap()
        .write_all(b"b\n")
        .unwrap();

    assert_eq!(std::fs::read_to_string(target.path()).unwrap(), "a\nb\n");

    target
        .open(FileExistsPolicy::Overwrite)
        .unwrap()
        .write_all(b"c\n")
        .unwrap();
    assert_eq!(std::fs::read_to_string(target.path()).unwrap(), "c\n");
}

#[test]
fn file_output_with_empty_filename_is_invalid_argument() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("never");
    let target = FileOutput::new("", out_dir.to_string_lossy());

    let err = target.open(FileExistsPolicy::Overwrite).err().expect("empty filename");

    assert!(matches!(err, OutputError::InvalidArgument(_)));
    assert!(!out_dir.exists());
}

#[test]
fn file_output_keeps_create_directory_stage_and_directory_target() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"").unwrap();
    let nested = blocker.join("sub");
    let target = FileOutput::new("hosts.txt", nested.to_string_lossy());

    let err = target.open(FileExistsPolicy::Append).err().expect("directory under a file");

    match err {
        OutputError::Io { stage, target, .. } => {
            assert_eq!(stage, Stage::CreateDirectory);
            assert_eq!(target, nested.to_string_lossy());
        }
        other => panic!("expected an I/O error, got {other:?}"),
    }
}
