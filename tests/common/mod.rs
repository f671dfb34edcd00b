use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn nlarchive_cmd() -> Command {
    let mut cmd = Command::cargo_bin("nlarchive").unwrap();
    cmd.env_remove("NLARCHIVE_DATA");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Copy the April fixture into `dir` and return its path
pub fn write_archive(dir: &Path) -> PathBuf {
    let source = Path::new("tests").join("fixtures").join("april.csv");
    let target = dir.join("april.csv");
    fs::copy(source, &target).unwrap();
    target
}
