#![allow(dead_code)]

use buildstamp::header::parse_counter_comment;
use buildstamp::{StampConfig, StoreKind};
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Fixed local time used for deterministic headers.
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2018, 7, 21)
        .unwrap()
        .and_hms_opt(23, 1, 2)
        .unwrap()
}

/// StampConfig with the first-run warning suppressed.
pub fn quiet_config(dir: &Path, kind: StoreKind) -> StampConfig {
    StampConfig {
        quiet: true,
        ..StampConfig::new(dir, kind)
    }
}

/// Create an output directory seeded with the given (name, contents) files.
pub fn seeded_dir(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (name, contents) in files {
        fs::write(tmp.path().join(name), contents).unwrap();
    }
    tmp
}

pub fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

/// Build number recorded in a JSON-annotated header.
pub fn header_build(dir: &Path) -> i64 {
    let text = read(dir, "buildinfo.h");
    parse_counter_comment(text.lines().next().unwrap()).unwrap()
}

/// Build number recorded in a plain counter file.
pub fn counter_file_build(dir: &Path) -> i64 {
    read(dir, "buildinfo.num").parse().unwrap()
}
