//! Generated C header text and the JSON counter comment embedded in it.

use crate::store::StoreKind;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fmt::Write as _;

/// Notice line written into every generated header.
pub const NOTICE: &str = "/* This file is auto-generated! Do not edit! */";

/// Timestamp layout used in `buildDateTime`, e.g. `14:05:09  03 March, 2024`.
const TIMESTAMP_FORMAT: &str = "%H:%M:%S  %d %B, %Y";

#[derive(Debug, Deserialize)]
struct CounterComment {
    #[serde(rename = "BUILD")]
    build: i64,
}

/// Render the first header line carrying the machine-readable counter,
/// e.g. `/* {"BUILD": 12} */`.
pub fn counter_comment(build: i64) -> String {
    format!("/* {{\"BUILD\": {build}}} */")
}

/// Extract the build number from a header's first line.
///
/// The line is `/* <json> */`; the comment markers are stripped and the
/// remainder must be a JSON object with an integer `BUILD` field.
pub fn parse_counter_comment(line: &str) -> Result<i64, String> {
    let body = line.trim();
    let body = body.strip_prefix("/*").unwrap_or(body);
    let body = body.strip_suffix("*/").unwrap_or(body);
    serde_json::from_str::<CounterComment>(body.trim())
        .map(|c| c.build)
        .map_err(|e| e.to_string())
}

/// Format a local timestamp the way `buildDateTime` presents it.
pub fn format_timestamp(stamp: &NaiveDateTime) -> String {
    stamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Render the full header for `build`, stamped at `stamp`.
///
/// [`StoreKind::JsonHeader`] adds the counter comment and the `buildNum_i`
/// integer constant; [`StoreKind::CounterFile`] emits only the string
/// constants.
pub fn render_header(build: i64, stamp: &NaiveDateTime, kind: StoreKind) -> String {
    let mut out = String::new();
    // Writing into a String is infallible.
    if kind == StoreKind::JsonHeader {
        let _ = writeln!(out, "{}", counter_comment(build));
    }
    let _ = writeln!(out, "{NOTICE}");
    match kind {
        StoreKind::CounterFile => {
            let _ = writeln!(
                out,
                "static const char * buildNum = \"Build number: {build}\\n\";"
            );
        }
        StoreKind::JsonHeader => {
            let _ = writeln!(
                out,
                "static const char * buildNum_s = \"Build number: {build}\\n\";"
            );
            let _ = writeln!(out, "static int buildNum_i = {build};");
        }
    }
    let _ = writeln!(
        out,
        "static const char * buildDateTime = \"Build time and date: {}\\n\";",
        format_timestamp(stamp)
    );
    out
}
