//! Counter stores: where the last-used build number is persisted.

use crate::counter::is_valid_stored;
use crate::error::{Result, StampError};
use crate::header::parse_counter_comment;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Persistence strategy for the build counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StoreKind {
    /// Plain decimal counter in a separate file next to the header.
    CounterFile,
    /// JSON comment on the first line of the generated header itself.
    JsonHeader,
}

/// A persisted build-number register with read-modify-write semantics.
pub trait CounterStore {
    /// File backing this store.
    fn location(&self) -> &Path;

    /// Read the last persisted build number, or `None` if nothing is stored yet.
    fn load(&self) -> Result<Option<i64>>;

    /// Persist `build` after the header for it has been written.
    fn store(&self, build: i64) -> Result<()>;
}

/// Counter kept as raw decimal text in its own file (e.g. `buildinfo.num`).
#[derive(Debug, Clone)]
pub struct CounterFile {
    path: PathBuf,
}

impl CounterFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CounterStore for CounterFile {
    fn location(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Option<i64>> {
        let Some(text) = read_if_present(&self.path)? else {
            return Ok(None);
        };
        let value: i64 = text
            .trim()
            .parse()
            .map_err(|e| StampError::parse(&self.path, format!("{e}: {:?}", text.trim())))?;
        checked_stored(&self.path, value).map(Some)
    }

    fn store(&self, build: i64) -> Result<()> {
        debug!(path = %self.path.display(), build, "writing counter file");
        fs::write(&self.path, build.to_string()).map_err(|e| StampError::io(&self.path, e))
    }
}

/// Counter folded into the generated header as `/* {"BUILD": n} */`.
#[derive(Debug, Clone)]
pub struct HeaderComment {
    path: PathBuf,
}

impl HeaderComment {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CounterStore for HeaderComment {
    fn location(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Option<i64>> {
        let Some(text) = read_if_present(&self.path)? else {
            return Ok(None);
        };
        let first = text
            .lines()
            .next()
            .ok_or_else(|| StampError::parse(&self.path, "header is empty"))?;
        let value = parse_counter_comment(first).map_err(|e| StampError::parse(&self.path, e))?;
        checked_stored(&self.path, value).map(Some)
    }

    fn store(&self, build: i64) -> Result<()> {
        // The counter comment is part of the rendered header.
        debug!(path = %self.path.display(), build, "counter stored in header");
        Ok(())
    }
}

fn read_if_present(path: &Path) -> Result<Option<String>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StampError::io(path, e)),
    };
    // Present but not text: the store is corrupt, not unreadable.
    String::from_utf8(bytes)
        .map(Some)
        .map_err(|e| StampError::parse(path, e.to_string()))
}

fn checked_stored(path: &Path, value: i64) -> Result<i64> {
    if is_valid_stored(value) {
        Ok(value)
    } else {
        Err(StampError::parse(path, format!("{value} is below -1")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn counter_file_absent_loads_none() {
        let tmp = TempDir::new().unwrap();
        let store = CounterFile::new(tmp.path().join("buildinfo.num"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn counter_file_trims_whitespace() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("buildinfo.num");
        fs::write(&path, " 17\n").unwrap();
        assert_eq!(CounterFile::new(&path).load().unwrap(), Some(17));
    }

    #[test]
    fn counter_file_store_has_no_trailing_newline() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("buildinfo.num");
        CounterFile::new(&path).store(3).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "3");
    }

    #[test]
    fn counter_file_rejects_text_and_out_of_range() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("buildinfo.num");
        fs::write(&path, "twelve").unwrap();
        assert!(matches!(
            CounterFile::new(&path).load(),
            Err(StampError::Parse { .. })
        ));
        fs::write(&path, "-5").unwrap();
        assert!(matches!(
            CounterFile::new(&path).load(),
            Err(StampError::Parse { .. })
        ));
    }

    #[test]
    fn header_comment_reads_first_line_only() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("buildinfo.h");
        fs::write(&path, "/* {\"BUILD\": -1} */\n/* {\"BUILD\": 99} */\n").unwrap();
        assert_eq!(HeaderComment::new(&path).load().unwrap(), Some(-1));
    }

    #[test]
    fn header_comment_empty_file_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("buildinfo.h");
        fs::write(&path, "").unwrap();
        assert!(matches!(
            HeaderComment::new(&path).load(),
            Err(StampError::Parse { .. })
        ));
    }

    #[test]
    fn non_utf8_store_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let num = tmp.path().join("buildinfo.num");
        let header = tmp.path().join("buildinfo.h");
        fs::write(&num, [0xFF, 0xFE, b'7']).unwrap();
        fs::write(&header, [b'/', b'*', 0xC3, 0x28, b'\n']).unwrap();

        assert!(matches!(
            CounterFile::new(&num).load(),
            Err(StampError::Parse { .. })
        ));
        assert!(matches!(
            HeaderComment::new(&header).load(),
            Err(StampError::Parse { .. })
        ));
    }

    #[test]
    fn directory_in_place_of_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("buildinfo.h");
        fs::create_dir(&path).unwrap();
        assert!(matches!(
            HeaderComment::new(&path).load(),
            Err(StampError::Io { .. })
        ));
    }
}
