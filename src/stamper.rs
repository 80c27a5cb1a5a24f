//! One stamping run: load the counter, increment, rewrite header and store.

use crate::counter::next_build;
use crate::error::{Result, StampError};
use crate::header::render_header;
use crate::store::{CounterFile, CounterStore, HeaderComment, StoreKind};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_HEADER_NAME: &str = "buildinfo.h";
pub const DEFAULT_COUNTER_NAME: &str = "buildinfo.num";

/// Resolved settings for a stamping run.
#[derive(Debug, Clone)]
pub struct StampConfig {
    /// Directory receiving the header (and counter file, if any).
    pub out_dir: PathBuf,
    pub store: StoreKind,
    pub header_name: String,
    /// Only used with [`StoreKind::CounterFile`].
    pub counter_name: String,
    /// Suppress the first-run warning on stdout.
    pub quiet: bool,
}

impl StampConfig {
    pub fn new(out_dir: impl Into<PathBuf>, store: StoreKind) -> Self {
        Self {
            out_dir: out_dir.into(),
            store,
            header_name: DEFAULT_HEADER_NAME.to_string(),
            counter_name: DEFAULT_COUNTER_NAME.to_string(),
            quiet: false,
        }
    }

    pub fn header_path(&self) -> PathBuf {
        self.out_dir.join(&self.header_name)
    }

    /// The counter store selected by [`StampConfig::store`].
    pub fn counter_store(&self) -> Box<dyn CounterStore> {
        match self.store {
            StoreKind::CounterFile => {
                Box::new(CounterFile::new(self.out_dir.join(&self.counter_name)))
            }
            StoreKind::JsonHeader => Box::new(HeaderComment::new(self.header_path())),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampReport {
    /// Value found in the store; `None` on the first run.
    pub previous: Option<i64>,
    /// Build number written this run.
    pub build: i64,
    pub header: PathBuf,
    pub counter: PathBuf,
}

impl StampReport {
    pub fn first_run(&self) -> bool {
        self.previous.is_none()
    }
}

/// Message printed when no counter store exists yet.
pub fn first_run_warning(kind: StoreKind, store: &Path) -> String {
    match kind {
        StoreKind::CounterFile => format!(
            "Warning! The file {} does not exist. The current build number will be set to 0!",
            store.display()
        ),
        StoreKind::JsonHeader => format!(
            "Warning! The file {} does not exist. The file will be created and current build number will be set to 0!",
            store.display()
        ),
    }
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Run one stamp at local time `now`.
///
/// The counter is parsed before anything is written, so a malformed store
/// leaves both files untouched. The header is written before the counter
/// file; there is no rollback if the second write fails.
pub fn stamp(config: &StampConfig, now: NaiveDateTime) -> Result<StampReport> {
    let store = config.counter_store();
    let header = config.header_path();
    debug!(
        header = %header.display(),
        store = %store.location().display(),
        kind = ?config.store,
        "resolved paths"
    );
    if config.store == StoreKind::CounterFile
        && without_cur_dir(store.location()) == without_cur_dir(&header)
    {
        return Err(StampError::SamePath(header));
    }

    let previous = store.load()?;
    if previous.is_none() && !config.quiet {
        println!("{}", first_run_warning(config.store, store.location()));
    }
    let build = next_build(previous)?;

    fs::create_dir_all(&config.out_dir).map_err(|e| StampError::io(&config.out_dir, e))?;
    let text = render_header(build, &now, config.store);
    fs::write(&header, text).map_err(|e| StampError::io(&header, e))?;
    store.store(build)?;

    info!(?previous, build, header = %header.display(), "stamped build");
    Ok(StampReport {
        previous,
        build,
        header,
        counter: store.location().to_path_buf(),
    })
}
