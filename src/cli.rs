use crate::stamper::{StampConfig, DEFAULT_COUNTER_NAME, DEFAULT_HEADER_NAME};
use crate::store::StoreKind;
use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  buildstamp Core/Inc
  buildstamp --store counter-file Core/Inc
  buildstamp --header version.h -v build/generated";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "buildstamp",
    version,
    about = "Incrementing build number and timestamp header generator",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Output directory for the generated header
    pub path: Option<PathBuf>,

    /// Where the build counter is persisted
    #[arg(short = 's', long = "store", value_enum, default_value_t = StoreKind::JsonHeader)]
    pub store: StoreKind,

    /// File name of the generated header
    #[arg(long = "header", default_value = DEFAULT_HEADER_NAME)]
    pub header_name: String,

    /// File name of the counter file (counter-file store only)
    #[arg(long = "counter", default_value = DEFAULT_COUNTER_NAME)]
    pub counter_name: String,

    /// Increase diagnostic output (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the first-run warning
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    /// Settings for a stamping run, or `None` when no output path was given.
    pub fn stamp_config(&self) -> Option<StampConfig> {
        let out_dir = self.path.clone()?;
        Some(StampConfig {
            header_name: self.header_name.clone(),
            counter_name: self.counter_name.clone(),
            quiet: self.quiet,
            ..StampConfig::new(out_dir, self.store)
        })
    }

    /// Default log filter directive for the verbosity level.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// One-line usage shown when the output path is missing.
pub fn usage(program: &str) -> String {
    format!("Usage {program} <path>")
}
