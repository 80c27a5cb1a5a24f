#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use buildstamp::cli::{usage, Args};
use buildstamp::stamp;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("buildstamp: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();

    let Some(config) = args.stamp_config() else {
        let program = std::env::args().next().unwrap_or_else(|| "buildstamp".into());
        println!("{}", usage(&program));
        std::process::exit(1);
    };

    init_tracing(args.log_level());

    let now = chrono::Local::now().naive_local();
    let report = stamp(&config, now)
        .with_context(|| format!("{}: failed to stamp build", config.out_dir.display()))?;

    if args.verbose > 0 {
        eprintln!(
            "buildstamp: build {} written to {}",
            report.build,
            report.header.display()
        );
    }
    Ok(())
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_tracing(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
