#![forbid(unsafe_code)]

use buildstamp::cli::Args;
use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let out_dir = PathBuf::from("dist");
    let completions_dir = out_dir.join("completions");
    let man_dir = out_dir.join("man");

    fs::create_dir_all(&completions_dir)?;
    fs::create_dir_all(&man_dir)?;

    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        let mut cmd = Args::command();
        generate_to(shell, &mut cmd, "buildstamp", &completions_dir)?;
    }

    let mut page = Vec::new();
    Man::new(Args::command()).render(&mut page)?;
    fs::write(man_dir.join("buildstamp.1"), page)?;

    eprintln!("wrote completions and man page to {}", out_dir.display());
    Ok(())
}
