//! `farmsum init`: write a commented default config file.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use farmsum_core::config::{CONFIG_TEMPLATE, DEFAULT_CONFIG_FILE};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the config file into.
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing config file.
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: &InitArgs) -> anyhow::Result<()> {
    let path = args.dir.join(DEFAULT_CONFIG_FILE);
    if path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }

    std::fs::create_dir_all(&args.dir)
        .with_context(|| format!("failed to create {}", args.dir.display()))?;
    std::fs::write(&path, CONFIG_TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), "wrote default config");
    println!("Wrote {}", path.display());
    Ok(())
}
