use crate::Config;
use anyhow::{bail, Result};
use clap::Parser;
use console::style;
use std::path::Path;

#[derive(Parser, Debug)]
pub struct InitCommand {
    /// Overwrite an existing config file
    #[arg(short, long)]
    force: bool,
}

impl InitCommand {
    pub(crate) fn run(self, path: &Path) -> Result<()> {
        if !self.force && std::fs::exists(path)? {
            eprintln!(
                "{}",
                style(format!("{} already exists", path.display())).red().bold()
            );
            bail!("{} already exists; pass --force to overwrite", path.display());
        }

        Config::default().save(path)?;

        println!(
            "  {} {}",
            style("✓").green().bold(),
            style(format!("Wrote {}", path.display())).dim()
        );

        Ok(())
    }
}
