use crate::{load_descriptors, utility::redact_url_password, Config};
use anyhow::{bail, Result};
use clap::Parser;
use console::style;
use kiln::{Report, StageOutcome};
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ApplyCommand {
    /// JSON file holding one entity descriptor or an array of them
    file: PathBuf,

    /// Database URL, e.g. `postgresql://user@localhost/app` or `sqlite:app.db`
    #[arg(long, env = "DATABASE_URL")]
    url: Option<String>,

    /// Directory model artifacts are written to
    #[arg(long)]
    models_dir: Option<PathBuf>,

    /// Reject names that are not plain SQL identifiers, and repeated or
    /// colliding field names
    #[arg(long)]
    strict: bool,
}

impl ApplyCommand {
    pub(crate) async fn run(self, config: &Config) -> Result<()> {
        let Some(url) = self.url.as_deref().or(config.database_url.as_deref()) else {
            bail!("no database URL; pass --url, set DATABASE_URL, or set `database_url` in the config file");
        };

        let entities = load_descriptors(&self.file)?;

        let mut builder = config.builder();
        if let Some(models_dir) = &self.models_dir {
            builder.models_dir(models_dir);
        }
        if self.strict {
            builder.strict_identifiers(true).unique_columns(true);
        }
        let kiln = builder.connect(url)?;

        println!();
        println!(
            "  {} {}",
            style("Applying to").cyan().bold(),
            style(redact_url_password(url)).bold()
        );
        println!();

        let mut failed = 0;

        for entity in &entities {
            let report = kiln.run(entity).await;
            print_report(&report);

            if !report.outcome().is_success() {
                failed += 1;
            }
        }

        println!();

        if failed > 0 {
            bail!("{failed} of {} entities failed", entities.len());
        }

        Ok(())
    }
}

fn print_report(report: &Report) {
    let outcome = report.outcome();

    if outcome.is_success() {
        println!(
            "  {} {}: {}",
            style("✓").green().bold(),
            style(&report.entity).bold(),
            outcome
        );
    } else {
        println!(
            "  {} {}: {}",
            style("✖").red().bold(),
            style(&report.entity).bold(),
            outcome
        );
    }

    if let Some(err) = report.compile.error() {
        println!("      {} {}", style("compile").dim(), style(err).red());
    }

    match &report.apply_schema {
        StageOutcome::Failed(err) => {
            println!("      {} {}", style("table").dim(), style(err).yellow());
        }
        StageOutcome::Succeeded => println!("      {} created", style("table").dim()),
        StageOutcome::Skipped => {}
    }

    if let Some(path) = &report.artifact_path {
        println!("      {} {}", style("model").dim(), path.display());
    } else if let Some(err) = report.store_artifact.error() {
        println!("      {} {}", style("model").dim(), style(err).red());
    }
}
