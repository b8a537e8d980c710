use crate::{load_descriptors, Config};
use anyhow::Result;
use clap::Parser;
use console::style;
use kiln::{Compiler, Dialect, VerifyOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct CompileCommand {
    /// JSON file holding one entity descriptor or an array of them
    file: PathBuf,

    /// SQL flavor to generate: postgresql or sqlite
    #[arg(long)]
    flavor: Option<Dialect>,

    /// Reject names that are not plain SQL identifiers, and repeated or
    /// colliding field names
    #[arg(long)]
    strict: bool,
}

impl CompileCommand {
    pub(crate) fn run(self, config: &Config) -> Result<()> {
        let entities = load_descriptors(&self.file)?;

        let compiler = Compiler::new(self.flavor.unwrap_or(config.flavor))
            .codegen(config.codegen.clone())
            .verify(VerifyOptions {
                strict_identifiers: self.strict || config.strict_identifiers,
                unique_columns: self.strict || config.unique_columns,
            });

        for entity in &entities {
            let compiled = compiler.compile(entity)?;

            println!("{}", style(format!("-- {}", compiled.name)).cyan().bold());
            println!("{}", compiled.ddl);
            println!();
            println!("{}", style(format!("// {}.{}", compiled.name, config.extension)).cyan().bold());
            println!("{}", compiled.model);
        }

        Ok(())
    }
}
