use console::style;
use kiln_cli::KilnCli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match KilnCli::new().parse_and_run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
