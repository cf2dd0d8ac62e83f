use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use scrollreveal_lib::cli::Cli;
use scrollreveal_lib::{bootstrap, dispatch};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let runtime = match bootstrap(&cli) {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Startup failed: {e:#}");
            return ExitCode::from(1);
        }
    };

    match dispatch(&runtime, cli.command).await {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if stdout.write_all(output.as_bytes()).is_err() {
                return ExitCode::from(1);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("{e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
