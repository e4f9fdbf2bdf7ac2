use std::process::ExitCode;

use clap::Parser;
use split_cli::cli_args::Args;
use split_core::error::Result;

fn execute() -> Result<()> {
    let args = Args::parse();
    split_cli::run(&args)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("split: {e}");
            ExitCode::FAILURE
        }
    }
}
