use colored::*;
use std::process::ExitCode;
use suite_runner::cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // A rejected selection has already been reported and is not a failure.
    match cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}
