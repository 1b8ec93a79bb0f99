use fixture_runner::cli;
use std::process::ExitCode;

/// Exit code for errors that abort the whole run (same as clap usage errors).
const FATAL_EXIT_CODE: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse command line arguments and process the selected action
    match cli::run().await {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(FATAL_EXIT_CODE)
        }
    }
}
