// src/main.rs
use clap::Parser;
use premcli::cli::Args;
use premcli::{commands, logging};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    // The guard must outlive the command so buffered log lines are flushed
    let guard = match logging::setup_logging(&args).await {
        Ok((log_file_path, guard)) => {
            info!("Logs are being written to: {log_file_path}");
            Some(guard)
        }
        Err(e) => {
            eprintln!("Warning: logging disabled: {e}");
            None
        }
    };

    if let Err(e) = commands::run(&args).await {
        error!("Command failed: {e}");
        println!("Error: {e}");
        drop(guard);
        std::process::exit(1);
    }
}
