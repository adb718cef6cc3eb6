use orchctl::cli::execute_command;
use orchctl::commands::create_cli_commands;
use tracing_subscriber::EnvFilter;

/// Main entry point for the program
#[tokio::main]
async fn main() {
    // Initialize the logging subsystem
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let matches = create_cli_commands();

    match execute_command(&matches).await {
        Ok(()) => {}
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(e.exit_code().code());
        }
    }
}
