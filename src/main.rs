use clap::Parser;
use mdtask::cli::commands::Cli;
use mdtask::cli::handlers;
use mdtask::logging;

fn main() {
    let cli = Cli::parse();

    // Logging is best effort: a read-only config dir must not stop the app
    let log_guard = logging::log_dir(cli.config.as_deref())
        .and_then(|dir| logging::init_logging(&dir).ok());
    tracing::debug!(command = cli.command.is_some(), "starting");

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        tracing::error!(error = %e, "exiting");
        // exit() skips destructors; flush the log first
        drop(log_guard);
        std::process::exit(1);
    }
}
