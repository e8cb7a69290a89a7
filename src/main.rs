use std::env;

use cmt::{cli::run, update};
use console::style;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

fn main() {
    init_logging();

    // Startup check only prints a notice; a flaky network must never block
    // the requested command.
    if let Err(err) = update::check_for_new_version() {
        debug!("failed to check for latest release: {err}");
    }

    if let Err(err) = run() {
        eprintln!("{} {err}", style("Error:").red().bold());
        std::process::exit(1);
    }
}

fn init_logging() {
    let level = if env::var("DEBUG").is_ok_and(|value| !value.is_empty()) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
