use std::env;
use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod clipboard;
mod entropy;
mod exits;
mod input;
mod pass;
mod reveal;
mod settings;
mod terminal;
mod tui;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "seedpass=warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => {
            tui::run();
            ExitCode::SUCCESS
        }
        _ => cli::run(args),
    }
}
