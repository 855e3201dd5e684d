//! Client mode: generate from flags without the interactive screens.

mod context;
mod flags;
mod parse;
mod prompts;

use std::process::ExitCode;

pub use context::{CliError, Context};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Run client mode and map the outcome to a process exit code.
pub fn run(args: Vec<String>) -> ExitCode {
    let result = Context::new(&args)
        .map_err(CliError::from)
        .and_then(|mut ctx| ctx.run());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Aborted) => ExitCode::FAILURE,
        Err(e @ CliError::Parse(_)) => {
            prompts::error(&e.to_string());
            prompts::error("Run `seedpass --help` for usage.");
            ExitCode::from(2)
        }
        Err(e) => {
            prompts::error(&e.to_string());
            ExitCode::from(2)
        }
    }
}
