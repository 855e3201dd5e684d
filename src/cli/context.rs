//! CLI context - bundles settings, flags, and clipboard state.

use std::io::Write;

use thiserror::Error;
use tracing::info;
use zeroize::Zeroize;

use super::{CliFlags, ParseError, prompts};
use crate::clipboard::Clipboard;
use crate::input::{InputError, Seeds};
use crate::pass;
use crate::pass::charset::distinct_fills;
use crate::settings::Settings;
use crate::tui::print_help;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Rejected(#[from] InputError),
    #[error("Cannot make {count} unique passwords of length {length}")]
    Unsatisfiable { count: usize, length: usize },
    #[error("Aborted.")]
    Aborted,
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<Clipboard>,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        Ok(Self {
            settings: Settings::default(),
            clipboard: None,
            flags: super::parse(args)?,
        })
    }

    /// Validate inputs, generate, and print or copy the batch.
    pub fn run(&mut self) -> Result<(), CliError> {
        if self.handle_info_flags() {
            return Ok(());
        }
        prompts::set_quiet(self.flags.quiet);

        let (name, pet, identity) = self.flags.inputs();
        let seeds = Seeds::from_raw(name, pet, identity)?;

        self.apply_flags()?;
        self.generate_output(&seeds);
        Ok(())
    }

    fn handle_info_flags(&self) -> bool {
        if self.flags.help {
            print_help();
            return true;
        }
        if self.flags.version {
            println!("seedpass {}", env!("CARGO_PKG_VERSION"));
            return true;
        }
        false
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) -> Result<(), CliError> {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }

        let (count, length) = (
            self.settings.number_of_passwords,
            self.settings.pass_length,
        );
        if count > distinct_fills(length) {
            return Err(CliError::Unsatisfiable { count, length });
        }

        if self.flags.clipboard {
            match Clipboard::open() {
                Ok(c) => {
                    self.clipboard = Some(c);
                    self.settings.to_clipboard = true;
                }
                Err(e) => {
                    info!(error = %e, "clipboard unavailable");
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(CliError::Aborted);
                    }
                }
            }
        }
        Ok(())
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self, seeds: &Seeds) {
        let mut passwords =
            pass::generate_batch(seeds.name(), seeds.pet(), seeds.identity(), &self.settings);

        match self.clipboard.as_mut() {
            Some(clipboard) if self.settings.to_clipboard => {
                let mut joined = passwords.join("\n");
                match clipboard.copy(&joined) {
                    Ok(()) => prompts::clipboard_copied(passwords.len()),
                    Err(e) => prompts::clipboard_error(&e.to_string()),
                }
                joined.zeroize();
            }
            _ => print_batch(&passwords),
        }

        passwords.zeroize();
    }
}

fn print_batch(passwords: &[String]) {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for pass in passwords {
        if out.write_all(pass.as_bytes()).is_err() || out.write_all(b"\n").is_err() {
            break;
        }
    }
    let _ = out.flush();
}
