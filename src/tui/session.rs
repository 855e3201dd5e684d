//! Interactive flow: collect fields, generate, reveal one at a time.

use crossterm::event::KeyCode;
use tracing::debug;

use super::{Notice, get_field_input, print_banner, print_rejection, print_reveal, read_key};
use crate::clipboard::Clipboard;
use crate::input::{Field, InputError, InputForm};
use crate::pass::generate_passwords_from_inputs;
use crate::reveal::{PasswordCursor, Reveal};
use crate::settings::{DEFAULT_COUNT, DEFAULT_LENGTH};
use crate::terminal::{clear, reset_terminal};

enum After {
    Reset,
    Quit,
}

pub fn run() {
    reset_terminal();

    let mut form = InputForm::default();
    let mut clipboard = Clipboard::default();
    let mut rejection: Option<InputError> = None;

    loop {
        clear();
        print_banner();
        if let Some(err) = rejection.take() {
            print_rejection(err);
        }

        if !collect_fields(&mut form) {
            break;
        }

        let passwords = match form.submit() {
            Ok(seeds) => generate_passwords_from_inputs(
                seeds.name(),
                seeds.pet(),
                seeds.identity(),
                DEFAULT_COUNT,
                DEFAULT_LENGTH,
            ),
            Err(err) => {
                debug!(reason = ?err, "inputs rejected");
                rejection = Some(err);
                continue;
            }
        };

        match reveal(PasswordCursor::new(passwords), &mut clipboard) {
            After::Reset => form.reset(),
            After::Quit => break,
        }
    }

    clear();
}

fn collect_fields(form: &mut InputForm) -> bool {
    Field::ALL
        .into_iter()
        .all(|field| get_field_input(field, form))
}

fn reveal(mut cursor: PasswordCursor, clipboard: &mut Clipboard) -> After {
    let mut notice = None;
    cursor.advance();

    loop {
        clear();
        print_reveal(&cursor, notice.take().as_ref());

        let Some(key) = read_key() else {
            return After::Quit;
        };
        match key {
            KeyCode::Char('n') | KeyCode::Enter | KeyCode::Right => {
                match cursor.advance() {
                    Reveal::Shown {
                        index,
                        total,
                        password,
                    } => debug!(index, total, chars = password.chars().count(), "revealed"),
                    Reveal::Exhausted => {
                        notice = Some(Notice::Info("All generated passwords have been shown."));
                    }
                }
            }
            KeyCode::Char('c') => {
                if let Some(pass) = cursor.current() {
                    notice = Some(match clipboard.copy(pass) {
                        Ok(()) => Notice::Info("Password copied to clipboard."),
                        Err(e) => Notice::Warning(format!("Could not copy: {e}")),
                    });
                }
            }
            KeyCode::Char('r') => return After::Reset,
            KeyCode::Char('q') | KeyCode::Esc => return After::Quit,
            _ => {}
        }
    }
}
