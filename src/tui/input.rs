use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};
use tracing::warn;
use zeroize::Zeroize;

use crate::input::{Field, InputForm};
use crate::terminal::{RawModeGuard, flush, reset_terminal};

fn is_ctrl(key: &KeyEvent, ch: char) -> bool {
    key.code == KeyCode::Char(ch) && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Ctrl+C always leaves the program; the atexit hook restores the terminal.
fn exit_on_ctrl_c(key: &KeyEvent) {
    if is_ctrl(key, 'c') {
        reset_terminal();
        println!();
        std::process::exit(0);
    }
}

fn redraw(prompt: &str, field: Field, chars: &[char], cursor_pos: usize, last_len: usize) {
    let mut shown: String = if field.is_masked() {
        "*".repeat(chars.len())
    } else {
        chars.iter().collect()
    };
    print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
    print!("\r{}: {}", prompt, shown);
    print!("\x1b[{}G", prompt.chars().count() + 3 + cursor_pos);
    flush();
    shown.zeroize();
}

/// Edit `field` in place. Every keystroke is offered to the form; edits the
/// form rejects are dropped with a bell.
///
/// Returns false on Esc or when the terminal cannot enter raw mode.
pub fn get_field_input(field: Field, form: &mut InputForm) -> bool {
    let prompt = field.label();
    let mut chars: Vec<char> = form.get(field).chars().collect();
    let mut cursor_pos = chars.len();
    let mut last_len = chars.len();
    let mut cancelled = false;

    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(e) => {
            warn!(error = %e, "raw mode unavailable");
            return false;
        }
    };

    redraw(prompt, field, &chars, cursor_pos, last_len);

    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                exit_on_ctrl_c(&key);

                let mut proposed = chars.clone();
                let mut new_pos = cursor_pos;
                match key.code {
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Enter | KeyCode::Tab => break,
                    _ if is_ctrl(&key, 'u') => {
                        proposed.clear();
                        new_pos = 0;
                    }
                    KeyCode::Backspace if cursor_pos > 0 => {
                        new_pos -= 1;
                        proposed.remove(new_pos);
                    }
                    KeyCode::Delete if cursor_pos < proposed.len() => {
                        proposed.remove(cursor_pos);
                    }
                    KeyCode::Left => new_pos = cursor_pos.saturating_sub(1),
                    KeyCode::Right => new_pos = (cursor_pos + 1).min(proposed.len()),
                    KeyCode::Home => new_pos = 0,
                    KeyCode::End => new_pos = proposed.len(),
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        proposed.insert(cursor_pos, c);
                        new_pos += 1;
                    }
                    _ => {}
                }

                if proposed == chars {
                    proposed.zeroize();
                    cursor_pos = new_pos;
                } else if form.set(field, proposed.iter().collect()) {
                    chars.zeroize();
                    chars = proposed;
                    cursor_pos = new_pos;
                } else {
                    proposed.zeroize();
                    print!("\x07");
                }

                redraw(prompt, field, &chars, cursor_pos, last_len);
                last_len = chars.len();
            }
            Ok(_) => {}
            Err(_) => break,
        }
    }

    chars.zeroize();
    drop(guard);
    println!();
    !cancelled
}

/// Wait for one key press with the cursor hidden. `None` if the terminal
/// cannot be read.
pub fn read_key() -> Option<KeyCode> {
    let _guard = RawModeGuard::hidden().ok()?;
    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                exit_on_ctrl_c(&key);
                return Some(key.code);
            }
            Ok(_) => {}
            Err(_) => return None,
        }
    }
}
