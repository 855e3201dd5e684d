use crate::input::InputError;
use crate::reveal::PasswordCursor;
use crate::settings::{DEFAULT_COUNT, DEFAULT_LENGTH};
use crate::terminal::{
    BOLD, DIM, RESET, box_bottom, box_line, box_line_center, box_opt, box_top, print_error,
    print_rule,
};

/// Message shown under the reveal box.
pub enum Notice {
    Info(&'static str),
    Warning(String),
}

pub fn print_help() {
    box_top("Seedpass");
    box_line_center("Passwords derived from personal seeds");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without arguments. Type a name, a");
    box_line("     pet name and an identity number, then step through");
    box_line(&format!(
        "     {DEFAULT_COUNT} generated passwords one at a time."
    ));
    box_line("  2) Client: pass --name, --pet and --id to print the");
    box_line("     whole batch, one password per line.");
    box_line("");
    box_line("USAGE:");
    box_line("  seedpass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Inputs:");
    box_opt("  --name <NAME>", "Letters and spaces only");
    box_opt("  --pet <PET>", "Pet name, any characters");
    box_opt("  --id <ID>", "Exactly 9 letters or digits");
    box_line("");
    box_line(" Password:");
    box_opt(
        "  -n, --number <N>",
        &format!("How many to generate (default: {DEFAULT_COUNT})"),
    );
    box_opt(
        "  -l, --length <N>",
        &format!("Characters per password (default: {DEFAULT_LENGTH})"),
    );
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress warnings and confirmations");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  seedpass --name Ana --pet Rex --id 12345678A");
    box_line("  seedpass --name 'Ana María' --pet Rex --id X1234567L -b");
    box_line("");
    box_bottom();
    println!();
}

pub fn print_banner() {
    box_top("Seedpass");
    box_line_center(&format!(
        "{DEFAULT_COUNT} passwords, {DEFAULT_LENGTH} characters each"
    ));
    print_rule();
    box_line("Name: letters and spaces only.");
    box_line("Identity number: exactly 9 letters or digits.");
    box_line(&format!("{DIM}[Enter/Tab] next field  [Esc] quit{RESET}"));
    box_bottom();
    println!();
}

pub fn print_rejection(err: InputError) {
    print_error(&format!("{}: {}", err.title(), err));
    println!();
}

pub fn print_reveal(cursor: &PasswordCursor, notice: Option<&Notice>) {
    let (shown, total) = cursor.position();

    box_top("Passwords");
    box_line(&format!("{shown} / {total}"));
    print_rule();
    box_line("");
    box_line_center(&format!("{BOLD}{}{RESET}", cursor.current().unwrap_or("")));
    box_line("");
    print_rule();
    let next = if cursor.has_next() {
        "[n] Next".to_string()
    } else {
        format!("{DIM}[n] Next{RESET}")
    };
    box_line_center(&format!("{next}   [c] Copy   [r] Reset   [q] Quit"));
    box_bottom();

    match notice {
        Some(Notice::Info(msg)) => println!("{msg}"),
        Some(Notice::Warning(msg)) => print_error(msg),
        None => {}
    }
}
