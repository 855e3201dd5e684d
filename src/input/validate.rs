//! Pure predicates over field contents.

/// Longest name accepted while typing.
pub const NAME_MAX_CHARS: usize = 40;
/// Exact identity number length.
pub const IDENTITY_CHARS: usize = 9;

/// The three user-supplied fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Pet,
    Identity,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Pet, Field::Identity];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Pet => "Pet",
            Field::Identity => "Identity number",
        }
    }

    /// Identity numbers are echoed as `*`.
    pub fn is_masked(self) -> bool {
        self == Field::Identity
    }
}

fn is_name_char(ch: char) -> bool {
    ch.is_whitespace() || ch.is_alphabetic()
}

/// Letters (any script, accents and `ñ` included) and whitespace, not blank.
pub fn is_name_valid(s: &str) -> bool {
    !s.trim().is_empty() && s.chars().all(is_name_char)
}

/// Exactly nine letters or digits.
pub fn is_identity_number_valid(s: &str) -> bool {
    s.chars().count() == IDENTITY_CHARS && s.chars().all(char::is_alphanumeric)
}

/// Per-keystroke check: would `proposed` be an acceptable in-progress value?
///
/// Empty is always accepted so the field can be cleared.
pub fn validate_partial(field: Field, proposed: &str) -> bool {
    if proposed.is_empty() {
        return true;
    }
    match field {
        Field::Name => {
            proposed.chars().count() <= NAME_MAX_CHARS && proposed.chars().all(is_name_char)
        }
        Field::Identity => {
            proposed.chars().count() <= IDENTITY_CHARS
                && proposed.chars().all(char::is_alphanumeric)
        }
        Field::Pet => true,
    }
}
