use thiserror::Error;

/// Why a set of inputs was rejected before generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Name cannot be empty and may only contain letters and spaces.")]
    EmptyName,
    #[error("Name may only contain letters and spaces.")]
    InvalidName,
    #[error("Enter the pet's name.")]
    EmptyPet,
    #[error("Enter the identity number (9 characters).")]
    EmptyIdentity,
    #[error("Identity number must be exactly 9 alphanumeric characters.")]
    InvalidIdentity,
}

impl InputError {
    /// Short heading for the rejection box.
    pub fn title(self) -> &'static str {
        match self {
            InputError::EmptyName | InputError::InvalidName => "Invalid name",
            InputError::EmptyPet => "Missing pet",
            InputError::EmptyIdentity => "Missing identity number",
            InputError::InvalidIdentity => "Invalid identity number",
        }
    }
}
