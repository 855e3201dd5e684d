//! Input state for the three fields and the generation-time checks.

use zeroize::Zeroize;

use super::InputError;
use super::validate::{Field, is_identity_number_valid, is_name_valid, validate_partial};

/// Field contents as they are being typed.
#[derive(Debug, Default)]
pub struct InputForm {
    name: String,
    pet: String,
    identity: String,
}

impl InputForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Pet => &self.pet,
            Field::Identity => &self.identity,
        }
    }

    /// Replace `field` with `proposed` if it passes the per-keystroke check.
    /// A rejected edit leaves the field untouched.
    pub fn set(&mut self, field: Field, mut proposed: String) -> bool {
        if !validate_partial(field, &proposed) {
            proposed.zeroize();
            return false;
        }
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Pet => &mut self.pet,
            Field::Identity => &mut self.identity,
        };
        slot.zeroize();
        *slot = proposed;
        true
    }

    pub fn submit(&self) -> Result<Seeds, InputError> {
        Seeds::from_raw(&self.name, &self.pet, &self.identity)
    }

    pub fn reset(&mut self) {
        self.name.zeroize();
        self.pet.zeroize();
        self.identity.zeroize();
    }
}

impl Drop for InputForm {
    fn drop(&mut self) {
        self.reset();
    }
}

/// Trimmed inputs that passed every generation-time check.
#[derive(Debug)]
pub struct Seeds {
    name: String,
    pet: String,
    identity: String,
}

impl Seeds {
    /// Trim and check the raw fields, first failure wins.
    pub fn from_raw(name: &str, pet: &str, identity: &str) -> Result<Self, InputError> {
        let (name, pet, identity) = (name.trim(), pet.trim(), identity.trim());

        if name.is_empty() {
            return Err(InputError::EmptyName);
        }
        if !is_name_valid(name) {
            return Err(InputError::InvalidName);
        }
        if pet.is_empty() {
            return Err(InputError::EmptyPet);
        }
        if identity.is_empty() {
            return Err(InputError::EmptyIdentity);
        }
        if !is_identity_number_valid(identity) {
            return Err(InputError::InvalidIdentity);
        }

        Ok(Self {
            name: name.to_owned(),
            pet: pet.to_owned(),
            identity: identity.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pet(&self) -> &str {
        &self.pet
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }
}

impl Drop for Seeds {
    fn drop(&mut self) {
        self.name.zeroize();
        self.pet.zeroize();
        self.identity.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn valid_inputs_are_trimmed() {
        let seeds = Seeds::from_raw("  Ana ", " Rex\t", " 12345678A ").expect("valid");
        assert_eq!(seeds.name(), "Ana");
        assert_eq!(seeds.pet(), "Rex");
        assert_eq!(seeds.identity(), "12345678A");
    }

    #[rstest]
    #[case("", "Rex", "12345678A", InputError::EmptyName)]
    #[case("   ", "", "", InputError::EmptyName)]
    #[case("Ana123", "Rex", "12345678A", InputError::InvalidName)]
    #[case("Ana123", "", "", InputError::InvalidName)]
    #[case("Ana", "  ", "12345678A", InputError::EmptyPet)]
    #[case("Ana", "", "bad", InputError::EmptyPet)]
    #[case("Ana", "Rex", " ", InputError::EmptyIdentity)]
    #[case("Ana", "Rex", "1234567", InputError::InvalidIdentity)]
    #[case("Ana", "Rex", "12345678A!", InputError::InvalidIdentity)]
    fn first_failing_check_is_reported(
        #[case] name: &str,
        #[case] pet: &str,
        #[case] identity: &str,
        #[case] expected: InputError,
    ) {
        assert_eq!(Seeds::from_raw(name, pet, identity).unwrap_err(), expected);
    }

    #[test]
    fn form_rejects_invalid_keystrokes() {
        let mut form = InputForm::default();
        assert!(form.set(Field::Name, "Ana".into()));
        assert!(!form.set(Field::Name, "Ana1".into()));
        assert_eq!(form.get(Field::Name), "Ana");

        assert!(form.set(Field::Identity, "12345678A".into()));
        assert!(!form.set(Field::Identity, "12345678AB".into()));
        assert_eq!(form.get(Field::Identity), "12345678A");
    }

    #[test]
    fn form_submits_and_resets() {
        let mut form = InputForm::default();
        for (field, value) in [
            (Field::Name, "Ana"),
            (Field::Pet, "Rex"),
            (Field::Identity, "12345678A"),
        ] {
            assert!(form.set(field, value.into()));
        }
        assert!(form.submit().is_ok());

        form.reset();
        for field in Field::ALL {
            assert_eq!(form.get(field), "");
        }
        assert_eq!(form.submit().unwrap_err(), InputError::EmptyName);
    }
}
