//! Personal input validation.

mod error;
mod form;
pub mod validate;

pub use error::InputError;
pub use form::{InputForm, Seeds};
pub use validate::Field;
