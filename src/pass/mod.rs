//! Password generation from personal seeds.

pub mod charset;
mod generate;
pub mod seeds;
pub mod transform;

pub use generate::{generate_batch, generate_passwords_from_inputs};
