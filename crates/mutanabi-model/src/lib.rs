//! Data model for the Mutanabi poem generator form.
//!
//! The types here are shared by the validator, the submission controller and
//! the CLI. Nothing in this crate performs I/O.

pub mod error;
pub mod field;
pub mod form;
pub mod input;
pub mod messages;

pub use error::{ModelError, Result};
pub use field::{Field, FieldErrors, ValidationError};
pub use form::FormState;
pub use input::{ARABIC_BLOCK, DEFAULT_COUNT, DEFAULT_ENDPOINT, ValidatedInput};
pub use messages::{Label, LocalizedText, MessageCode};
