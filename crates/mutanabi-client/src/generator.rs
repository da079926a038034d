//! Abstraction over the poem source.

use std::future::Future;

use mutanabi_model::ValidatedInput;

use crate::error::Result;

/// Anything that can turn validated input into poem text.
///
/// [`crate::GenerationClient`] is the production implementation; tests
/// substitute canned or delayed generators.
pub trait PoemGenerator {
    /// Generate a poem for the given seed word and length.
    fn generate(&self, input: &ValidatedInput) -> impl Future<Output = Result<String>> + Send;
}
