//! Field checks.
//!
//! Each check runs its rules in order and reports the first failure only.

mod count;
mod word;

pub use count::check_count;
pub use word::check_word;
