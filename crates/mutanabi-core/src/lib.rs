//! Form orchestration for the Mutanabi poem generator.
//!
//! [`SubmissionController`] owns the [`mutanabi_model::FormState`] and moves
//! it through validation, submission and completion. [`ClockSubscription`]
//! is the live clock shown next to the form.

pub mod clock;
pub mod controller;
pub mod state;

pub use clock::{CLOCK_PERIOD, ClockSubscription, format_clock};
pub use controller::SubmissionController;
pub use state::{Completion, ControllerState, ResponsePolicy, Submission, SubmissionId};
