//! Controller states and submission bookkeeping.

use std::fmt;

use mutanabi_model::ValidatedInput;

/// Identifier of one submission, increasing per controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionId(pub(crate) u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the controller is in the submit cycle.
///
/// `Idle -> Validating -> (Invalid | Submitting) -> (Succeeded | Failed) -> Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    #[default]
    Idle,
    Validating,
    /// Field errors are shown; the next edit returns to idle.
    Invalid,
    /// At least one request is in flight.
    Submitting,
    Succeeded,
    Failed,
}

impl ControllerState {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Invalid => "invalid",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }

    /// Invalid or completed; an edit moves these back to idle.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Invalid | Self::Succeeded | Self::Failed)
    }
}

impl fmt::Display for ControllerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How overlapping submissions resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponsePolicy {
    /// Every response that arrives overwrites the shown result, so the last
    /// one to resolve wins regardless of when it was sent.
    #[default]
    LastResolvedWins,
    /// Responses to anything but the most recent submission are dropped.
    LatestRequestWins,
}

/// A validated request handed to the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: SubmissionId,
    pub input: ValidatedInput,
}

/// What a completed request did to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The poem is now the shown result.
    Succeeded,
    /// The request failed; the error was logged and nothing is shown.
    Failed,
    /// A newer submission exists and this response was dropped.
    Superseded,
}
