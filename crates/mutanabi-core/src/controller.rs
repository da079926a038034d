//! Submission controller.
//!
//! All mutation goes through `&mut self`, mirroring a single-threaded event
//! loop: edits, key presses, blur, submit and request completion are discrete
//! events. A submission is split into [`SubmissionController::begin_submit`]
//! and [`SubmissionController::complete`] so that several requests can be in
//! flight and resolve in any order.

use std::collections::BTreeSet;

use mutanabi_client::{ClientError, PoemGenerator};
use mutanabi_model::{DEFAULT_COUNT, Field, FieldErrors, FormState, Label};
use mutanabi_validate::{
    accepts_count_key, accepts_word_key, normalize_digits, validate, validate_field,
};
use tracing::{debug, error, info};

use crate::state::{Completion, ControllerState, ResponsePolicy, Submission, SubmissionId};

#[derive(Debug, Default)]
pub struct SubmissionController {
    form: FormState,
    state: ControllerState,
    policy: ResponsePolicy,
    next_id: u64,
    latest: Option<SubmissionId>,
    in_flight: BTreeSet<SubmissionId>,
    /// Outcome of the last applied completion, held until nothing is in flight.
    settled: Option<ControllerState>,
}

impl SubmissionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_policy(policy: ResponsePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    #[must_use]
    pub fn policy(&self) -> ResponsePolicy {
        self.policy
    }

    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    #[must_use]
    pub fn result_text(&self) -> Option<&str> {
        self.form.result_text.as_deref()
    }

    /// Label of the submit control.
    #[must_use]
    pub fn submit_label(&self) -> Label {
        self.form.submit_label()
    }

    /// Whether the submit control is enabled: both fields filled and no
    /// request in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.form.word.is_empty() && !self.form.count.is_empty() && !self.form.is_submitting
    }

    pub fn edit_word(&mut self, value: impl Into<String>) {
        self.form.word = value.into();
        self.after_edit();
    }

    /// Replace the count text. Arabic-Indic digits are normalized on entry.
    pub fn edit_count(&mut self, value: &str) {
        self.form.count = normalize_digits(value);
        self.after_edit();
    }

    /// Type one character into the word field. Returns false when the key
    /// is filtered out.
    pub fn key_press_word(&mut self, ch: char) -> bool {
        if !accepts_word_key(ch) {
            return false;
        }
        self.form.word.push(ch);
        self.after_edit();
        true
    }

    /// Type one character into the count field. Returns false when the key
    /// is filtered out.
    pub fn key_press_count(&mut self, ch: char) -> bool {
        if !accepts_count_key(ch) {
            return false;
        }
        let mut buf = [0u8; 4];
        self.form.count.push_str(&normalize_digits(ch.encode_utf8(&mut buf)));
        self.after_edit();
        true
    }

    /// A field lost focus: revalidate that field alone and show its error
    /// without submitting. Errors on the other field are left as they are.
    ///
    /// Returns true when the field is currently valid.
    pub fn blur(&mut self, field: Field) -> bool {
        match validate_field(field, self.form.value(field)) {
            None => {
                if field == Field::Count {
                    self.apply_count_default();
                }
                self.form.field_errors.remove(&field);
                true
            }
            Some(error) => {
                self.form.field_errors.insert(field, error);
                false
            }
        }
    }

    /// Validate the form and, when valid, issue a submission.
    ///
    /// On failure the errors are stored in the form and returned; no request
    /// is issued. On success the busy flag is set and the caller must pass
    /// the request's outcome to [`Self::complete`].
    pub fn begin_submit(&mut self) -> Result<Submission, FieldErrors> {
        self.transition(ControllerState::Validating);

        let input = match validate(&self.form.word, &self.form.count) {
            Ok(input) => input,
            Err(errors) => {
                self.form.field_errors = errors.clone();
                self.transition(ControllerState::Invalid);
                return Err(errors);
            }
        };

        self.form.field_errors.clear();
        self.apply_count_default();

        self.next_id += 1;
        let id = SubmissionId(self.next_id);
        self.latest = Some(id);
        self.in_flight.insert(id);
        self.settled = None;
        self.form.is_submitting = true;
        self.transition(ControllerState::Submitting);

        info!(submission = %id, length = input.count, "submitting generation request");
        debug!(submission = %id, seed = %input.word, "submission seed");

        Ok(Submission { id, input })
    }

    /// Record the outcome of a request issued by [`Self::begin_submit`].
    pub fn complete(
        &mut self,
        id: SubmissionId,
        result: Result<String, ClientError>,
    ) -> Completion {
        if !self.in_flight.remove(&id) {
            debug!(submission = %id, "completion for unknown submission ignored");
            return Completion::Superseded;
        }
        self.form.is_submitting = !self.in_flight.is_empty();

        if self.policy == ResponsePolicy::LatestRequestWins && self.latest != Some(id) {
            debug!(submission = %id, latest = ?self.latest, "dropping superseded response");
            if self.in_flight.is_empty() && self.state == ControllerState::Submitting {
                self.transition(self.settled.unwrap_or(ControllerState::Idle));
            }
            return Completion::Superseded;
        }

        let (completion, settled) = match result {
            Ok(text) => {
                info!(submission = %id, chars = text.chars().count(), "poem generated");
                self.form.result_text = Some(text);
                (Completion::Succeeded, ControllerState::Succeeded)
            }
            Err(err) => {
                error!(submission = %id, error = %err, "poem generation failed");
                (Completion::Failed, ControllerState::Failed)
            }
        };

        self.settled = Some(settled);
        if self.in_flight.is_empty() && self.state == ControllerState::Submitting {
            self.transition(settled);
        }
        completion
    }

    /// Validate, request the poem from `generator`, and record the outcome.
    pub async fn submit_with<G>(&mut self, generator: &G) -> Result<Completion, FieldErrors>
    where
        G: PoemGenerator,
    {
        let submission = self.begin_submit()?;
        let result = generator.generate(&submission.input).await;
        Ok(self.complete(submission.id, result))
    }

    fn after_edit(&mut self) {
        if self.state.is_settled() {
            self.transition(ControllerState::Idle);
        }
    }

    /// An empty count is shown as the default once the form is validated.
    fn apply_count_default(&mut self) {
        if self.form.count.is_empty() {
            self.form.count = DEFAULT_COUNT.to_string();
        }
    }

    fn transition(&mut self, next: ControllerState) {
        if self.state != next {
            tracing::trace!(from = %self.state, to = %next, "controller transition");
            self.state = next;
        }
    }
}
