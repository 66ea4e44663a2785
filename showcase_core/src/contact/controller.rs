//! Submission state machine for the contact form.
//!
//! `idle -> submitting -> (success | error) -> idle`, with `error ->
//! submitting` on resubmit. The relay calls themselves run outside the
//! controller; it only prepares the payload and applies the report.

use super::dispatch::{DispatchOutcome, DispatchReport, PreparedDispatch};
use super::form::{ContactForm, Field, FieldErrors};
use crate::utils::config::RelayConfig;
use crate::utils::logger;
use std::time::Duration;

/// How long a success or error notice stays up before returning to idle.
pub const NOTICE_DURATION: Duration = Duration::from_secs(5);

pub const SUCCESS_TEXT: &str = "Thank you! Your message has been sent successfully.";
pub const PARTIAL_TEXT: &str =
    "Your message was delivered, but the confirmation email could not be sent.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct ContactController {
    form: ContactForm,
    errors: FieldErrors,
    status: SubmissionStatus,
    notice: Option<Notice>,
    notice_elapsed: Duration,
    owner_template: String,
    acknowledgment_template: String,
}

impl ContactController {
    pub fn new(owner_template: impl Into<String>, acknowledgment_template: impl Into<String>) -> Self {
        Self {
            owner_template: owner_template.into(),
            acknowledgment_template: acknowledgment_template.into(),
            ..Self::default()
        }
    }

    pub fn from_config(config: &RelayConfig) -> Self {
        Self::new(&config.owner_template_id, &config.acknowledgment_template_id)
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Submitting
    }

    /// Updates one field and drops its stale error message.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_field(field, value);
        self.errors.remove(&field);
    }

    /// Validates the form and, if it passes, moves to `Submitting` and
    /// returns the payload for [`super::dispatch`]. Returns `None` when a
    /// submission is already in flight or validation failed.
    pub fn begin_submit(&mut self, timestamp: String) -> Option<PreparedDispatch> {
        if !self.can_submit() {
            return None;
        }

        match self.form.validate() {
            Ok(submission) => {
                self.errors.clear();
                self.status = SubmissionStatus::Submitting;
                self.notice = None;
                Some(PreparedDispatch {
                    params: submission.into_params(timestamp),
                    owner_template: self.owner_template.clone(),
                    acknowledgment_template: self.acknowledgment_template.clone(),
                })
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Applies the result of both relay calls.
    pub fn finish_submit(&mut self, report: &DispatchReport) {
        let notice = match report.outcome() {
            DispatchOutcome::Delivered => {
                self.status = SubmissionStatus::Success;
                self.form.clear();
                self.errors.clear();
                Notice {
                    kind: NoticeKind::Success,
                    text: SUCCESS_TEXT.to_string(),
                }
            }
            DispatchOutcome::Partial => {
                self.status = SubmissionStatus::Success;
                self.form.clear();
                self.errors.clear();
                Notice {
                    kind: NoticeKind::Warning,
                    text: PARTIAL_TEXT.to_string(),
                }
            }
            DispatchOutcome::Failed => {
                self.status = SubmissionStatus::Error;
                let text = report
                    .error()
                    .map(|e| e.user_message())
                    .unwrap_or_default();
                logger::warn(&format!("Contact submission failed: {}", text));
                Notice {
                    kind: NoticeKind::Error,
                    text,
                }
            }
        };
        self.notice = Some(notice);
        self.notice_elapsed = Duration::ZERO;
    }

    /// Counts down the visible notice; returns to `Idle` once it expires.
    pub fn tick(&mut self, elapsed: Duration) {
        if !matches!(self.status, SubmissionStatus::Success | SubmissionStatus::Error) {
            return;
        }
        self.notice_elapsed += elapsed;
        if self.notice_elapsed >= NOTICE_DURATION {
            self.status = SubmissionStatus::Idle;
            self.notice = None;
            self.notice_elapsed = Duration::ZERO;
        }
    }

    /// Closes the notice early.
    pub fn dismiss_notice(&mut self) {
        if matches!(self.status, SubmissionStatus::Success | SubmissionStatus::Error) {
            self.status = SubmissionStatus::Idle;
        }
        self.notice = None;
        self.notice_elapsed = Duration::ZERO;
    }

    /// True while a notice is counting down and needs ticks.
    pub fn needs_ticks(&self) -> bool {
        self.notice.is_some()
    }
}
