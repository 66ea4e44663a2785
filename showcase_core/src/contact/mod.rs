//! Contact form: validation, the submission state machine and the
//! two-call relay workflow.

pub mod controller;
pub mod dispatch;
pub mod form;

pub use controller::{ContactController, Notice, NoticeKind, SubmissionStatus};
pub use dispatch::{dispatch, DispatchOutcome, DispatchReport, PreparedDispatch};
pub use form::{ContactForm, Field, FieldErrors, ValidSubmission};
