//! The two-call send sequence: the owner notification, then the
//! acknowledgment to the visitor.

use crate::api::{RelayClient, TemplateParams};
use crate::utils::debug::DebugTimer;
use crate::utils::error::RelayError;
use crate::utils::logger;

/// Everything needed to run one submission against a relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedDispatch {
    pub params: TemplateParams,
    pub owner_template: String,
    pub acknowledgment_template: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Both emails were accepted
    Delivered,
    /// The owner got the message but the visitor's acknowledgment failed
    Partial,
    /// The owner notification failed; nothing was delivered
    Failed,
}

/// Result of each relay call. `acknowledgment` is `None` when the owner
/// call failed and the second call was never made.
#[derive(Debug)]
pub struct DispatchReport {
    pub owner: Result<String, RelayError>,
    pub acknowledgment: Option<Result<String, RelayError>>,
}

impl DispatchReport {
    pub fn outcome(&self) -> DispatchOutcome {
        match (&self.owner, &self.acknowledgment) {
            (Err(_), _) => DispatchOutcome::Failed,
            (Ok(_), Some(Ok(_))) => DispatchOutcome::Delivered,
            (Ok(_), _) => DispatchOutcome::Partial,
        }
    }

    /// The first error encountered, if any.
    pub fn error(&self) -> Option<&RelayError> {
        match (&self.owner, &self.acknowledgment) {
            (Err(e), _) => Some(e),
            (Ok(_), Some(Err(e))) => Some(e),
            _ => None,
        }
    }

    /// A report for a relay that could not even be constructed.
    pub fn not_configured(error: RelayError) -> Self {
        Self {
            owner: Err(error),
            acknowledgment: None,
        }
    }
}

/// Sends the owner notification and, only if it succeeded, the
/// acknowledgment. The calls never overlap.
pub async fn dispatch<R: RelayClient + ?Sized>(
    relay: &R,
    prepared: &PreparedDispatch,
) -> DispatchReport {
    let timer = DebugTimer::new("contact dispatch");
    let owner = relay.send(&prepared.owner_template, &prepared.params).await;

    if let Err(e) = &owner {
        logger::error(&format!("{} owner notification failed: {}", relay.relay_name(), e));
        timer.finish();
        return DispatchReport {
            owner,
            acknowledgment: None,
        };
    }

    let acknowledgment = relay
        .send(&prepared.acknowledgment_template, &prepared.params)
        .await;
    match &acknowledgment {
        Ok(_) => logger::info(&format!(
            "Contact message from {} delivered via {}",
            prepared.params.email,
            relay.relay_name()
        )),
        Err(e) => logger::warn(&format!(
            "{} acknowledgment to {} failed: {}",
            relay.relay_name(),
            prepared.params.email,
            e
        )),
    }
    timer.finish();

    DispatchReport {
        owner,
        acknowledgment: Some(acknowledgment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replays canned answers and records the templates it was asked for.
    struct ScriptedRelay {
        answers: Mutex<Vec<Result<String, RelayError>>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedRelay {
        fn new(mut answers: Vec<Result<String, RelayError>>) -> Self {
            answers.reverse();
            Self {
                answers: Mutex::new(answers),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RelayClient for ScriptedRelay {
        async fn send(&self, template_id: &str, _: &TemplateParams) -> Result<String, RelayError> {
            self.calls.lock().unwrap().push(template_id.to_string());
            self.answers
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Ok("OK".to_string()))
        }

        fn relay_name(&self) -> &'static str {
            "scripted"
        }
    }

    fn prepared() -> PreparedDispatch {
        PreparedDispatch {
            params: TemplateParams {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                subject: "Hi".to_string(),
                message: "A message that is long".to_string(),
                timestamp: "18 Oct 2026, 14:03:09".to_string(),
            },
            owner_template: "owner".to_string(),
            acknowledgment_template: "ack".to_string(),
        }
    }

    fn rejected() -> RelayError {
        RelayError::Rejected {
            status: 400,
            body: "bad".to_string(),
        }
    }

    #[tokio::test]
    async fn test_both_calls_in_order() {
        let relay = ScriptedRelay::new(vec![]);
        let report = dispatch(&relay, &prepared()).await;
        assert_eq!(relay.calls(), vec!["owner", "ack"]);
        assert_eq!(report.outcome(), DispatchOutcome::Delivered);
        assert!(report.error().is_none());
    }

    #[tokio::test]
    async fn test_owner_failure_skips_acknowledgment() {
        let relay = ScriptedRelay::new(vec![Err(rejected())]);
        let report = dispatch(&relay, &prepared()).await;
        assert_eq!(relay.calls(), vec!["owner"]);
        assert!(report.acknowledgment.is_none());
        assert_eq!(report.outcome(), DispatchOutcome::Failed);
    }

    #[tokio::test]
    async fn test_acknowledgment_failure_is_partial() {
        let relay = ScriptedRelay::new(vec![Ok("OK".to_string()), Err(rejected())]);
        let report = dispatch(&relay, &prepared()).await;
        assert_eq!(relay.calls(), vec!["owner", "ack"]);
        assert_eq!(report.outcome(), DispatchOutcome::Partial);
        assert!(matches!(report.error(), Some(RelayError::Rejected { status: 400, .. })));
    }

    #[test]
    fn test_not_configured_report_fails() {
        let report = DispatchReport::not_configured(RelayError::NotConfigured("public_key"));
        assert_eq!(report.outcome(), DispatchOutcome::Failed);
    }
}
