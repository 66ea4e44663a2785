//! Contact submission against a mock EmailJS server

use pretty_assertions::assert_eq;
use serde_json::json;
use showcase_core::contact::{ContactController, DispatchOutcome, Field, NoticeKind};
use showcase_core::utils::config::RelayConfig;
use showcase_core::{dispatch, EmailJsRelay, RelayError, SubmissionStatus};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEND_PATH: &str = "/api/v1.0/email/send";

fn relay_config(server: &MockServer) -> RelayConfig {
    RelayConfig {
        api_url: server.uri(),
        service_id: "service_portfolio".to_string(),
        owner_template_id: "template_owner".to_string(),
        acknowledgment_template_id: "template_ack".to_string(),
        public_key: "pk_test".to_string(),
        public_key_override: None,
    }
}

fn filled_controller(config: &RelayConfig) -> ContactController {
    let mut controller = ContactController::from_config(config);
    controller.set_field(Field::Name, " Ada Lovelace ");
    controller.set_field(Field::Email, "ada@example.com");
    controller.set_field(Field::Subject, "Project Inquiry");
    controller.set_field(Field::Message, "I would like to talk about an engine.");
    controller
}

fn template(id: &str) -> serde_json::Value {
    json!({ "template_id": id })
}

#[tokio::test]
async fn test_successful_submission_sends_both_templates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "service_id": "service_portfolio",
            "template_id": "template_owner",
            "user_id": "pk_test",
            "template_params": {
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "subject": "Project Inquiry",
                "title": "I would like to talk about an engine.",
                "time": "18 Oct 2026, 14:03:09"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_partial_json(template("template_ack")))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    let config = relay_config(&server);
    let relay = EmailJsRelay::new(&config).unwrap();
    let mut controller = filled_controller(&config);

    let prepared = controller
        .begin_submit("18 Oct 2026, 14:03:09".to_string())
        .expect("form is valid");
    assert_eq!(controller.status(), SubmissionStatus::Submitting);

    let report = dispatch(&relay, &prepared).await;
    assert_eq!(report.outcome(), DispatchOutcome::Delivered);
    assert_eq!(report.owner.as_deref().ok(), Some("OK"));

    controller.finish_submit(&report);
    assert_eq!(controller.status(), SubmissionStatus::Success);
    assert_eq!(controller.form().name, "");
    assert_eq!(controller.form().message, "");
    assert!(controller.errors().is_empty());
}

#[tokio::test]
async fn test_owner_rejection_keeps_fields_and_skips_acknowledgment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_partial_json(template("template_owner")))
        .respond_with(ResponseTemplate::new(400).set_body_string("The public key is invalid"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_partial_json(template("template_ack")))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = relay_config(&server);
    let relay = EmailJsRelay::new(&config).unwrap();
    let mut controller = filled_controller(&config);

    let prepared = controller.begin_submit("now".to_string()).unwrap();
    let report = dispatch(&relay, &prepared).await;

    assert_eq!(report.outcome(), DispatchOutcome::Failed);
    match &report.owner {
        Err(RelayError::Rejected { status, body }) => {
            assert_eq!(*status, 400);
            assert_eq!(body, "The public key is invalid");
        }
        other => panic!("expected rejection, got {:?}", other),
    }

    controller.finish_submit(&report);
    assert_eq!(controller.status(), SubmissionStatus::Error);
    assert_eq!(controller.form().name, " Ada Lovelace ");
    assert_eq!(controller.notice().unwrap().kind, NoticeKind::Error);
}

#[tokio::test]
async fn test_acknowledgment_failure_is_reported_as_partial() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_partial_json(template("template_owner")))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_partial_json(template("template_ack")))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .mount(&server)
        .await;

    let config = relay_config(&server);
    let relay = EmailJsRelay::new(&config).unwrap();
    let mut controller = filled_controller(&config);

    let prepared = controller.begin_submit("now".to_string()).unwrap();
    let report = dispatch(&relay, &prepared).await;
    assert_eq!(report.outcome(), DispatchOutcome::Partial);

    controller.finish_submit(&report);
    assert_eq!(controller.status(), SubmissionStatus::Success);
    assert!(controller.form().is_blank());
    assert_eq!(controller.notice().unwrap().kind, NoticeKind::Warning);
}

#[tokio::test]
async fn test_unreachable_relay_is_a_transport_error() {
    let server = MockServer::start().await;
    let mut config = relay_config(&server);
    drop(server);
    config.api_url = "http://127.0.0.1:9".to_string();

    let relay = EmailJsRelay::new(&config).unwrap();
    let mut controller = filled_controller(&config);
    let prepared = controller.begin_submit("now".to_string()).unwrap();
    let report = dispatch(&relay, &prepared).await;

    assert!(matches!(report.owner, Err(RelayError::Transport(_))));
    assert!(report.acknowledgment.is_none());
}

#[test]
fn test_unconfigured_relay_is_refused() {
    let config = RelayConfig {
        public_key: String::new(),
        service_id: "svc".to_string(),
        owner_template_id: "owner".to_string(),
        acknowledgment_template_id: "ack".to_string(),
        api_url: "https://api.emailjs.com".to_string(),
        public_key_override: None,
    };
    let err = EmailJsRelay::new(&config).err().unwrap();
    assert!(matches!(err, RelayError::NotConfigured("public_key")));
}
