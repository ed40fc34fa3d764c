use super::*;
use serde_json::json;

/// Stands in for the webhook: records each payload it is handed.
struct RecordingWebhook {
    calls: Vec<serde_json::Value>,
    answer: Result<(), SubmitError>,
}

impl RecordingWebhook {
    fn answering(answer: Result<(), SubmitError>) -> Self {
        Self { calls: Vec::new(), answer }
    }

    fn submit(&mut self, session: &mut ConsultationSession) -> bool {
        match session.begin_submit() {
            Some(request) => {
                self.calls.push(serde_json::to_value(&request).unwrap());
                true
            }
            None => false,
        }
    }

    fn resolve(&self, session: &mut ConsultationSession) {
        session.finish(self.answer.clone());
    }
}

fn filled() -> ConsultationSession {
    let mut session = ConsultationSession::default();
    session.set_field(Field::FullName, "Jean Dupont".to_string());
    session.set_field(Field::Email, "jean@entreprise.com".to_string());
    session.set_field(Field::Company, "Entreprise Inc.".to_string());
    session.set_field(Field::Problems, "Trop d'appels manqués".to_string());
    session.set_field(Field::AdditionalInfo, "Ouvert le samedi".to_string());
    session
}

// =============================================================
// Payload
// =============================================================

#[test]
fn payload_uses_webhook_field_names() {
    let value = serde_json::to_value(filled().draft()).unwrap();
    assert_eq!(
        value,
        json!({
            "nomComplet": "Jean Dupont",
            "adresseCourriel": "jean@entreprise.com",
            "nomEntreprise": "Entreprise Inc.",
            "problemes": "Trop d'appels manqués",
            "informationsSupplementaires": "Ouvert le samedi",
        })
    );
}

#[test]
fn empty_optional_field_is_still_sent() {
    let mut session = filled();
    session.set_field(Field::AdditionalInfo, String::new());
    let value = serde_json::to_value(session.draft()).unwrap();
    assert_eq!(value["informationsSupplementaires"], "");
    assert_eq!(value.as_object().unwrap().len(), 5);
}

#[test]
fn field_accessors_round_through_every_field() {
    let session = filled();
    assert_eq!(session.draft().get(Field::Company), "Entreprise Inc.");
    assert_eq!(session.draft().get(Field::Email), "jean@entreprise.com");
}

#[test]
fn only_additional_info_is_optional() {
    let optional: Vec<Field> = Field::ALL.into_iter().filter(|f| !f.required()).collect();
    assert_eq!(optional, vec![Field::AdditionalInfo]);
}

#[test]
fn email_field_uses_email_input() {
    assert_eq!(Field::Email.kind(), FieldKind::Email);
    assert_eq!(Field::Problems.kind(), FieldKind::LongText);
}

// =============================================================
// In-flight guard
// =============================================================

#[test]
fn single_submit_issues_one_call_with_current_values() {
    let mut session = filled();
    let mut webhook = RecordingWebhook::answering(Ok(()));
    assert!(webhook.submit(&mut session));
    assert_eq!(webhook.calls.len(), 1);
    assert_eq!(webhook.calls[0]["nomComplet"], "Jean Dupont");
    assert!(session.is_in_flight());
}

#[test]
fn double_submit_before_resolution_issues_one_call() {
    let mut session = filled();
    let mut webhook = RecordingWebhook::answering(Ok(()));
    assert!(webhook.submit(&mut session));
    assert!(!webhook.submit(&mut session));
    assert_eq!(webhook.calls.len(), 1);
}

#[test]
fn finish_without_pending_request_is_ignored() {
    let mut session = filled();
    session.finish(Ok(()));
    assert_eq!(session.status(), &SubmitStatus::Editing);
}

// =============================================================
// End-to-end flows
// =============================================================

#[test]
fn success_flow_shows_panel_then_close_clears_it() {
    let mut session = filled();
    let mut webhook = RecordingWebhook::answering(Ok(()));
    webhook.submit(&mut session);
    webhook.resolve(&mut session);

    assert!(session.is_sent());
    assert!(!session.is_in_flight());
    assert!(!webhook.submit(&mut session));
    assert_eq!(webhook.calls.len(), 1);

    session.reset();
    assert!(!session.is_sent());
    assert_eq!(session.draft(), &ConsultationRequest::default());
}

#[test]
fn failure_flow_keeps_form_and_allows_retry() {
    let mut session = filled();
    let mut webhook = RecordingWebhook::answering(Err(SubmitError::Status(500)));
    webhook.submit(&mut session);
    webhook.resolve(&mut session);

    assert!(!session.is_sent());
    assert!(!session.is_in_flight());
    assert_eq!(session.error(), Some(&SubmitError::Status(500)));
    assert_eq!(session.draft().get(Field::FullName), "Jean Dupont");

    assert!(webhook.submit(&mut session));
    assert_eq!(session.error(), None);
    assert_eq!(webhook.calls.len(), 2);
}

#[test]
fn network_failure_is_reported_like_a_bad_status() {
    let mut session = filled();
    let mut webhook =
        RecordingWebhook::answering(Err(SubmitError::Network("connexion refusée".to_string())));
    webhook.submit(&mut session);
    webhook.resolve(&mut session);
    assert!(matches!(session.status(), SubmitStatus::Failed(SubmitError::Network(_))));
}

#[test]
fn submit_error_messages_name_the_cause() {
    assert_eq!(
        SubmitError::Status(502).to_string(),
        "webhook answered with status 502"
    );
}
