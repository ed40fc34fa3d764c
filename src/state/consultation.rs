#[cfg(test)]
#[path = "consultation_test.rs"]
mod consultation_test;

use serde::Serialize;
use thiserror::Error;

/// Body posted to the consultation webhook. Field names are fixed by the
/// receiving workflow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRequest {
    pub nom_complet: String,
    pub adresse_courriel: String,
    pub nom_entreprise: String,
    pub problemes: String,
    pub informations_supplementaires: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("could not encode consultation request: {0}")]
    Encode(String),
    #[error("webhook request failed: {0}")]
    Network(String),
    #[error("webhook answered with status {0}")]
    Status(u16),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    LongText,
}

/// The five form fields, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    Company,
    Problems,
    AdditionalInfo,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FullName,
        Field::Email,
        Field::Company,
        Field::Problems,
        Field::AdditionalInfo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Nom complet",
            Field::Email => "Adresse courriel",
            Field::Company => "Nom de l'entreprise",
            Field::Problems => "Quels problèmes spécifiques cherchez-vous à résoudre ?",
            Field::AdditionalInfo => "Informations supplémentaires",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::FullName => "Jean Dupont",
            Field::Email => "jean@entreprise.com",
            Field::Company => "Entreprise Inc.",
            Field::Problems => "Décrivez vos défis actuels et les résultats souhaités",
            Field::AdditionalInfo => {
                "Optionnel : partagez d'autres détails pertinents sur votre projet ou vos besoins"
            }
        }
    }

    pub fn required(self) -> bool {
        !matches!(self, Field::AdditionalInfo)
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::FullName | Field::Company => FieldKind::Text,
            Field::Email => FieldKind::Email,
            Field::Problems | Field::AdditionalInfo => FieldKind::LongText,
        }
    }
}

impl ConsultationRequest {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.nom_complet,
            Field::Email => &self.adresse_courriel,
            Field::Company => &self.nom_entreprise,
            Field::Problems => &self.problemes,
            Field::AdditionalInfo => &self.informations_supplementaires,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FullName => &mut self.nom_complet,
            Field::Email => &mut self.adresse_courriel,
            Field::Company => &mut self.nom_entreprise,
            Field::Problems => &mut self.problemes,
            Field::AdditionalInfo => &mut self.informations_supplementaires,
        };
        *slot = value;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Editing,
    Sending,
    Sent,
    Failed(SubmitError),
}

/// Draft and submission state of one open consultation modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsultationSession {
    draft: ConsultationRequest,
    status: SubmitStatus,
}

impl ConsultationSession {
    pub fn draft(&self) -> &ConsultationRequest {
        &self.draft
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
    }

    pub fn is_in_flight(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    pub fn is_sent(&self) -> bool {
        self.status == SubmitStatus::Sent
    }

    pub fn error(&self) -> Option<&SubmitError> {
        match &self.status {
            SubmitStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Marks the session in flight and hands back the payload to send.
    /// Returns `None` while a request is pending or after success.
    pub fn begin_submit(&mut self) -> Option<ConsultationRequest> {
        match self.status {
            SubmitStatus::Sending | SubmitStatus::Sent => None,
            SubmitStatus::Editing | SubmitStatus::Failed(_) => {
                self.status = SubmitStatus::Sending;
                Some(self.draft.clone())
            }
        }
    }

    pub fn finish(&mut self, result: Result<(), SubmitError>) {
        if !self.is_in_flight() {
            return;
        }
        self.status = match result {
            Ok(()) => SubmitStatus::Sent,
            Err(err) => SubmitStatus::Failed(err),
        };
    }

    /// Clears the success flag and the draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
