use gloo_net::http::Request;

use crate::config;
use crate::state::consultation::{ConsultationRequest, SubmitError};

/// Posts a consultation request to the webhook as JSON.
pub async fn send_consultation(request: &ConsultationRequest) -> Result<(), SubmitError> {
    let response = Request::post(config::get_webhook_url())
        .json(request)
        .map_err(|e| SubmitError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Status(response.status()))
    }
}
