use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{ApiResponse, ContactMessage};
use crate::services::validation::is_valid_email;
use crate::state::AppState;

use super::booking::is_blank;

pub const CONTACT_ACCEPTED: &str = "Message sent successfully! We will get back to you soon.";

#[derive(Debug, Default, Deserialize)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactPayload {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(field, _)| field)
        .collect()
    }

    fn into_message(self) -> ContactMessage {
        let trimmed = |v: Option<String>| v.map(|s| s.trim().to_string()).unwrap_or_default();
        ContactMessage {
            phone: self
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            name: trimmed(self.name),
            email: trimmed(self.email),
            subject: trimmed(self.subject),
            message: trimmed(self.message),
        }
    }
}

// POST /api/contact
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Result<Json<ApiResponse>, AppError> {
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    let payload: ContactPayload =
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let missing = payload.missing_fields();
    if !missing.is_empty() {
        tracing::warn!(fields = ?missing, "contact message missing required fields");
        return Err(AppError::MissingFields(missing));
    }

    let contact = payload.into_message();
    if !is_valid_email(&contact.email) {
        tracing::warn!(email = %contact.email, "contact message rejected");
        return Ok(Json(
            ApiResponse::failure("email has an invalid format").with_fields(["email"]),
        ));
    }

    let reference = Uuid::new_v4();
    state.sink.contact_received(reference, &contact).await?;

    Ok(Json(ApiResponse::success(CONTACT_ACCEPTED)))
}
