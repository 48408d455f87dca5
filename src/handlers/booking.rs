use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{ApiResponse, BookingDraft, MIN_GUESTS};
use crate::services::validation;
use crate::state::AppState;

pub const BOOKING_ACCEPTED: &str =
    "Booking sent successfully! We will contact you soon to confirm.";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub selected_service: Option<String>,
    pub selected_date: Option<String>,
    pub selected_time: Option<String>,
    pub guests: Option<i64>,
}

impl BookingPayload {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("selectedService", &self.selected_service),
            ("selectedDate", &self.selected_date),
            ("selectedTime", &self.selected_time),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(field, _)| field)
        .collect()
    }

    pub fn into_draft(self) -> BookingDraft {
        BookingDraft {
            contact_name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            notes: self.notes.unwrap_or_default(),
            service_id: self.selected_service,
            date: self.selected_date.unwrap_or_default(),
            time: self.selected_time.unwrap_or_default(),
            // Negative or oversized counts become 0 and fail the range check.
            guest_count: self
                .guests
                .map(|g| u32::try_from(g).unwrap_or(0))
                .unwrap_or(MIN_GUESTS),
        }
    }
}

pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or("").is_empty()
}

// POST /api/booking
pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Result<Json<ApiResponse>, AppError> {
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    let payload: BookingPayload =
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let missing = payload.missing_fields();
    if !missing.is_empty() {
        tracing::warn!(fields = ?missing, "booking missing required fields");
        return Err(AppError::MissingFields(missing));
    }

    let request = match validation::validate(&payload.into_draft()) {
        Ok(request) => request,
        Err(errors) => {
            tracing::warn!(error = %errors, "booking rejected");
            return Ok(Json(
                ApiResponse::failure(errors.to_string()).with_fields(errors.wire_fields()),
            ));
        }
    };

    let reference = Uuid::new_v4();
    state.sink.booking_received(reference, &request).await?;

    tracing::info!(
        reference = %reference,
        service = %request.service_id,
        date = %request.date,
        "booking accepted"
    );

    Ok(Json(ApiResponse::success(BOOKING_ACCEPTED)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_reports_all_blank() {
        let payload = BookingPayload {
            name: Some("Maria".to_string()),
            email: Some("   ".to_string()),
            selected_time: Some("09:00".to_string()),
            ..Default::default()
        };
        assert_eq!(
            payload.missing_fields(),
            ["email", "phone", "selectedService", "selectedDate"]
        );
    }

    #[test]
    fn test_payload_parses_wire_names() {
        let payload: BookingPayload = serde_json::from_str(
            r#"{"name":"Maria","selectedService":"jet-ski","selectedDate":"2099-01-01","guests":3}"#,
        )
        .unwrap();
        let draft = payload.into_draft();
        assert_eq!(draft.contact_name, "Maria");
        assert_eq!(draft.service_id.as_deref(), Some("jet-ski"));
        assert_eq!(draft.date, "2099-01-01");
        assert_eq!(draft.guest_count, 3);
    }

    #[test]
    fn test_guest_defaults_and_clamping() {
        assert_eq!(BookingPayload::default().into_draft().guest_count, 1);
        let negative = BookingPayload {
            guests: Some(-4),
            ..Default::default()
        };
        assert_eq!(negative.into_draft().guest_count, 0);
    }
}
