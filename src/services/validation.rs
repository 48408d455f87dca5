use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::models::{BookingDraft, BookingRequest, MAX_GUESTS, MIN_GUESTS, TIME_SLOTS};
use crate::services::catalog;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ContactName,
    Email,
    Phone,
    ServiceId,
    Date,
    Time,
    GuestCount,
}

impl Field {
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::ContactName => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::ServiceId => "selectedService",
            Field::Date => "selectedDate",
            Field::Time => "selectedTime",
            Field::GuestCount => "guests",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorReason {
    Required,
    InvalidFormat,
    OutOfRange,
    UnknownReference,
}

impl ErrorReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorReason::Required => "is required",
            ErrorReason::InvalidFormat => "has an invalid format",
            ErrorReason::OutOfRange => "is out of range",
            ErrorReason::UnknownReference => "does not match a known service",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub reason: ErrorReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn reason_for(&self, field: Field) -> Option<ErrorReason> {
        self.0.iter().find(|e| e.field == field).map(|e| e.reason)
    }

    pub fn wire_fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|e| e.field.wire_name()).collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{} {}", e.field.wire_name(), e.reason.as_str()))
            .collect();
        write!(f, "invalid booking: {}", parts.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

pub fn validate(draft: &BookingDraft) -> Result<BookingRequest, ValidationErrors> {
    validate_on(draft, Local::now().date_naive())
}

pub fn validate_on(
    draft: &BookingDraft,
    today: NaiveDate,
) -> Result<BookingRequest, ValidationErrors> {
    let mut errors = Vec::new();
    let mut fail = |field, reason| errors.push(FieldError { field, reason });

    let contact_name = draft.contact_name.trim();
    if contact_name.is_empty() {
        fail(Field::ContactName, ErrorReason::Required);
    }

    let email = draft.email.trim();
    if email.is_empty() {
        fail(Field::Email, ErrorReason::Required);
    } else if !is_valid_email(email) {
        fail(Field::Email, ErrorReason::InvalidFormat);
    }

    let phone = draft.phone.trim();
    if phone.is_empty() {
        fail(Field::Phone, ErrorReason::Required);
    }

    let service_id = draft.service_id.as_deref().map(str::trim).unwrap_or("");
    if service_id.is_empty() {
        fail(Field::ServiceId, ErrorReason::Required);
    } else if catalog::find_service(service_id).is_none() {
        fail(Field::ServiceId, ErrorReason::UnknownReference);
    }

    let raw_date = draft.date.trim();
    let date = if raw_date.is_empty() {
        fail(Field::Date, ErrorReason::Required);
        None
    } else {
        match NaiveDate::parse_from_str(raw_date, "%Y-%m-%d") {
            Ok(d) if d < today => {
                fail(Field::Date, ErrorReason::OutOfRange);
                None
            }
            Ok(d) => Some(d),
            Err(_) => {
                fail(Field::Date, ErrorReason::InvalidFormat);
                None
            }
        }
    };

    let time = draft.time.trim();
    if time.is_empty() {
        fail(Field::Time, ErrorReason::Required);
    } else if !TIME_SLOTS.contains(&time) {
        fail(Field::Time, ErrorReason::InvalidFormat);
    }

    if !(MIN_GUESTS..=MAX_GUESTS).contains(&draft.guest_count) {
        fail(Field::GuestCount, ErrorReason::OutOfRange);
    }

    match date {
        Some(date) if errors.is_empty() => Ok(BookingRequest {
            contact_name: contact_name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            notes: draft.notes.trim().to_string(),
            service_id: service_id.to_string(),
            date,
            time: time.to_string(),
            guest_count: draft.guest_count,
        }),
        _ => Err(ValidationErrors(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()
    }

    fn valid_draft() -> BookingDraft {
        BookingDraft::new()
            .with_name("Maria Silva")
            .with_email("maria@example.com")
            .with_phone("71999999999")
            .with_service("jet-ski")
            .unwrap()
            .with_date(today())
            .with_time("09:00")
            .with_guests(2)
    }

    #[test]
    fn test_valid_draft_passes() {
        let request = validate_on(&valid_draft(), today()).unwrap();
        assert_eq!(request.contact_name, "Maria Silva");
        assert_eq!(request.service_id, "jet-ski");
        assert_eq!(request.date, today());
        assert_eq!(request.guest_count, 2);
    }

    #[test]
    fn test_empty_name_only_error() {
        let draft = valid_draft().with_name("");
        let errors = validate_on(&draft, today()).unwrap_err();
        assert_eq!(
            errors.errors(),
            &[FieldError {
                field: Field::ContactName,
                reason: ErrorReason::Required,
            }]
        );
    }

    #[test]
    fn test_whitespace_name_is_empty() {
        let draft = valid_draft().with_name("   ");
        let errors = validate_on(&draft, today()).unwrap_err();
        assert_eq!(errors.reason_for(Field::ContactName), Some(ErrorReason::Required));
    }

    #[test]
    fn test_email_format() {
        let bad = valid_draft().with_email("not-an-email");
        let errors = validate_on(&bad, today()).unwrap_err();
        assert_eq!(errors.reason_for(Field::Email), Some(ErrorReason::InvalidFormat));

        let good = valid_draft().with_email("user@example.com");
        assert!(validate_on(&good, today()).is_ok());

        let upper = valid_draft().with_email("USER@EXAMPLE.COM");
        assert!(validate_on(&upper, today()).is_ok());

        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_missing_email_is_required() {
        let draft = valid_draft().with_email("");
        let errors = validate_on(&draft, today()).unwrap_err();
        assert_eq!(errors.reason_for(Field::Email), Some(ErrorReason::Required));
    }

    #[test]
    fn test_date_range() {
        let yesterday = today().pred_opt().unwrap();
        let past = valid_draft().with_date(yesterday);
        let errors = validate_on(&past, today()).unwrap_err();
        assert_eq!(errors.reason_for(Field::Date), Some(ErrorReason::OutOfRange));

        assert!(validate_on(&valid_draft().with_date(today()), today()).is_ok());
    }

    #[test]
    fn test_date_unparseable() {
        let mut draft = valid_draft();
        draft.date = "16/06/2025".to_string();
        let errors = validate_on(&draft, today()).unwrap_err();
        assert_eq!(errors.reason_for(Field::Date), Some(ErrorReason::InvalidFormat));
    }

    #[test]
    fn test_guest_bounds() {
        for guests in [0, 21] {
            let errors = validate_on(&valid_draft().with_guests(guests), today()).unwrap_err();
            assert_eq!(
                errors.reason_for(Field::GuestCount),
                Some(ErrorReason::OutOfRange)
            );
        }
        for guests in [1, 20] {
            assert!(validate_on(&valid_draft().with_guests(guests), today()).is_ok());
        }
    }

    #[test]
    fn test_time_slot() {
        let errors = validate_on(&valid_draft().with_time("18:00"), today()).unwrap_err();
        assert_eq!(errors.reason_for(Field::Time), Some(ErrorReason::InvalidFormat));
        let errors = validate_on(&valid_draft().with_time("9:00"), today()).unwrap_err();
        assert_eq!(errors.reason_for(Field::Time), Some(ErrorReason::InvalidFormat));
        assert!(validate_on(&valid_draft().with_time("17:00"), today()).is_ok());
    }

    #[test]
    fn test_unknown_service_reference() {
        let mut draft = valid_draft();
        draft.service_id = Some("submarine".to_string());
        let errors = validate_on(&draft, today()).unwrap_err();
        assert_eq!(
            errors.reason_for(Field::ServiceId),
            Some(ErrorReason::UnknownReference)
        );
    }

    #[test]
    fn test_collects_all_errors() {
        let errors = validate_on(&BookingDraft::new().with_guests(0), today()).unwrap_err();
        let fields: Vec<Field> = errors.errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            [
                Field::ContactName,
                Field::Email,
                Field::Phone,
                Field::ServiceId,
                Field::Date,
                Field::Time,
                Field::GuestCount,
            ]
        );
        assert_eq!(
            errors.wire_fields(),
            ["name", "email", "phone", "selectedService", "selectedDate", "selectedTime", "guests"]
        );
    }

    #[test]
    fn test_trims_strings() {
        let draft = valid_draft()
            .with_name("  Maria Silva ")
            .with_email(" maria@example.com ")
            .with_notes("  window seat  ");
        let request = validate_on(&draft, today()).unwrap();
        assert_eq!(request.contact_name, "Maria Silva");
        assert_eq!(request.email, "maria@example.com");
        assert_eq!(request.notes, "window seat");
    }

    #[test]
    fn test_display() {
        let errors = validate_on(&valid_draft().with_phone(""), today()).unwrap_err();
        assert_eq!(errors.to_string(), "invalid booking: phone is required");
    }
}
