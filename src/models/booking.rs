use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Total;
use crate::services::catalog;

pub const TIME_SLOTS: [&str; 10] = [
    "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00",
];

pub const MIN_GUESTS: u32 = 1;
pub const MAX_GUESTS: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(rename = "name")]
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub notes: String,
    #[serde(rename = "selectedService")]
    pub service_id: String,
    #[serde(rename = "selectedDate")]
    pub date: NaiveDate,
    #[serde(rename = "selectedTime")]
    pub time: String,
    #[serde(rename = "guests")]
    pub guest_count: u32,
}

impl BookingRequest {
    pub fn total(&self) -> Total {
        catalog::find_service(&self.service_id)
            .map(|s| s.total_for(self.guest_count))
            .unwrap_or(Total::NoServiceSelected)
    }
}

// `date` and `time` hold raw form input; only validation parses them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
    pub service_id: Option<String>,
    pub date: String,
    pub time: String,
    pub guest_count: u32,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            contact_name: String::new(),
            email: String::new(),
            phone: String::new(),
            notes: String::new(),
            service_id: None,
            date: String::new(),
            time: String::new(),
            guest_count: MIN_GUESTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service: {0}")]
pub struct UnknownService(pub String);

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(&self, id: &str) -> Result<Self, UnknownService> {
        let service =
            catalog::find_service(id).ok_or_else(|| UnknownService(id.to_string()))?;
        Ok(Self {
            service_id: Some(service.id.to_string()),
            ..self.clone()
        })
    }

    pub fn clear_service(&self) -> Self {
        Self {
            service_id: None,
            ..self.clone()
        }
    }

    pub fn with_date(&self, date: NaiveDate) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            ..self.clone()
        }
    }

    pub fn with_time(&self, time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            ..self.clone()
        }
    }

    pub fn with_guests(&self, guest_count: u32) -> Self {
        Self {
            guest_count,
            ..self.clone()
        }
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            contact_name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_email(&self, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..self.clone()
        }
    }

    pub fn with_phone(&self, phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            ..self.clone()
        }
    }

    pub fn with_notes(&self, notes: impl Into<String>) -> Self {
        Self {
            notes: notes.into(),
            ..self.clone()
        }
    }

    pub fn derived_total(&self) -> Total {
        self.service_id
            .as_deref()
            .and_then(catalog::find_service)
            .map(|s| s.total_for(self.guest_count))
            .unwrap_or(Total::NoServiceSelected)
    }
}
