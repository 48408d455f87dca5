use std::time::{Duration, Instant};

use crate::config::ClientConfig;
use crate::models::{BookingDraft, BookingRequest};
use crate::services::submission::{Acknowledgment, BookingSubmitter, SubmissionError};
use crate::services::validation::{self, FieldError, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded { until: Instant },
    Failed(SubmissionError),
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded { .. } => "succeeded",
            SubmissionState::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("a booking submission is already in progress")]
    InFlight,

    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

#[derive(Debug)]
pub struct BookingForm {
    draft: BookingDraft,
    state: SubmissionState,
    field_errors: Vec<FieldError>,
    success_display: Duration,
}

impl BookingForm {
    pub fn new(success_display: Duration) -> Self {
        Self {
            draft: BookingDraft::default(),
            state: SubmissionState::Idle,
            field_errors: Vec::new(),
            success_display,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.success_display)
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: BookingDraft) {
        self.draft = draft;
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    pub fn can_submit(&self) -> bool {
        self.state != SubmissionState::Submitting
    }

    pub fn begin_submit(&mut self) -> Result<BookingRequest, FormError> {
        if !self.can_submit() {
            return Err(FormError::InFlight);
        }

        match validation::validate(&self.draft) {
            Ok(request) => {
                self.field_errors.clear();
                self.state = SubmissionState::Submitting;
                Ok(request)
            }
            Err(errors) => {
                self.field_errors = errors.errors().to_vec();
                self.state = SubmissionState::Idle;
                Err(FormError::Invalid(errors))
            }
        }
    }

    pub fn finish_submit(
        &mut self,
        result: Result<Acknowledgment, SubmissionError>,
        now: Instant,
    ) -> Result<Acknowledgment, FormError> {
        match result {
            Ok(ack) => {
                self.draft = BookingDraft::default();
                self.state = SubmissionState::Succeeded {
                    until: now + self.success_display,
                };
                Ok(ack)
            }
            Err(e) => {
                tracing::warn!(error = %e, "booking submission failed");
                self.state = SubmissionState::Failed(e.clone());
                Err(FormError::Submission(e))
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if let SubmissionState::Succeeded { until } = self.state {
            if now >= until {
                self.state = SubmissionState::Idle;
            }
        }
    }

    pub async fn submit(
        &mut self,
        submitter: &dyn BookingSubmitter,
    ) -> Result<Acknowledgment, FormError> {
        let request = self.begin_submit()?;
        let result = submitter.submit(&request).await;
        self.finish_submit(result, Instant::now())
    }
}
