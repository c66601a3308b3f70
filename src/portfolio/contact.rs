use std::future::Future;

use dioxus::logger::tracing::{info, warn};

use crate::error::ContactError;

pub const SENDING_MESSAGE: &str = "Sending...";
pub const SENT_MESSAGE: &str = "Thanks, your message has been received.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SubmissionStatus {
    /// Text for the status line under the form.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Sending => Some(SENDING_MESSAGE.to_string()),
            Self::Sent => Some(SENT_MESSAGE.to_string()),
            Self::Failed(reason) => Some(reason.clone()),
        }
    }
}

/// Two-phase contact form: an immediate "sending" status, then the outcome
/// of the delivery.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.fields.name = value,
            ContactField::Email => self.fields.email = value,
            ContactField::Message => self.fields.message = value,
        }
    }

    /// Start a submission. Returns the snapshot to deliver, or `None` while a
    /// previous submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<ContactFields> {
        if self.status == SubmissionStatus::Sending {
            return None;
        }
        self.status = SubmissionStatus::Sending;
        Some(self.fields.clone())
    }

    /// Record the delivery outcome. Fields are cleared only on success.
    pub fn finish_submit(&mut self, result: Result<(), ContactError>) {
        match result {
            Ok(()) => {
                info!("contact message delivered");
                self.fields = ContactFields::default();
                self.status = SubmissionStatus::Sent;
            }
            Err(err) => {
                warn!("contact form submission failed: {err}");
                self.status = SubmissionStatus::Failed(err.to_string());
            }
        }
    }
}

/// Delivers a contact message somewhere.
pub trait ContactTransport {
    fn deliver(&self, fields: ContactFields) -> impl Future<Output = Result<(), ContactError>>;
}

/// Accepts every message after a fixed delay. No network call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedTransport {
    pub delay_ms: u32,
}

impl ContactTransport for SimulatedTransport {
    fn deliver(&self, _fields: ContactFields) -> impl Future<Output = Result<(), ContactError>> {
        let delay_ms = self.delay_ms;
        async move {
            delay(delay_ms).await;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn delay(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn delay(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}
