use crate::domain::model::{
    Acknowledgement, ContactSubmission, NotificationMessage, SanitizedContact,
};
use crate::domain::ports::NotificationSink;
use crate::utils::error::{AppError, Result, ValidationKind};
use crate::utils::validation::is_valid_email;
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

pub const MAX_FIELD_CHARS: usize = 5000;
pub const RELAY_FAILURE_MESSAGE: &str = "Failed to process your message. Please try again later.";

/// Validates a contact submission and forwards it once to the sink.
pub struct ContactRelay {
    sink: Arc<dyn NotificationSink>,
    recipient: String,
    sender: String,
}

impl ContactRelay {
    pub fn new(sink: Arc<dyn NotificationSink>, recipient: String, sender: String) -> Self {
        Self {
            sink,
            recipient,
            sender,
        }
    }

    pub async fn submit(&self, submission: ContactSubmission) -> Result<Acknowledgement> {
        let contact = sanitize(&submission)?;
        let message = NotificationMessage::from_contact(&contact, &self.recipient, &self.sender);

        // 只送一次，失敗不重試
        if let Err(e) = self.sink.send(&message).await {
            tracing::error!(
                "❌ Contact relay via '{}' failed: {} (Category: {:?})",
                self.sink.name(),
                e,
                e.category()
            );
            return Err(AppError::RelayError {
                message: RELAY_FAILURE_MESSAGE.to_string(),
            });
        }

        tracing::info!(
            sender_name = %contact.name,
            email = %contact.email,
            subject = %contact.subject,
            message_length = contact.message.chars().count(),
            timestamp = %contact.timestamp,
            "📧 Contact form submission relayed"
        );

        Ok(Acknowledgement {
            name: contact.name,
            email: contact.email,
            timestamp: contact.timestamp,
        })
    }
}

/// Checks required fields and the raw email shape, then trims and caps every field.
pub fn sanitize(submission: &ContactSubmission) -> Result<SanitizedContact> {
    let fields = [
        &submission.name,
        &submission.email,
        &submission.subject,
        &submission.message,
    ];
    let [name, email, subject, message] = fields.map(|f| f.as_deref().map(str::trim).unwrap_or(""));

    if [name, email, subject, message].iter().any(|f| f.is_empty()) {
        return Err(AppError::validation(ValidationKind::MissingField));
    }

    // 信箱格式檢查在修剪之前，前後空白視為格式錯誤
    if !submission.email.as_deref().is_some_and(is_valid_email) {
        return Err(AppError::validation(ValidationKind::InvalidEmail));
    }

    Ok(SanitizedContact {
        name: cap(name),
        email: cap(email),
        subject: cap(subject),
        message: cap(message),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

fn cap(value: &str) -> String {
    value.chars().take(MAX_FIELD_CHARS).collect()
}
