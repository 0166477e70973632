//! # folio-mail
//!
//! Outbound email behind a `Mailer` trait: an SMTP implementation for
//! production and a recording double for tests. Only the lead-capture flow
//! sends mail; a send failure surfaces to the caller and is never retried.

use async_trait::async_trait;
use folio_commons::config::MailSettings;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::info;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("Failed to send email: {0}")]
    Transport(String),
}

/// An outbound email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub reply_to: Option<String>,
}

/// Abstraction over email delivery.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<(), MailError>;
}

/// SMTP mailer on lettre's tokio transport.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    reply_to: Option<Mailbox>,
}

impl SmtpMailer {
    pub fn from_settings(settings: &MailSettings) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.smtp_host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(settings.smtp_port)
            .credentials(Credentials::new(
                settings.smtp_username.clone(),
                settings.smtp_password.clone(),
            ))
            .build();

        let from: Mailbox = settings
            .from_address
            .parse()
            .map_err(|_| MailError::InvalidAddress(settings.from_address.clone()))?;
        let reply_to = match settings.reply_to.as_deref() {
            Some(address) => Some(
                address
                    .parse()
                    .map_err(|_| MailError::InvalidAddress(address.to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            transport,
            from,
            reply_to,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), MailError> {
        let to: Mailbox = message
            .to
            .parse()
            .map_err(|_| MailError::InvalidAddress(message.to.clone()))?;

        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&message.subject)
            .header(ContentType::TEXT_PLAIN);

        let reply_to = message
            .reply_to
            .as_deref()
            .map(|address| {
                address
                    .parse::<Mailbox>()
                    .map_err(|_| MailError::InvalidAddress(address.to_string()))
            })
            .transpose()?
            .or_else(|| self.reply_to.clone());
        if let Some(reply_to) = reply_to {
            builder = builder.reply_to(reply_to);
        }

        let email = builder
            .body(message.text.clone())
            .map_err(|e| MailError::Build(e.to_string()))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;
        info!("Sent email to {}", message.to);
        Ok(())
    }
}

/// Test double recording every message instead of sending it.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<EmailMessage>>,
    pub fail_next: Mutex<bool>,
}

impl RecordingMailer {
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), MailError> {
        if *self.fail_next.lock().unwrap() {
            return Err(MailError::Transport("simulated send failure".to_string()));
        }
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recording_mailer_captures_messages() {
        let mailer = RecordingMailer::default();
        mailer
            .send(EmailMessage {
                to: "ada@example.com".to_string(),
                subject: "Hello".to_string(),
                text: "World".to_string(),
                reply_to: None,
            })
            .await
            .unwrap();
        assert_eq!(mailer.sent_count(), 1);
        assert_eq!(mailer.sent()[0].subject, "Hello");
    }
}
