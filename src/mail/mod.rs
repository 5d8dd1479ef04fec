use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail delivery failed: {0}")]
    Delivery(String),
}

/// Outbound mail side channel used by password retrieval.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: Message) -> Result<(), MailError>;
}

/// Hands messages to the log instead of an SMTP relay.
#[derive(Debug, Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: Message) -> Result<(), MailError> {
        // Body holds the password, only the envelope is logged
        tracing::info!(
            from = %message.from,
            to = %message.to,
            subject = %message.subject,
            "mail delivered"
        );
        Ok(())
    }
}

pub fn password_reminder(sender: &str, email: &str, password: &str) -> Message {
    Message {
        from: sender.to_string(),
        to: email.to_string(),
        subject: "your planetary API password".to_string(),
        body: format!("Your planetary API password is {}", password),
    }
}
