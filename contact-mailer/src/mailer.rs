//! Outbound mail: the delivery seam and its SMTP implementation.

use async_trait::async_trait;
use chrono::Utc;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::MailConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MailError {
    #[error("Invalid email address: {0}")]
    Address(String),

    #[error("Email composition error: {0}")]
    Compose(String),

    #[error("Email transport error: {0}")]
    Transport(String),
}

/// A contact form submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Delivery seam between the HTTP handlers and the mail transport.
///
/// Handlers only see this trait, so tests can swap the SMTP transport for
/// a stub and the production wiring happens once in `main`.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one submission to the configured recipient.
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError>;
}

/// Sends notification emails over authenticated SMTP.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    /// Builds the transport and resolves the fixed addresses.
    ///
    /// # Errors
    /// * [`MailError::Address`] — the configured account or recipient is
    ///   not a parseable mailbox.
    /// * [`MailError::Transport`] — the relay could not be set up for
    ///   the configured host.
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let from = config
            .email_user
            .parse::<Mailbox>()
            .map_err(|e| MailError::Address(e.to_string()))?;
        let to = config
            .recipient
            .parse::<Mailbox>()
            .map_err(|e| MailError::Address(e.to_string()))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .credentials(Credentials::new(
                config.email_user.clone(),
                config.email_password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from,
            to,
        })
    }

    /// Check the SMTP connection once and log the outcome.
    ///
    /// A failed probe is logged but never aborts startup; the first real
    /// send will surface the problem to the caller.
    pub async fn probe(&self) {
        match self.transport.test_connection().await {
            Ok(true) => info!("email server is ready to send messages"),
            Ok(false) => warn!("email server rejected the connection probe"),
            Err(e) => warn!("email configuration error: {e}"),
        }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        let reply_to = message
            .email
            .parse::<Mailbox>()
            .map_err(|e| MailError::Address(e.to_string()))?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .reply_to(reply_to)
            .subject(notification_subject(message))
            .header(ContentType::TEXT_HTML)
            .body(notification_body(message))
            .map_err(|e| MailError::Compose(e.to_string()))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        Ok(())
    }
}

fn notification_subject(message: &ContactMessage) -> String {
    format!("Portfolio Contact: {}", message.subject)
}

/// Renders the notification email body.
///
/// All visitor-supplied text is HTML-escaped before interpolation.
fn notification_body(message: &ContactMessage) -> String {
    let received = Utc::now().format("%d %b %Y %H:%M UTC");
    format!(
        r#"<div style="font-family: Arial, sans-serif; background-color: #f4f4f4; padding: 20px;">
    <div style="max-width: 600px; margin: 0 auto; background-color: #ffffff; border-radius: 8px; padding: 30px;">
        <h2 style="color: #333333; border-bottom: 2px solid #4caf50; padding-bottom: 10px;">New Contact Form Submission</h2>
        <p style="margin: 10px 0;"><strong>Name:</strong> {name}</p>
        <p style="margin: 10px 0;"><strong>Email:</strong> {email}</p>
        <p style="margin: 10px 0;"><strong>Subject:</strong> {subject}</p>
        <div style="margin-top: 20px; padding: 15px; background-color: #f9f9f9; border-left: 4px solid #4caf50;">
            <p style="margin: 0;"><strong>Message:</strong></p>
            <p style="margin: 10px 0; line-height: 1.6;">{body}</p>
        </div>
        <hr style="border: none; border-top: 1px solid #dddddd; margin: 20px 0;">
        <p style="color: #888888; font-size: 12px; text-align: center;">
            Sent from your portfolio contact form, received {received}.
        </p>
    </div>
</div>"#,
        name = escape_html(&message.name),
        email = escape_html(&message.email),
        subject = escape_html(&message.subject),
        body = escape_html(&message.message),
        received = received,
    )
}

/// Escapes text for safe interpolation into HTML.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn submission() -> ContactMessage {
        ContactMessage {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Engine inquiry".to_string(),
            message: "I would like to discuss your analytical engine.".to_string(),
        }
    }

    fn config() -> MailConfig {
        MailConfig::new(
            "smtp.gmail.com".to_string(),
            "me@example.com".to_string(),
            "hunter2".to_string(),
            None,
        )
    }

    // =========================================================================
    // notification rendering tests
    // =========================================================================

    #[test]
    fn subject_carries_portfolio_prefix() {
        assert_eq!(
            notification_subject(&submission()),
            "Portfolio Contact: Engine inquiry"
        );
    }

    #[test]
    fn body_includes_every_field() {
        let body = notification_body(&submission());

        assert!(body.contains("Ada Lovelace"));
        assert!(body.contains("ada@example.com"));
        assert!(body.contains("Engine inquiry"));
        assert!(body.contains("I would like to discuss your analytical engine."));
    }

    #[test]
    fn body_escapes_visitor_text() {
        let mut message = submission();
        message.message = "<script>alert('hi')</script>".to_string();

        let body = notification_body(&message);

        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;alert(&#39;hi&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn body_notes_when_the_message_arrived() {
        assert!(notification_body(&submission()).contains("received"));
    }

    #[test]
    fn escape_html_replaces_every_special_character() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    // =========================================================================
    // transport construction tests
    // =========================================================================

    #[tokio::test]
    async fn smtp_mailer_builds_from_valid_config() {
        assert!(SmtpMailer::new(&config()).is_ok());
    }

    #[tokio::test]
    async fn smtp_mailer_rejects_unparseable_account_address() {
        let mut config = config();
        config.email_user = "not an address".to_string();
        config.recipient = "inbox@example.com".to_string();

        assert!(matches!(
            SmtpMailer::new(&config),
            Err(MailError::Address(_))
        ));
    }

    // =========================================================================
    // error display tests
    // =========================================================================

    #[test]
    fn errors_render_their_context() {
        assert_eq!(
            MailError::Address("bad mailbox".to_string()).to_string(),
            "Invalid email address: bad mailbox"
        );
        assert_eq!(
            MailError::Transport("relay down".to_string()).to_string(),
            "Email transport error: relay down"
        );
    }
}
