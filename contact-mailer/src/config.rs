//! SMTP configuration.

/// Connection and addressing settings for the outgoing mail account.
///
/// Resolved from the environment in `main` and passed in explicitly;
/// nothing reads environment variables after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    /// SMTP relay host, e.g. `smtp.gmail.com`.
    pub smtp_host: String,
    /// Account used to authenticate, also the `From` address.
    pub email_user: String,
    /// Password (or app password) for `email_user`.
    pub email_password: String,
    /// Address submissions are delivered to.
    pub recipient: String,
}

impl MailConfig {
    /// Builds a config. When no recipient is given, submissions are
    /// delivered to the sending account itself.
    pub fn new(
        smtp_host: String,
        email_user: String,
        email_password: String,
        recipient: Option<String>,
    ) -> Self {
        let recipient = recipient.unwrap_or_else(|| email_user.clone());
        Self {
            smtp_host,
            email_user,
            email_password,
            recipient,
        }
    }
}
