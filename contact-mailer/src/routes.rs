//! HTTP routes for the portfolio site and its contact endpoint.

use std::sync::LazyLock;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::mailer::ContactMessage;
use crate::state::AppState;

/// Matches `user@host.tld` with no whitespace, the same shape the client
/// script checks before submitting.
static EMAIL_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Builds the application router with all routes registered.
///
/// Everything outside `/send-message` falls through to the static
/// portfolio site under `assets_dir`.
pub fn create_router(state: AppState, assets_dir: &str) -> Router {
    Router::new()
        .route("/send-message", post(send_message))
        .fallback_service(ServeDir::new(assets_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Raw JSON submission for `POST /send-message`.
///
/// Fields default to empty strings when absent, so a missing field fails
/// validation instead of JSON deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendMessageForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// JSON body returned by `POST /send-message`.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageResponse {
    pub success: bool,
    pub message: String,
}

impl SendMessageForm {
    /// Checks the submission, returning the text for the first failed rule.
    ///
    /// Presence is checked across all four fields before the email format,
    /// matching what the client reports.
    pub fn validate(&self) -> Result<ContactMessage, &'static str> {
        let all_present = [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty());
        if !all_present {
            return Err("All fields are required!");
        }
        if !EMAIL_FORMAT.is_match(&self.email) {
            return Err("Please enter a valid email address!");
        }
        Ok(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }
}

/// `POST /send-message` validates the submission and emails it onward.
async fn send_message(
    State(state): State<AppState>,
    Json(form): Json<SendMessageForm>,
) -> (StatusCode, Json<SendMessageResponse>) {
    let submission = match form.validate() {
        Ok(submission) => submission,
        Err(message) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(SendMessageResponse {
                    success: false,
                    message: message.to_string(),
                }),
            );
        }
    };

    match state.mailer.send(&submission).await {
        Ok(()) => {
            info!(from = %submission.email, "contact message delivered");
            (
                StatusCode::OK,
                Json(SendMessageResponse {
                    success: true,
                    message: "Thank you! Your message has been sent successfully. \
                              I will get back to you soon!"
                        .to_string(),
                }),
            )
        }
        Err(e) => {
            error!("error sending email: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SendMessageResponse {
                    success: false,
                    message: "Failed to send message. Please try again later or contact me directly."
                        .to_string(),
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> SendMessageForm {
        SendMessageForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    fn complete_form() -> SendMessageForm {
        form(
            "Ada Lovelace",
            "ada@example.com",
            "Engine inquiry",
            "I would like to discuss your analytical engine.",
        )
    }

    // =========================================================================
    // accepted submission tests
    // =========================================================================

    #[test]
    fn validate_passes_a_complete_submission_through() {
        let result = complete_form().validate();

        assert_eq!(
            result,
            Ok(ContactMessage {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                subject: "Engine inquiry".to_string(),
                message: "I would like to discuss your analytical engine.".to_string(),
            })
        );
    }

    #[test]
    fn validate_accepts_subdomain_addresses() {
        let mut form = complete_form();
        form.email = "ada@mail.example.co.uk".to_string();

        assert!(form.validate().is_ok());
    }

    // =========================================================================
    // rejected submission tests
    // =========================================================================

    #[test]
    fn validate_rejects_missing_name() {
        let result = form("", "ada@example.com", "Hello", "A long enough message.").validate();

        assert_eq!(result, Err("All fields are required!"));
    }

    #[test]
    fn validate_rejects_whitespace_only_message() {
        let result = form("Ada", "ada@example.com", "Hello", "   ").validate();

        assert_eq!(result, Err("All fields are required!"));
    }

    #[test]
    fn validate_reports_missing_fields_before_email_format() {
        let result = form("", "not-an-email", "Hello", "A long enough message.").validate();

        assert_eq!(result, Err("All fields are required!"));
    }

    #[test]
    fn validate_rejects_address_without_at_sign() {
        let mut form = complete_form();
        form.email = "ada.example.com".to_string();

        assert_eq!(form.validate(), Err("Please enter a valid email address!"));
    }

    #[test]
    fn validate_rejects_address_without_domain_dot() {
        let mut form = complete_form();
        form.email = "ada@example".to_string();

        assert_eq!(form.validate(), Err("Please enter a valid email address!"));
    }

    #[test]
    fn validate_rejects_address_containing_whitespace() {
        let mut form = complete_form();
        form.email = "ada lovelace@example.com".to_string();

        assert_eq!(form.validate(), Err("Please enter a valid email address!"));
    }
}
