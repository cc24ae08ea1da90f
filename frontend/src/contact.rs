use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where contact submissions go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEndpoint {
    /// No destination wired in; submissions fail without losing input.
    Unconfigured,
    /// POST target accepting `{name, email, message}` as JSON.
    Webhook(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("contact form has no submission endpoint configured")]
    NotConfigured,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("request failed: {0}")]
    Network(String),
    #[error("endpoint rejected the submission with status {0}")]
    Rejected(u16),
}

impl ContactError {
    /// Text shown under the form.
    pub fn notice(&self) -> String {
        match self {
            ContactError::NotConfigured => {
                "Online enquiries aren't connected yet. Your message is still here, please reach us on WhatsApp instead.".to_string()
            }
            ContactError::MissingField(field) => format!("Please fill in your {}.", field),
            ContactError::Network(_) => {
                "We couldn't reach our servers. Check your connection and try again.".to_string()
            }
            ContactError::Rejected(_) => "Something went wrong on our side. Please try again shortly.".to_string(),
        }
    }
}

impl ContactSubmission {
    /// Trims every field. The form marks them `required`, this only guards
    /// against whitespace-only input slipping through.
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let field = |value: &str, label: &'static str| {
            let value = value.trim();
            if value.is_empty() {
                Err(ContactError::MissingField(label))
            } else {
                Ok(value.to_string())
            }
        };
        Ok(Self {
            name: field(name, "name")?,
            email: field(email, "email")?,
            message: field(message, "message")?,
        })
    }
}

pub async fn submit(endpoint: &ContactEndpoint, submission: &ContactSubmission) -> Result<(), ContactError> {
    let url = match endpoint {
        ContactEndpoint::Unconfigured => return Err(ContactError::NotConfigured),
        ContactEndpoint::Webhook(url) => *url,
    };

    let response = Request::post(url)
        .header("Content-Type", "application/json")
        .json(submission)
        .map_err(|e| ContactError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(ContactError::Rejected(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_trimmed() {
        let submission = ContactSubmission::new("  Ada ", "ada@example.com\n", " Need a CRM ").unwrap();
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.message, "Need a CRM");
    }

    #[test]
    fn whitespace_only_field_is_missing() {
        assert_eq!(
            ContactSubmission::new("Ada", "   ", "hello"),
            Err(ContactError::MissingField("email"))
        );
    }

    #[test]
    fn payload_matches_the_webhook_contract() {
        let submission = ContactSubmission::new("Ada", "ada@example.com", "Hi").unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Ada", "email": "ada@example.com", "message": "Hi"})
        );
    }

    #[test]
    fn unconfigured_endpoint_fails_safely() {
        let submission = ContactSubmission::new("Ada", "ada@example.com", "Hi").unwrap();
        let result = futures::executor::block_on(submit(&ContactEndpoint::Unconfigured, &submission));
        assert_eq!(result, Err(ContactError::NotConfigured));
        // input is borrowed, never consumed
        assert_eq!(submission.name, "Ada");
    }

    #[test]
    fn notices_are_user_facing() {
        assert!(ContactError::NotConfigured.notice().contains("WhatsApp"));
        assert_eq!(ContactError::MissingField("name").notice(), "Please fill in your name.");
    }
}
