//! The feedback form's submission boundary.

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    #[default]
    GeneralFeedback,
    ReportABug,
    FeatureRequest,
    Partnerships,
    Other,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::GeneralFeedback,
        Topic::ReportABug,
        Topic::FeatureRequest,
        Topic::Partnerships,
        Topic::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Topic::GeneralFeedback => "General feedback",
            Topic::ReportABug => "Report a bug",
            Topic::FeatureRequest => "Feature request",
            Topic::Partnerships => "Partnerships",
            Topic::Other => "Other",
        }
    }

    /// Value used for the `<option>` element.
    pub fn value(self) -> &'static str {
        match self {
            Topic::GeneralFeedback => "general-feedback",
            Topic::ReportABug => "report-a-bug",
            Topic::FeatureRequest => "feature-request",
            Topic::Partnerships => "partnerships",
            Topic::Other => "other",
        }
    }

    /// Unknown values fall back to general feedback.
    pub fn from_value(value: &str) -> Topic {
        Topic::ALL
            .into_iter()
            .find(|topic| topic.value() == value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please tell us your name.")]
    MissingName,
    #[error("Please enter your email.")]
    MissingEmail,
    #[error("That email address doesn't look right.")]
    InvalidEmail,
    #[error("Please write a message.")]
    MissingMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback endpoint rejected the message with status {0}")]
    Rejected(u16),
    #[error("could not reach the feedback endpoint: {0}")]
    Network(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FeedbackSubmission {
    pub name: String,
    pub email: String,
    pub topic: Topic,
    pub message: String,
    pub consent: bool,
    /// Honeypot. Hidden from people, filled in by bots, never sent.
    #[serde(skip_serializing)]
    pub website: String,
}

impl FeedbackSubmission {
    pub fn is_spam(&self) -> bool {
        !self.website.trim().is_empty()
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::MissingEmail);
        } else if !is_plausible_email(email) {
            errors.push(FieldError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError::MissingMessage);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

/// Where submissions go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackTransport {
    /// Resolves successfully after `delay_ms`, nothing leaves the browser.
    Mock { delay_ms: u32 },
    /// JSON `POST` to `endpoint`.
    Http { endpoint: String },
}

impl FeedbackTransport {
    pub async fn send(&self, submission: &FeedbackSubmission) -> Result<(), FeedbackError> {
        match self {
            FeedbackTransport::Mock { delay_ms } => {
                TimeoutFuture::new(*delay_ms).await;
                info!("Feedback accepted by mock transport ({:?})", submission.topic);
                Ok(())
            }
            FeedbackTransport::Http { endpoint } => {
                let response = Request::post(endpoint)
                    .json(submission)
                    .map_err(|e| FeedbackError::Network(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| FeedbackError::Network(e.to_string()))?;

                if response.ok() {
                    info!("Feedback delivered to {}", endpoint);
                    Ok(())
                } else {
                    warn!("Feedback endpoint answered {}", response.status());
                    Err(FeedbackError::Rejected(response.status()))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> FeedbackSubmission {
        FeedbackSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@email.com".to_string(),
            topic: Topic::FeatureRequest,
            message: "More evening counselling slots please.".to_string(),
            consent: true,
            website: String::new(),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert_eq!(valid().validate(), Ok(()));
        assert!(!valid().is_spam());
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let submission = FeedbackSubmission {
            name: "  ".to_string(),
            email: String::new(),
            message: "\n".to_string(),
            ..valid()
        };
        assert_eq!(
            submission.validate(),
            Err(vec![
                FieldError::MissingName,
                FieldError::MissingEmail,
                FieldError::MissingMessage,
            ])
        );
    }

    #[test]
    fn test_email_shapes() {
        for bad in ["jane", "jane@", "@email.com", "jane@email", "a@b@c.com", "jane doe@x.io", "jane@.com"] {
            let submission = FeedbackSubmission {
                email: bad.to_string(),
                ..valid()
            };
            assert_eq!(submission.validate(), Err(vec![FieldError::InvalidEmail]), "{bad}");
        }
        for good in ["jane@email.com", "j.doe+learn@mail.co.in", " padded@x.io "] {
            let submission = FeedbackSubmission {
                email: good.to_string(),
                ..valid()
            };
            assert_eq!(submission.validate(), Ok(()), "{good}");
        }
    }

    #[test]
    fn test_honeypot_marks_spam() {
        let submission = FeedbackSubmission {
            website: "http://spam.example".to_string(),
            ..valid()
        };
        assert!(submission.is_spam());
    }

    #[test]
    fn test_payload_never_carries_honeypot() {
        let submission = FeedbackSubmission {
            website: "bot-filled".to_string(),
            ..valid()
        };
        let payload = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            payload,
            json!({
                "name": "Jane Doe",
                "email": "jane@email.com",
                "topic": "feature-request",
                "message": "More evening counselling slots please.",
                "consent": true,
            })
        );
    }

    #[test]
    fn test_topic_values_round_trip_through_select() {
        for topic in Topic::ALL {
            assert_eq!(Topic::from_value(topic.value()), topic);
            assert_eq!(serde_json::to_value(topic).unwrap(), json!(topic.value()));
        }
        assert_eq!(Topic::from_value("nonsense"), Topic::GeneralFeedback);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FeedbackError::Rejected(503).to_string(),
            "feedback endpoint rejected the message with status 503"
        );
        assert_eq!(FieldError::InvalidEmail.to_string(), "That email address doesn't look right.");
    }
}
