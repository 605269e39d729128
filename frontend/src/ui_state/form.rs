use crate::feedback::{FeedbackError, FeedbackSubmission, FieldError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Status moved to `Sending`; the caller should hand the submission to a transport.
    Send,
    /// Honeypot was filled in. Treated as success, nothing is sent.
    DiscardedHoneypot,
    /// A submission is already in flight.
    IgnoredBusy,
    Invalid(Vec<FieldError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTone {
    Info,
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toast {
    pub message: &'static str,
    pub tone: ToastTone,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackFormState {
    status: FormStatus,
    errors: Vec<FieldError>,
}

impl FeedbackFormState {
    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn submit(&mut self, submission: &FeedbackSubmission) -> SubmitDecision {
        if self.status == FormStatus::Sending {
            return SubmitDecision::IgnoredBusy;
        }
        if submission.is_spam() {
            return SubmitDecision::DiscardedHoneypot;
        }
        if let Err(errors) = submission.validate() {
            self.errors = errors.clone();
            return SubmitDecision::Invalid(errors);
        }
        self.errors.clear();
        self.status = FormStatus::Sending;
        SubmitDecision::Send
    }

    /// Records the transport's answer. Returns false if nothing was in flight.
    pub fn complete(&mut self, result: Result<(), FeedbackError>) -> bool {
        if self.status != FormStatus::Sending {
            return false;
        }
        self.status = match result {
            Ok(()) => FormStatus::Sent,
            Err(_) => FormStatus::Error,
        };
        true
    }

    /// Clears a sent/error status once its toast has been shown long enough.
    pub fn dismiss(&mut self) -> bool {
        match self.status {
            FormStatus::Sent | FormStatus::Error => {
                self.status = FormStatus::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn toast(&self) -> Option<Toast> {
        match self.status {
            FormStatus::Idle => None,
            FormStatus::Sending => Some(Toast {
                message: "Sending…",
                tone: ToastTone::Info,
            }),
            FormStatus::Sent => Some(Toast {
                message: "Thanks! Your message has been sent.",
                tone: ToastTone::Success,
            }),
            FormStatus::Error => Some(Toast {
                message: "Something went wrong. Please try again.",
                tone: ToastTone::Failure,
            }),
        }
    }
}
