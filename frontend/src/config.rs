use crate::feedback::FeedbackTransport;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Header switches to its compact "scrolled" look past this offset.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Stand-in latency for the feedback form while no endpoint is wired.
pub const MOCK_SUBMIT_DELAY_MS: u32 = 800;

/// How long the sent/error toast stays up before the form goes back to idle.
pub const STATUS_DISMISS_MS: u32 = 2500;

/// Reveal animations are stepped at roughly 60fps.
pub const FRAME_INTERVAL_MS: u32 = 16;

/// Path of the feedback endpoint, set at build time with
/// `LEARNIFY_FEEDBACK_ENDPOINT=/api/feedback trunk build`.
pub fn feedback_endpoint() -> Option<String> {
    option_env!("LEARNIFY_FEEDBACK_ENDPOINT")
        .filter(|path| !path.trim().is_empty())
        .map(|path| format!("{}{}", get_backend_url(), path))
}

pub fn feedback_transport() -> FeedbackTransport {
    match feedback_endpoint() {
        Some(endpoint) => FeedbackTransport::Http { endpoint },
        None => FeedbackTransport::Mock {
            delay_ms: MOCK_SUBMIT_DELAY_MS,
        },
    }
}
