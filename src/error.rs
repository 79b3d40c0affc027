use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error("failed to attach {event} listener: {reason}")]
    Listen { event: &'static str, reason: String },
    #[error("failed to set {property}: {reason}")]
    PropertyRejected {
        property: &'static str,
        reason: String,
    },
}
