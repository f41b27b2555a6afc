use thiserror::Error;

/// Rejections of a signup or unregister command.
///
/// The `Display` text is sent to clients verbatim as the `detail` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up for this activity")]
    AlreadyRegistered,

    #[error("Student is not registered for this activity")]
    NotRegistered,
}
