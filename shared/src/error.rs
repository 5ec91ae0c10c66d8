use serde::{Deserialize, Serialize};

pub const MSG_PERMISSION_REQUIRED: &str =
    "Camera permission is required to control the flashlight.";
pub const MSG_PERMISSION_QUERY_FAILED: &str = "Could not read camera permission state.";
pub const MSG_PERMISSION_REQUEST_FAILED: &str = "Unable to request camera permission.";
pub const MSG_UNSUPPORTED: &str = "Flashlight control is not supported on this device.";
pub const MSG_CAMERA_UNAVAILABLE: &str =
    "The camera is unavailable, so the flashlight cannot be used.";
pub const MSG_CAMERA_STARTING: &str = "The camera is still starting. Try again in a moment.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Transient,
    Permanent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// User or system refused camera access. Recoverable via settings.
    PermissionDenied,
    /// Querying or requesting the permission failed operationally.
    PermissionQueryFailed,
    /// The camera session instance failed to mount. Terminal until remount.
    CameraMountFailed,
    /// A toggle precondition was not met.
    ToggleRejected,
}

impl ErrorKind {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::PermissionQueryFailed => "PERMISSION_QUERY_FAILED",
            Self::CameraMountFailed => "CAMERA_MOUNT_FAILED",
            Self::ToggleRejected => "TOGGLE_REJECTED",
        }
    }

    #[must_use]
    pub const fn default_severity(self) -> ErrorSeverity {
        match self {
            Self::PermissionQueryFailed | Self::ToggleRejected => ErrorSeverity::Transient,
            Self::PermissionDenied | Self::CameraMountFailed => ErrorSeverity::Permanent,
        }
    }

    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::PermissionQueryFailed | Self::ToggleRejected)
    }
}

/// A user-visible message together with its machine-readable classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppError {
    pub kind: ErrorKind,
    pub severity: ErrorSeverity,
    pub message: String,
    /// How long the shell should keep a transient message on screen.
    pub display_ms: Option<u64>,
}

impl AppError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            message: message.into(),
            display_ms: None,
        }
    }

    #[must_use]
    pub fn transient(mut self, display_ms: u64) -> Self {
        self.severity = ErrorSeverity::Transient;
        self.display_ms = Some(display_ms);
        self
    }

    #[must_use]
    pub fn permission_denied() -> Self {
        Self::new(ErrorKind::PermissionDenied, MSG_PERMISSION_REQUIRED)
    }

    #[must_use]
    pub fn permission_query_failed() -> Self {
        Self::new(ErrorKind::PermissionQueryFailed, MSG_PERMISSION_QUERY_FAILED)
    }

    #[must_use]
    pub fn permission_request_failed() -> Self {
        Self::new(ErrorKind::PermissionQueryFailed, MSG_PERMISSION_REQUEST_FAILED)
    }

    #[must_use]
    pub fn camera_mount_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CameraMountFailed, message)
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self.severity, ErrorSeverity::Transient)
    }

    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ErrorKind::PermissionDenied.code(), "PERMISSION_DENIED");
        assert_eq!(ErrorKind::PermissionQueryFailed.code(), "PERMISSION_QUERY_FAILED");
        assert_eq!(ErrorKind::CameraMountFailed.code(), "CAMERA_MOUNT_FAILED");
        assert_eq!(ErrorKind::ToggleRejected.code(), "TOGGLE_REJECTED");
    }

    #[test]
    fn test_query_and_request_failures_share_kind_but_not_text() {
        let query = AppError::permission_query_failed();
        let request = AppError::permission_request_failed();
        assert_eq!(query.kind, request.kind);
        assert_ne!(query.message, request.message);
        assert!(query.is_retryable());
    }

    #[test]
    fn test_transient_sets_duration() {
        let err = AppError::new(ErrorKind::ToggleRejected, MSG_CAMERA_STARTING).transient(1500);
        assert!(err.is_transient());
        assert_eq!(err.display_ms, Some(1500));
    }

    #[test]
    fn test_denial_is_permanent() {
        let err = AppError::permission_denied();
        assert_eq!(err.severity, ErrorSeverity::Permanent);
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), format!("[PERMISSION_DENIED] {MSG_PERMISSION_REQUIRED}"));
    }
}
