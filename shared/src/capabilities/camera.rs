use crux_core::capability::{CapabilityContext, Operation};
use crux_core::macros::Capability;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Camera permission and torch port. The shell owns the camera session; the
/// core only asks about access and tells the session what the torch should do.
#[derive(Capability)]
pub struct Camera<E> {
    context: CapabilityContext<CameraOperation, E>,
}

impl<E> Clone for Camera<E> {
    fn clone(&self) -> Self {
        Self {
            context: self.context.clone(),
        }
    }
}

impl<E> Camera<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<CameraOperation, E>) -> Self {
        Self { context }
    }

    pub fn query_permission<F>(&self, callback: F)
    where
        F: FnOnce(CameraResult) -> E + Send + 'static,
    {
        self.request(CameraOperation::QueryPermission, callback);
    }

    pub fn request_permission<F>(&self, callback: F)
    where
        F: FnOnce(CameraResult) -> E + Send + 'static,
    {
        self.request(CameraOperation::RequestPermission, callback);
    }

    pub fn open_settings(&self) {
        self.notify(CameraOperation::OpenSettings);
    }

    pub fn set_torch(&self, enabled: bool) {
        self.notify(CameraOperation::SetTorch { enabled });
    }

    fn request<F>(&self, operation: CameraOperation, callback: F)
    where
        F: FnOnce(CameraResult) -> E + Send + 'static,
    {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            let result = ctx.request_from_shell(operation).await;
            ctx.update_app(callback(result));
        });
    }

    fn notify(&self, operation: CameraOperation) {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            ctx.notify_shell(operation).await;
        });
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CameraOperation {
    QueryPermission,
    RequestPermission,
    OpenSettings,
    SetTorch { enabled: bool },
}

impl Operation for CameraOperation {
    type Output = CameraResult;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionStatus {
    Granted,
    Denied,
    NotDetermined,
}

impl PermissionStatus {
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// What the OS reports about camera access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionResponse {
    pub status: PermissionStatus,
    /// Whether the OS will still show the system prompt if asked.
    pub can_ask_again: bool,
}

impl PermissionResponse {
    #[must_use]
    pub const fn granted() -> Self {
        Self {
            status: PermissionStatus::Granted,
            can_ask_again: true,
        }
    }

    #[must_use]
    pub const fn denied(can_ask_again: bool) -> Self {
        Self {
            status: PermissionStatus::Denied,
            can_ask_again,
        }
    }

    #[must_use]
    pub const fn is_granted(&self) -> bool {
        self.status.is_granted()
    }

    #[must_use]
    pub const fn can_request(&self) -> bool {
        !self.is_granted() && self.can_ask_again
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CameraOutput {
    Permission(PermissionResponse),
    Acknowledged,
}

impl CameraOutput {
    #[must_use]
    pub fn permission(&self) -> Option<PermissionResponse> {
        match self {
            Self::Permission(response) => Some(*response),
            Self::Acknowledged => None,
        }
    }
}

/// Operational failures. A denial is a successful answer, not an error.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum CameraError {
    #[error("camera not supported on this platform")]
    NotSupported,

    #[error("permission service unavailable: {reason}")]
    ServiceUnavailable { reason: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}

pub type CameraResult = Result<CameraOutput, CameraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_response_helpers() {
        assert!(PermissionResponse::granted().is_granted());
        assert!(!PermissionResponse::granted().can_request());
        assert!(PermissionResponse::denied(true).can_request());
        assert!(!PermissionResponse::denied(false).can_request());
    }

    #[test]
    fn test_not_determined_is_not_granted() {
        let response = PermissionResponse {
            status: PermissionStatus::NotDetermined,
            can_ask_again: true,
        };
        assert!(!response.is_granted());
        assert!(response.can_request());
    }

    #[test]
    fn test_output_permission_accessor() {
        let output = CameraOutput::Permission(PermissionResponse::denied(false));
        assert_eq!(output.permission(), Some(PermissionResponse::denied(false)));
        assert_eq!(CameraOutput::Acknowledged.permission(), None);
    }

    #[test]
    fn test_operation_serializes_for_shell() {
        let json = serde_json::to_string(&CameraOperation::SetTorch { enabled: false }).unwrap();
        assert_eq!(json, r#"{"SetTorch":{"enabled":false}}"#);
    }
}
