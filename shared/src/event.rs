use serde::{Deserialize, Serialize};

use crate::capabilities::CameraResult;
use crate::config::AppConfig;
use crate::model::{LifecycleState, PermissionPurpose, ScopeToken};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Event {
    // Screen lifecycle
    Initialize(AppConfig),
    Teardown,

    // Camera session callbacks
    CameraMountStarted,
    CameraReady,
    CameraError {
        message: String,
    },

    // App lifecycle
    LifecycleChanged {
        previous: LifecycleState,
        next: LifecycleState,
    },

    // User intents
    ToggleRequested,
    OpenSettingsRequested,
    DismissMessage,

    // Capability responses (boxed to keep enum size small)
    #[serde(skip)]
    PermissionChecked {
        scope: ScopeToken,
        purpose: PermissionPurpose,
        result: Box<CameraResult>,
    },
    #[serde(skip)]
    PermissionRequested {
        scope: ScopeToken,
        purpose: PermissionPurpose,
        result: Box<CameraResult>,
    },
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Initialize(_) => "initialize",
            Self::Teardown => "teardown",
            Self::CameraMountStarted => "camera_mount_started",
            Self::CameraReady => "camera_ready",
            Self::CameraError { .. } => "camera_error",
            Self::LifecycleChanged { .. } => "lifecycle_changed",
            Self::ToggleRequested => "toggle_requested",
            Self::OpenSettingsRequested => "open_settings_requested",
            Self::DismissMessage => "dismiss_message",
            Self::PermissionChecked { .. } => "permission_checked",
            Self::PermissionRequested { .. } => "permission_requested",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        matches!(
            self,
            Self::ToggleRequested | Self::OpenSettingsRequested | Self::DismissMessage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_size_is_reasonable() {
        let size = std::mem::size_of::<Event>();
        assert!(
            size <= 64,
            "Event enum is {} bytes, box more variants",
            size
        );
    }

    #[test]
    fn user_initiated_events() {
        assert!(Event::ToggleRequested.is_user_initiated());
        assert!(Event::OpenSettingsRequested.is_user_initiated());
        assert!(!Event::CameraReady.is_user_initiated());
        assert!(!Event::Teardown.is_user_initiated());
    }

    #[test]
    fn shell_events_deserialize() {
        let event: Event = serde_json::from_str(
            r#"{"LifecycleChanged":{"previous":"active","next":"background"}}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            Event::LifecycleChanged {
                previous: LifecycleState::Active,
                next: LifecycleState::Background,
            }
        );
        assert_eq!(event.name(), "lifecycle_changed");
    }
}
