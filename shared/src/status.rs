//! Status line shown under the torch button.
//!
//! The text is a pure function of the model, evaluated as an ordered rule
//! table: the first rule whose predicate holds supplies the text.

use crate::model::{CameraReadiness, Model, PermissionState};

pub const STATUS_UNSUPPORTED: &str = "Flashlight is not available on this device.";
pub const STATUS_CHECKING: &str = "Checking camera permission...";
pub const STATUS_GRANT_PERMISSION: &str = "Allow camera access to use the flashlight.";
pub const STATUS_CAMERA_UNAVAILABLE: &str = "Camera unavailable.";
pub const STATUS_STARTING: &str = "Starting camera...";
pub const STATUS_ON: &str = "Flashlight is ON.";
pub const STATUS_OFF: &str = "Flashlight is OFF.";

pub struct StatusRule {
    pub name: &'static str,
    pub applies: fn(&Model) -> bool,
    pub text: fn(&Model) -> &'static str,
}

pub const STATUS_RULES: &[StatusRule] = &[
    StatusRule {
        name: "unsupported",
        applies: |m| !m.platform_supported(),
        text: |_| STATUS_UNSUPPORTED,
    },
    StatusRule {
        name: "checking",
        applies: |m| m.permission == PermissionState::Unknown,
        text: |_| STATUS_CHECKING,
    },
    StatusRule {
        name: "denied",
        applies: |m| m.permission == PermissionState::Denied,
        text: |_| STATUS_GRANT_PERMISSION,
    },
    StatusRule {
        name: "camera_errored",
        applies: |m| m.readiness == CameraReadiness::Errored,
        text: |_| STATUS_CAMERA_UNAVAILABLE,
    },
    StatusRule {
        name: "starting",
        applies: |m| m.readiness == CameraReadiness::NotReady,
        text: |_| STATUS_STARTING,
    },
    StatusRule {
        name: "torch",
        applies: |_| true,
        text: |m| if m.torch_on { STATUS_ON } else { STATUS_OFF },
    },
];

#[must_use]
pub fn matching_rule(model: &Model) -> &'static StatusRule {
    STATUS_RULES
        .iter()
        .find(|rule| (rule.applies)(model))
        .unwrap_or(&STATUS_RULES[STATUS_RULES.len() - 1])
}

#[must_use]
pub fn status_text(model: &Model) -> &'static str {
    (matching_rule(model).text)(model)
}
