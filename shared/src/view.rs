use serde::{Deserialize, Serialize};

use crate::model::{CameraReadiness, Model, PermissionState};
use crate::status::status_text;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageView {
    pub text: String,
    pub code: String,
    pub is_transient: bool,
    pub duration_ms: Option<u64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub permission: PermissionState,
    pub readiness: CameraReadiness,
    /// Desired torch state; the camera session mirrors it while mounted.
    pub torch_enabled: bool,
    pub mount_camera: bool,
    pub message: Option<MessageView>,
    pub show_settings_prompt: bool,
    pub status_text: String,
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        Self {
            permission: model.permission,
            readiness: model.readiness,
            torch_enabled: model.torch_on,
            mount_camera: model.wants_camera_session(),
            message: model.message.as_ref().map(|m| MessageView {
                text: m.message.clone(),
                code: m.code().to_string(),
                is_transient: m.is_transient(),
                duration_ms: m.display_ms,
            }),
            show_settings_prompt: model.settings_prompt,
            status_text: status_text(model).to_string(),
        }
    }
}
