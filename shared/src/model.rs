use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::config::AppConfig;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PermissionState {
    #[default]
    Unknown,
    Granted,
    Denied,
}

impl PermissionState {
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }

    #[must_use]
    pub const fn from_granted(granted: bool) -> Self {
        if granted {
            Self::Granted
        } else {
            Self::Denied
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CameraReadiness {
    #[default]
    NotReady,
    Ready,
    /// Terminal for the current camera session instance.
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    #[default]
    Active,
    Inactive,
    Background,
}

impl LifecycleState {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Why a permission query or request was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionPurpose {
    Launch,
    Toggle,
    Foreground,
}

/// Identifies one mounted session of the screen. Responses to requests issued
/// under an older token are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScopeToken(u64);

impl ScopeToken {
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ScopeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("torch is on without camera permission")]
    TorchWithoutPermission,
    #[error("torch is on while the camera is not ready")]
    TorchWithoutCamera,
    #[error("torch is on while the camera is errored")]
    TorchAfterCameraError,
    #[error("torch is on while the app is not in the foreground")]
    TorchInBackground,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Model {
    pub config: AppConfig,
    pub scope: Option<ScopeToken>,
    scope_generation: u64,

    pub permission: PermissionState,
    pub readiness: CameraReadiness,
    pub torch_on: bool,
    pub message: Option<AppError>,

    pub lifecycle: LifecycleState,
    pub settings_prompt: bool,
    pub permission_request_in_flight: bool,
    /// A toggle arrived while a non-toggle request was pending; the grant
    /// continues it.
    pub toggle_pending: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl Model {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            scope: None,
            scope_generation: 0,
            permission: if config.platform_supports_camera {
                PermissionState::Unknown
            } else {
                PermissionState::Denied
            },
            readiness: CameraReadiness::NotReady,
            torch_on: false,
            message: None,
            lifecycle: LifecycleState::Active,
            settings_prompt: false,
            permission_request_in_flight: false,
            toggle_pending: false,
        }
    }

    /// Resets session state under `config` and opens a new scope, which
    /// invalidates every token handed out before.
    pub fn mount(&mut self, config: AppConfig) -> ScopeToken {
        let generation = self.scope_generation + 1;
        *self = Self::new(config);
        self.scope_generation = generation;
        let token = ScopeToken(generation);
        self.scope = Some(token);
        token
    }

    pub fn unmount(&mut self) {
        self.scope = None;
        self.torch_on = false;
        self.permission_request_in_flight = false;
        self.toggle_pending = false;
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.scope.is_some()
    }

    #[must_use]
    pub fn is_current(&self, token: ScopeToken) -> bool {
        self.scope == Some(token)
    }

    #[must_use]
    pub const fn platform_supported(&self) -> bool {
        self.config.platform_supports_camera
    }

    /// Applies a permission state, turning the torch off when access is lost.
    /// Returns true if the torch was forced off.
    pub fn set_permission(&mut self, permission: PermissionState) -> bool {
        self.permission = permission;
        if permission.is_granted() {
            self.settings_prompt = false;
            false
        } else {
            self.force_torch_off()
        }
    }

    /// Returns true if the torch was on.
    pub fn force_torch_off(&mut self) -> bool {
        std::mem::replace(&mut self.torch_on, false)
    }

    #[must_use]
    pub const fn can_light_torch(&self) -> bool {
        self.permission.is_granted() && matches!(self.readiness, CameraReadiness::Ready)
    }

    /// Whether the shell should keep a camera session mounted.
    #[must_use]
    pub const fn wants_camera_session(&self) -> bool {
        self.platform_supported()
            && self.permission.is_granted()
            && !matches!(self.readiness, CameraReadiness::Errored)
    }

    pub fn set_message(&mut self, message: AppError) {
        self.message = Some(message);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if !self.torch_on {
            return Ok(());
        }
        if !self.permission.is_granted() {
            return Err(InvariantViolation::TorchWithoutPermission);
        }
        if !self.lifecycle.is_active() {
            return Err(InvariantViolation::TorchInBackground);
        }
        match self.readiness {
            CameraReadiness::Ready => Ok(()),
            CameraReadiness::NotReady => Err(InvariantViolation::TorchWithoutCamera),
            CameraReadiness::Errored => Err(InvariantViolation::TorchAfterCameraError),
        }
    }
}
