// lib.rs - Torch shared core

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod capabilities;
pub mod config;
pub mod error;
pub mod event;
pub mod model;
pub mod status;
pub mod view;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use config::{AppConfig, ConfigError};
pub use crux_core::{render::Render, App as CruxApp};
pub use error::{AppError, ErrorKind, ErrorSeverity};
pub use event::Event;
pub use model::{
    CameraReadiness, InvariantViolation, LifecycleState, Model, PermissionPurpose,
    PermissionState, ScopeToken,
};
pub use view::{MessageView, ViewModel};
