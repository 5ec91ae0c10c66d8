mod camera;

pub use self::camera::{
    Camera, CameraError, CameraOperation, CameraOutput, CameraResult, PermissionResponse,
    PermissionStatus,
};

pub use crux_core::render::Render;

use crate::event::Event;
// The Effect derive wires capabilities to the app type named `App`.
#[allow(unused_imports)]
use crate::App;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub camera: Camera<Event>,
    pub render: Render<Event>,
}
