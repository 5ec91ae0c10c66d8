#![allow(dead_code)]

use crux_core::testing::AppTester;
use crux_core::Request;
use shared::capabilities::{CameraOperation, CameraOutput, CameraResult, PermissionResponse};
use shared::{
    App, AppConfig, CruxApp, Effect, Event, Model, PermissionPurpose, ScopeToken, ViewModel,
};

pub type Tester = AppTester<App, Effect>;

pub fn camera_requests(effects: Vec<Effect>) -> Vec<Request<CameraOperation>> {
    effects
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::Camera(request) => Some(request),
            _ => None,
        })
        .collect()
}

pub fn camera_operations(effects: Vec<Effect>) -> Vec<CameraOperation> {
    camera_requests(effects)
        .into_iter()
        .map(|request| request.operation)
        .collect()
}

pub fn scope(model: &Model) -> ScopeToken {
    model.scope.expect("screen should be mounted")
}

pub fn granted() -> CameraResult {
    Ok(CameraOutput::Permission(PermissionResponse::granted()))
}

pub fn denied(can_ask_again: bool) -> CameraResult {
    Ok(CameraOutput::Permission(PermissionResponse::denied(can_ask_again)))
}

pub fn checked(model: &Model, purpose: PermissionPurpose, result: CameraResult) -> Event {
    Event::PermissionChecked {
        scope: scope(model),
        purpose,
        result: Box::new(result),
    }
}

pub fn requested(model: &Model, purpose: PermissionPurpose, result: CameraResult) -> Event {
    Event::PermissionRequested {
        scope: scope(model),
        purpose,
        result: Box::new(result),
    }
}

/// Mounts the screen with the permission already granted.
pub fn granted_model(app: &Tester) -> Model {
    let mut model = Model::default();
    app.update(Event::Initialize(AppConfig::default()), &mut model);
    let event = checked(&model, PermissionPurpose::Launch, granted());
    app.update(event, &mut model);
    model
}

/// Mounts the screen with permission granted and the camera ready.
pub fn ready_model(app: &Tester) -> Model {
    let mut model = granted_model(app);
    app.update(Event::CameraReady, &mut model);
    model
}

pub fn view(model: &Model) -> ViewModel {
    CruxApp::view(&App, model)
}
