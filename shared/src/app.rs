use tracing::{debug, error, info, warn};

use crate::capabilities::{CameraError, CameraResult, Capabilities, PermissionResponse};
use crate::config::AppConfig;
use crate::error::{
    AppError, ErrorKind, MSG_CAMERA_STARTING, MSG_CAMERA_UNAVAILABLE, MSG_UNSUPPORTED,
};
use crate::event::Event;
use crate::model::{CameraReadiness, Model, PermissionPurpose, PermissionState, ScopeToken};
use crate::view::ViewModel;

#[derive(Default)]
pub struct App;

impl App {
    fn query_permission(scope: ScopeToken, purpose: PermissionPurpose, caps: &Capabilities) {
        caps.camera.query_permission(move |result| Event::PermissionChecked {
            scope,
            purpose,
            result: Box::new(result),
        });
    }

    fn request_permission(
        model: &mut Model,
        scope: ScopeToken,
        purpose: PermissionPurpose,
        caps: &Capabilities,
    ) {
        if model.permission_request_in_flight {
            if purpose == PermissionPurpose::Toggle {
                model.toggle_pending = true;
            }
            debug!(?purpose, "permission request already pending");
            return;
        }
        model.permission_request_in_flight = true;
        caps.camera.request_permission(move |result| Event::PermissionRequested {
            scope,
            purpose,
            result: Box::new(result),
        });
    }

    /// Turns the torch off and tells the camera session right away, so the
    /// hardware does not stay lit until the next render.
    fn force_torch_off(model: &mut Model, reason: &'static str, caps: &Capabilities) {
        if model.force_torch_off() {
            info!(reason, "torch forced off");
            caps.camera.set_torch(false);
        }
    }

    fn apply_permission(model: &mut Model, permission: PermissionState, caps: &Capabilities) {
        if model.set_permission(permission) {
            info!(reason = "permission_lost", "torch forced off");
            caps.camera.set_torch(false);
        }
    }

    fn permission_from(result: &CameraResult) -> Result<Option<PermissionResponse>, &CameraError> {
        result.as_ref().map(|output| output.permission())
    }

    fn handle_initialize(model: &mut Model, config: AppConfig, caps: &Capabilities) {
        let was_lit = model.torch_on;
        let scope = model.mount(config.validated());
        if was_lit {
            caps.camera.set_torch(false);
        }

        if !model.platform_supported() {
            info!(%scope, "camera control unsupported on this platform");
            return;
        }

        debug!(%scope, "querying camera permission");
        Self::query_permission(scope, PermissionPurpose::Launch, caps);
    }

    fn handle_permission_checked(
        model: &mut Model,
        scope: ScopeToken,
        purpose: PermissionPurpose,
        result: &CameraResult,
        caps: &Capabilities,
    ) {
        match (purpose, Self::permission_from(result)) {
            (PermissionPurpose::Foreground, Ok(Some(response))) => {
                let permission = PermissionState::from_granted(response.is_granted());
                if permission != model.permission {
                    info!(?permission, "camera permission changed while away");
                }
                Self::apply_permission(model, permission, caps);
            }
            (PermissionPurpose::Foreground, outcome) => {
                debug!(?outcome, "foreground permission check failed, keeping state");
            }

            (_, Ok(Some(response))) if response.is_granted() => {
                Self::apply_permission(model, PermissionState::Granted, caps);
            }
            (_, Ok(Some(response)))
                if response.can_request() && model.config.request_on_launch =>
            {
                Self::request_permission(model, scope, purpose, caps);
            }
            (_, Ok(Some(_))) => {
                Self::apply_permission(model, PermissionState::Denied, caps);
                model.set_message(AppError::permission_denied());
            }
            (_, Ok(None)) | (_, Err(_)) => {
                warn!(?purpose, ?result, "camera permission query failed");
                Self::apply_permission(model, PermissionState::Denied, caps);
                model.set_message(AppError::permission_query_failed());
            }
        }
    }

    fn handle_permission_requested(
        model: &mut Model,
        purpose: PermissionPurpose,
        result: &CameraResult,
        caps: &Capabilities,
    ) {
        model.permission_request_in_flight = false;
        let continues_toggle =
            std::mem::take(&mut model.toggle_pending) || purpose == PermissionPurpose::Toggle;

        match Self::permission_from(result) {
            Ok(Some(response)) if response.is_granted() => {
                info!(?purpose, "camera permission granted");
                Self::apply_permission(model, PermissionState::Granted, caps);
                model.clear_message();
                if continues_toggle {
                    Self::finish_toggle(model, caps);
                }
            }
            Ok(Some(_)) => {
                info!(?purpose, "camera permission denied");
                Self::apply_permission(model, PermissionState::Denied, caps);
                model.set_message(AppError::permission_denied());
                if continues_toggle {
                    model.settings_prompt = true;
                }
            }
            Ok(None) | Err(_) => {
                warn!(?purpose, ?result, "camera permission request failed");
                Self::apply_permission(model, PermissionState::Denied, caps);
                model.set_message(AppError::permission_request_failed());
            }
        }
    }

    fn handle_toggle(model: &mut Model, caps: &Capabilities) {
        if !model.platform_supported() {
            model.set_message(AppError::new(ErrorKind::ToggleRejected, MSG_UNSUPPORTED));
            return;
        }

        if !model.permission.is_granted() {
            if let Some(scope) = model.scope {
                Self::request_permission(model, scope, PermissionPurpose::Toggle, caps);
            }
            return;
        }

        Self::finish_toggle(model, caps);
    }

    /// The readiness half of a toggle. Also runs when a toggle-triggered
    /// permission request comes back granted.
    fn finish_toggle(model: &mut Model, caps: &Capabilities) {
        if !model.lifecycle.is_active() {
            debug!(lifecycle = ?model.lifecycle, "app not in foreground, torch stays off");
            return;
        }

        match model.readiness {
            CameraReadiness::Errored => {
                model.set_message(AppError::new(ErrorKind::ToggleRejected, MSG_CAMERA_UNAVAILABLE));
            }
            CameraReadiness::NotReady => {
                model.set_message(
                    AppError::new(ErrorKind::ToggleRejected, MSG_CAMERA_STARTING)
                        .transient(model.config.starting_notice_ms),
                );
            }
            CameraReadiness::Ready if model.can_light_torch() => {
                model.torch_on = !model.torch_on;
                model.clear_message();
                info!(torch_on = model.torch_on, "torch toggled");
                caps.camera.set_torch(model.torch_on);
            }
            CameraReadiness::Ready => {
                warn!(permission = ?model.permission, "toggle reached flip without permission");
            }
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        let event_name = event.name();
        if event.is_user_initiated() {
            info!(event = event_name, "user_action");
        } else {
            debug!(event = event_name, "event");
        }

        if !model.is_mounted() && !matches!(event, Event::Initialize(_)) {
            debug!(event = event_name, "screen not mounted, dropping event");
            return;
        }

        match event {
            Event::Initialize(config) => {
                Self::handle_initialize(model, config, caps);
            }

            Event::Teardown => {
                if model.torch_on {
                    caps.camera.set_torch(false);
                }
                model.unmount();
                info!("screen torn down");
            }

            Event::CameraMountStarted => {
                model.readiness = CameraReadiness::NotReady;
                Self::force_torch_off(model, "camera_remount", caps);
            }

            Event::CameraReady => {
                model.readiness = CameraReadiness::Ready;
                model.clear_message();
                info!("camera session ready");
            }

            Event::CameraError { message } => {
                error!(%message, "camera session failed to mount");
                model.readiness = CameraReadiness::Errored;
                Self::force_torch_off(model, "camera_error", caps);
                model.set_message(AppError::camera_mount_failed(message));
            }

            Event::LifecycleChanged { previous, next } => {
                debug!(?previous, ?next, "lifecycle changed");
                model.lifecycle = next;

                if !next.is_active() {
                    Self::force_torch_off(model, "app_left_foreground", caps);
                }

                if next.is_active() && model.platform_supported() {
                    if let Some(scope) = model.scope {
                        Self::query_permission(scope, PermissionPurpose::Foreground, caps);
                    }
                }
            }

            Event::ToggleRequested => {
                Self::handle_toggle(model, caps);
            }

            Event::OpenSettingsRequested => {
                model.settings_prompt = false;
                caps.camera.open_settings();
            }

            Event::DismissMessage => {
                model.clear_message();
                model.settings_prompt = false;
            }

            Event::PermissionChecked {
                scope,
                purpose,
                result,
            } => {
                if !model.is_current(scope) {
                    debug!(%scope, ?purpose, "discarding stale permission check");
                    return;
                }
                Self::handle_permission_checked(model, scope, purpose, &result, caps);
            }

            Event::PermissionRequested {
                scope,
                purpose,
                result,
            } => {
                if !model.is_current(scope) {
                    debug!(%scope, ?purpose, "discarding stale permission request");
                    return;
                }
                Self::handle_permission_requested(model, purpose, &result, caps);
            }
        }

        if let Err(violation) = model.check_invariants() {
            error!(%violation, event = event_name, "torch state inconsistent");
        }

        caps.render.render();
    }

    fn view(&self, model: &Model) -> ViewModel {
        ViewModel::from(model)
    }
}
