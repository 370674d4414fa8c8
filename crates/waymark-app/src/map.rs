//! Root coordinator.
//!
//! [`MapApp`] composes the authorization, tracking, and camera coordinators
//! and reacts to cross-cutting events: a blocked permission raises the
//! permission alert, an authorized transition starts the update listeners and
//! continuous tracking, and the explicit "get current location" flow moves
//! the camera.
//!
//! This is a pure state machine: it consumes [`Intent`]s and [`AppEvent`]s
//! and produces [`AppAction`] instructions for the runtime to execute. No I/O
//! dependencies, fully testable in simulation.

use waymark_core::{CameraRegion, Location};

use crate::{
    AppAction, AppEvent, AuthorizationCoordinator, CameraCoordinator, Destination, Intent,
    MapConfig, MapSnapshot, TrackingCoordinator,
};

/// Root coordinator for the location map feature.
#[derive(Debug, Clone)]
pub struct MapApp {
    config: MapConfig,
    authorization: AuthorizationCoordinator,
    tracking: TrackingCoordinator,
    camera: CameraCoordinator,
    destination: Option<Destination>,
}

impl MapApp {
    /// Create a feature with the given configuration.
    pub fn new(config: MapConfig) -> Self {
        Self {
            config,
            authorization: AuthorizationCoordinator::new(),
            tracking: TrackingCoordinator::new(),
            camera: CameraCoordinator::new(config.initial_region),
            destination: None,
        }
    }

    /// Route a UI intent and return the resulting actions.
    pub fn apply(&mut self, intent: Intent) -> Vec<AppAction> {
        match intent {
            Intent::OnAppear => self.on_appear(),
            Intent::GetCurrentLocation => self.get_current_location(),
            Intent::DismissAlert => {
                self.dismiss_alert();
                vec![]
            },
            Intent::OpenSettings => self.open_settings(),
        }
    }

    /// Entry point: read the authorization snapshot.
    pub fn on_appear(&self) -> Vec<AppAction> {
        vec![AppAction::CheckAuthorization]
    }

    /// The "get current location" button flow.
    ///
    /// Guarded: a no-op unless authorized. A cached fix is reused instead of
    /// firing a fresh provider request.
    pub fn get_current_location(&mut self) -> Vec<AppAction> {
        if !self.authorization.status().is_authorized() {
            return vec![];
        }

        match self.tracking.current_location() {
            Some(location) => {
                self.move_camera_to(location);
                vec![]
            },
            None => vec![AppAction::RequestLocation],
        }
    }

    /// Clear the active alert.
    pub fn dismiss_alert(&mut self) {
        self.destination = None;
    }

    /// Dismiss the permission alert via its "open settings" action.
    pub fn open_settings(&mut self) -> Vec<AppAction> {
        self.destination = None;
        vec![AppAction::OpenSettings]
    }

    /// Process a runtime event and return the resulting actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::InitialAuthorization(status) => {
                let mut actions =
                    self.authorization.check_initial_status(status, self.config.authorization_kind);
                if status.is_blocked() {
                    // React now rather than waiting for an OS callback.
                    self.destination = Some(Destination::PermissionDenied);
                    actions.extend(self.tracking.stop());
                } else if status.is_authorized() {
                    // Already granted: bring up the listeners and tracking
                    // without waiting for an authorization event.
                    actions.extend(self.tracking.listen());
                    actions.extend(self.tracking.start());
                }
                actions
            },
            AppEvent::AuthorizationChanged(status) => {
                self.authorization.status_changed(status);
                if status.is_blocked() {
                    self.destination = Some(Destination::PermissionDenied);
                    // Tracking must never run while blocked.
                    self.tracking.stop()
                } else if status.is_authorized() {
                    // Listeners first so no update is missed.
                    let mut actions = self.tracking.listen();
                    actions.extend(self.tracking.start());
                    actions
                } else {
                    vec![]
                }
            },
            AppEvent::LocationUpdated(location) => {
                // Continuous updates refresh the cache only; recentering is
                // reserved for the explicit button flow.
                self.tracking.location_updated(location);
                vec![]
            },
            AppEvent::UpdateFailed(error) => {
                self.tracking.update_failed(&error);
                self.destination = Some(Destination::Error(error.user_message()));
                vec![]
            },
            AppEvent::SingleLocation(Ok(location)) => {
                self.tracking.location_updated(location);
                self.move_camera_to(location);
                vec![]
            },
            AppEvent::SingleLocation(Err(error)) => {
                tracing::warn!(%error, "single location request failed");
                self.destination = Some(Destination::Error(error.user_message()));
                vec![]
            },
        }
    }

    /// Read-only snapshot for the UI.
    pub fn snapshot(&self) -> MapSnapshot {
        MapSnapshot {
            authorization: self.authorization.status(),
            is_tracking: self.tracking.is_tracking(),
            current_location: self.tracking.current_location(),
            camera_region: self.camera.region(),
            destination: self.destination.clone(),
        }
    }

    /// Region the map should display.
    pub fn camera_region(&self) -> CameraRegion {
        self.camera.region()
    }

    /// Active alert overlay, if any.
    pub fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }

    fn move_camera_to(&mut self, location: Location) {
        let region =
            CameraRegion::centered_on(location.coordinate, self.config.locate_span_degrees);
        if self.camera.update_region(region) {
            tracing::debug!(
                latitude = location.coordinate.latitude,
                longitude = location.coordinate.longitude,
                "camera recentered"
            );
        }
    }
}

impl Default for MapApp {
    fn default() -> Self {
        Self::new(MapConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use waymark_core::{AuthorizationKind, AuthorizationStatus, Coordinate, LocationError};

    use super::*;

    fn authorized_app() -> MapApp {
        let mut app = MapApp::default();
        let _ = app.handle(AppEvent::InitialAuthorization(AuthorizationStatus::AuthorizedWhenInUse));
        app
    }

    #[test]
    fn on_appear_checks_authorization() {
        let mut app = MapApp::default();
        assert_eq!(app.apply(Intent::OnAppear), vec![AppAction::CheckAuthorization]);
    }

    #[test]
    fn undetermined_status_listens_then_requests() {
        let mut app = MapApp::default();
        let actions = app.handle(AppEvent::InitialAuthorization(AuthorizationStatus::NotDetermined));

        assert_eq!(actions, vec![
            AppAction::ListenAuthorization,
            AppAction::RequestAuthorization { kind: AuthorizationKind::Always },
        ]);
        assert!(app.destination().is_none());
    }

    #[test]
    fn blocked_initial_status_raises_alert_synchronously() {
        let mut app = MapApp::default();
        let actions = app.handle(AppEvent::InitialAuthorization(AuthorizationStatus::Denied));

        assert_eq!(actions, vec![AppAction::ListenAuthorization]);
        assert_eq!(app.destination(), Some(&Destination::PermissionDenied));
    }

    #[test]
    fn authorized_initial_status_starts_tracking() {
        let mut app = MapApp::default();
        let actions =
            app.handle(AppEvent::InitialAuthorization(AuthorizationStatus::AuthorizedWhenInUse));

        assert_eq!(actions, vec![
            AppAction::ListenAuthorization,
            AppAction::ListenUpdates,
            AppAction::StartUpdates,
        ]);
        assert!(app.snapshot().is_tracking);
        assert!(app.destination().is_none());
    }

    #[test]
    fn blocked_initial_status_stops_running_tracking() {
        // Re-appear after the user revoked access in Settings.
        let mut app = MapApp::default();
        let _ = app.handle(AppEvent::AuthorizationChanged(AuthorizationStatus::AuthorizedAlways));
        assert!(app.snapshot().is_tracking);

        let actions = app.handle(AppEvent::InitialAuthorization(AuthorizationStatus::Denied));

        assert_eq!(actions, vec![AppAction::ListenAuthorization, AppAction::StopUpdates]);
        assert!(!app.snapshot().is_tracking);
        assert_eq!(app.destination(), Some(&Destination::PermissionDenied));
    }

    #[test]
    fn authorized_transition_listens_before_tracking() {
        let mut app = MapApp::default();
        let actions =
            app.handle(AppEvent::AuthorizationChanged(AuthorizationStatus::AuthorizedAlways));

        assert_eq!(actions, vec![AppAction::ListenUpdates, AppAction::StartUpdates]);

        // A second authorized event must not issue another start command.
        let actions =
            app.handle(AppEvent::AuthorizationChanged(AuthorizationStatus::AuthorizedWhenInUse));
        assert_eq!(actions, vec![]);
    }

    #[test]
    fn denied_transition_stops_tracking() {
        let mut app = MapApp::default();
        let _ = app.handle(AppEvent::AuthorizationChanged(AuthorizationStatus::AuthorizedAlways));
        assert!(app.snapshot().is_tracking);

        let actions = app.handle(AppEvent::AuthorizationChanged(AuthorizationStatus::Denied));

        assert_eq!(actions, vec![AppAction::StopUpdates]);
        assert!(!app.snapshot().is_tracking);
        assert_eq!(app.destination(), Some(&Destination::PermissionDenied));
    }

    #[test]
    fn locate_button_is_noop_while_denied() {
        let mut app = MapApp::default();
        let _ = app.handle(AppEvent::InitialAuthorization(AuthorizationStatus::Denied));
        let before = app.snapshot();

        let actions = app.apply(Intent::GetCurrentLocation);

        assert_eq!(actions, vec![]);
        assert_eq!(app.snapshot(), before);
    }

    #[test]
    fn locate_button_requests_when_no_cached_fix() {
        let mut app = authorized_app();
        let actions = app.apply(Intent::GetCurrentLocation);

        assert_eq!(actions, vec![AppAction::RequestLocation]);
    }

    #[test]
    fn locate_button_reuses_cached_fix() {
        let mut app = authorized_app();
        let _ = app.handle(AppEvent::LocationUpdated(Location::new(48.4647, 35.0462)));

        let actions = app.apply(Intent::GetCurrentLocation);

        assert_eq!(actions, vec![]);
        let expected = CameraRegion::centered_on(Coordinate::new(48.4647, 35.0462), 0.03);
        assert!(app.camera_region().approx_eq(&expected));
    }

    #[test]
    fn single_location_success_moves_camera() {
        let mut app = authorized_app();
        let _ = app.handle(AppEvent::SingleLocation(Ok(Location::new(48.4647, 35.0462))));

        let expected = CameraRegion::centered_on(Coordinate::new(48.4647, 35.0462), 0.03);
        assert!(app.camera_region().approx_eq(&expected));
        assert!(app.destination().is_none());
        // The one-shot result is cached for the next button tap.
        assert_eq!(app.snapshot().current_location, Some(Location::new(48.4647, 35.0462)));
    }

    #[test]
    fn single_location_failure_raises_error_alert() {
        let mut app = authorized_app();
        let before = app.camera_region();

        let error = LocationError::RequestFailed("gps timeout".into());
        let _ = app.handle(AppEvent::SingleLocation(Err(error.clone())));

        // The alert carries the user-facing copy, not the raw error.
        assert_eq!(app.destination(), Some(&Destination::Error(error.user_message())));
        assert!(app.camera_region().approx_eq(&before));
    }

    #[test]
    fn continuous_update_does_not_recenter() {
        let mut app = authorized_app();
        let before = app.camera_region();

        let _ = app.handle(AppEvent::LocationUpdated(Location::new(48.4647, 35.0462)));

        assert!(app.camera_region().approx_eq(&before));
        assert_eq!(app.snapshot().current_location, Some(Location::new(48.4647, 35.0462)));
    }

    #[test]
    fn stream_error_raises_dismissible_alert() {
        let mut app = authorized_app();
        let _ = app.handle(AppEvent::UpdateFailed(LocationError::Unknown));

        assert!(matches!(app.destination(), Some(Destination::Error(_))));

        app.dismiss_alert();
        assert!(app.destination().is_none());
    }

    #[test]
    fn open_settings_clears_alert_and_delegates() {
        let mut app = MapApp::default();
        let _ = app.handle(AppEvent::InitialAuthorization(AuthorizationStatus::Restricted));

        let actions = app.apply(Intent::OpenSettings);

        assert_eq!(actions, vec![AppAction::OpenSettings]);
        assert!(app.destination().is_none());
    }
}
