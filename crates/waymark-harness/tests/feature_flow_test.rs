//! End-to-end tests for the location feature over a scripted provider.
//!
//! Each test drives the same state machine the production runtime runs,
//! through the deterministic [`SimFeature`] interpreter, and asserts both the
//! resulting state and the provider command log.

use waymark_app::{AppEvent, Destination, Intent};
use waymark_core::{
    AuthorizationKind, AuthorizationStatus, CameraRegion, Coordinate, Location, LocationError,
};
use waymark_harness::{MockProvider, ProviderCall, SimFeature};

fn dnipro() -> Location {
    Location::new(48.4647, 35.0462)
}

fn dnipro_region() -> CameraRegion {
    CameraRegion::centered_on(Coordinate::new(48.4647, 35.0462), 0.03)
}

#[tokio::test]
async fn authorized_stream_fix_then_button_tap_recenters() {
    let provider = MockProvider::new();
    provider.set_status(AuthorizationStatus::AuthorizedWhenInUse);
    let mut sim = SimFeature::new(provider);

    sim.apply(Intent::OnAppear).await;

    // Already authorized: listeners and tracking come up on appear, without
    // waiting for an authorization event.
    assert!(sim.snapshot().is_tracking);
    assert_eq!(sim.provider().take_calls(), vec![
        ProviderCall::AuthorizationStatus,
        ProviderCall::SubscribeAuthorization,
        ProviderCall::SubscribeLocations,
        ProviderCall::SubscribeErrors,
        ProviderCall::Start,
    ]);

    // One fix arrives on the continuous stream; the camera must not move yet.
    sim.inject(AppEvent::LocationUpdated(dnipro())).await;
    assert!(sim.snapshot().camera_region.approx_eq(&CameraRegion::default()));

    sim.apply(Intent::GetCurrentLocation).await;

    let snapshot = sim.snapshot();
    assert!(snapshot.camera_region.approx_eq(&dnipro_region()));
    assert_eq!(snapshot.destination, None);
    // The cached fix was reused; no one-shot request went to the provider.
    assert!(!sim.provider().calls().contains(&ProviderCall::CurrentLocation));
}

#[tokio::test]
async fn undetermined_flow_listens_before_requesting() {
    let mut sim = SimFeature::new(MockProvider::new());

    sim.apply(Intent::OnAppear).await;

    assert_eq!(sim.provider().take_calls(), vec![
        ProviderCall::AuthorizationStatus,
        ProviderCall::SubscribeAuthorization,
        ProviderCall::RequestAuthorization(AuthorizationKind::Always),
    ]);

    // The user grants access: update listeners come up before tracking starts.
    sim.inject(AppEvent::AuthorizationChanged(AuthorizationStatus::AuthorizedAlways)).await;

    assert_eq!(sim.provider().take_calls(), vec![
        ProviderCall::SubscribeLocations,
        ProviderCall::SubscribeErrors,
        ProviderCall::Start,
    ]);
    assert!(sim.snapshot().is_tracking);
}

#[tokio::test]
async fn one_shot_success_recenters_and_caches() {
    let provider = MockProvider::new();
    provider.set_status(AuthorizationStatus::AuthorizedAlways);
    provider.push_single_result(Ok(dnipro()));
    let mut sim = SimFeature::new(provider);

    sim.apply(Intent::OnAppear).await;
    sim.apply(Intent::GetCurrentLocation).await;

    let snapshot = sim.snapshot();
    assert!(snapshot.camera_region.approx_eq(&dnipro_region()));
    assert_eq!(snapshot.current_location, Some(dnipro()));
    assert!(sim.provider().calls().contains(&ProviderCall::CurrentLocation));
}

#[tokio::test]
async fn one_shot_failure_shows_error_and_keeps_camera() {
    let provider = MockProvider::new();
    provider.set_status(AuthorizationStatus::AuthorizedWhenInUse);
    provider.push_single_result(Err(LocationError::RequestFailed(
        "gps hardware unavailable".to_string(),
    )));
    let mut sim = SimFeature::new(provider);

    sim.apply(Intent::OnAppear).await;
    let camera_before = sim.snapshot().camera_region;

    sim.apply(Intent::GetCurrentLocation).await;

    let snapshot = sim.snapshot();
    match snapshot.destination {
        Some(Destination::Error(message)) => assert!(message.contains("Failed to get location")),
        other => panic!("expected error alert, got {other:?}"),
    }
    assert!(snapshot.camera_region.approx_eq(&camera_before));
}

#[tokio::test]
async fn denied_on_appear_alerts_without_waiting_for_callback() {
    let provider = MockProvider::new();
    provider.set_status(AuthorizationStatus::Denied);
    let mut sim = SimFeature::new(provider);

    sim.apply(Intent::OnAppear).await;

    assert_eq!(sim.snapshot().destination, Some(Destination::PermissionDenied));
    // Only the snapshot read and the listener subscription; no prompt.
    assert_eq!(sim.provider().take_calls(), vec![
        ProviderCall::AuthorizationStatus,
        ProviderCall::SubscribeAuthorization,
    ]);
}

#[tokio::test]
async fn denied_button_tap_is_inert() {
    let provider = MockProvider::new();
    provider.set_status(AuthorizationStatus::Denied);
    let mut sim = SimFeature::new(provider);

    sim.apply(Intent::OnAppear).await;
    let before = sim.snapshot();
    let _ = sim.provider().take_calls();

    sim.apply(Intent::GetCurrentLocation).await;

    assert_eq!(sim.snapshot(), before);
    assert_eq!(sim.provider().calls(), vec![]);
}

#[tokio::test]
async fn open_settings_clears_alert_and_opens_once() {
    let provider = MockProvider::new();
    provider.set_status(AuthorizationStatus::Restricted);
    let mut sim = SimFeature::new(provider);

    sim.apply(Intent::OnAppear).await;
    assert_eq!(sim.snapshot().destination, Some(Destination::PermissionDenied));

    sim.apply(Intent::OpenSettings).await;

    assert_eq!(sim.snapshot().destination, None);
    assert_eq!(sim.settings_opened(), 1);
}

#[tokio::test]
async fn stream_error_alert_is_dismissible_and_retryable() {
    let provider = MockProvider::new();
    provider.set_status(AuthorizationStatus::AuthorizedWhenInUse);
    let mut sim = SimFeature::new(provider);

    sim.apply(Intent::OnAppear).await;
    sim.inject(AppEvent::AuthorizationChanged(AuthorizationStatus::AuthorizedWhenInUse)).await;
    assert!(sim.snapshot().is_tracking);

    sim.inject(AppEvent::UpdateFailed(LocationError::Unknown)).await;
    assert!(matches!(sim.snapshot().destination, Some(Destination::Error(_))));
    // Errors are never fatal: tracking keeps running.
    assert!(sim.snapshot().is_tracking);

    sim.apply(Intent::DismissAlert).await;
    assert_eq!(sim.snapshot().destination, None);

    // The next tap issues exactly one fresh attempt.
    sim.provider().push_single_result(Ok(dnipro()));
    let _ = sim.provider().take_calls();
    sim.apply(Intent::GetCurrentLocation).await;
    assert_eq!(sim.provider().calls(), vec![ProviderCall::CurrentLocation]);
    assert!(sim.snapshot().camera_region.approx_eq(&dnipro_region()));
}
