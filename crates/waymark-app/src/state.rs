//! Observable application state types.
//!
//! These structures serve as the "view model" for a consuming UI: the subset
//! of coordinator state necessary for rendering, without exposing the
//! provider plumbing underneath.

use waymark_core::{AuthorizationKind, AuthorizationStatus, CameraRegion, Location};

/// Continuous-tracking state owned by the tracking coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackingState {
    /// Most recent known fix. `None` until the first update arrives.
    pub current_location: Option<Location>,
    /// Whether continuous updates are running.
    pub is_tracking: bool,
}

/// The active full-screen overlay. At most one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Location permission was denied or restricted; offers "open settings".
    PermissionDenied,
    /// A location request failed with the given user-facing message.
    Error(String),
}

/// Read-only snapshot of the full feature state, published after every
/// processed intent or event.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSnapshot {
    /// Current authorization status.
    pub authorization: AuthorizationStatus,
    /// Whether continuous updates are running.
    pub is_tracking: bool,
    /// Most recent known fix.
    pub current_location: Option<Location>,
    /// Region the map should display.
    pub camera_region: CameraRegion,
    /// Active alert overlay, if any.
    pub destination: Option<Destination>,
}

/// Configuration for the map feature.
#[derive(Debug, Clone, Copy)]
pub struct MapConfig {
    /// Authorization level requested when status is not determined.
    pub authorization_kind: AuthorizationKind,
    /// Camera span applied when recentering on a fix, in degrees.
    pub locate_span_degrees: f64,
    /// Region shown before any fix arrives.
    pub initial_region: CameraRegion,
}

impl MapConfig {
    /// Span used by the "get current location" flow, in degrees.
    pub const LOCATE_SPAN: f64 = 0.03;
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            authorization_kind: AuthorizationKind::Always,
            locate_span_degrees: Self::LOCATE_SPAN,
            initial_region: CameraRegion::default(),
        }
    }
}
