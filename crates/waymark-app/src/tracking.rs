//! Location update coordinator.
//!
//! Tracks the on/off state of continuous updates and the most recent known
//! fix. Start/stop are idempotent: each transition issues exactly one
//! provider command, and repeated calls in the same state are no-ops.
//! Transient errors are logged here and surfaced to the root coordinator
//! through the merged event stream, never stored.

use waymark_core::{Location, LocationError};

use crate::AppAction;
use crate::state::TrackingState;

/// State machine for continuous location updates.
#[derive(Debug, Clone, Default)]
pub struct TrackingCoordinator {
    state: TrackingState,
    is_listening: bool,
}

impl TrackingCoordinator {
    /// Create a coordinator with tracking off and no known fix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether continuous updates are running.
    pub fn is_tracking(&self) -> bool {
        self.state.is_tracking
    }

    /// Most recent known fix.
    pub fn current_location(&self) -> Option<Location> {
        self.state.current_location
    }

    /// Begin continuous updates. No-op if already tracking.
    pub fn start(&mut self) -> Vec<AppAction> {
        if self.state.is_tracking {
            return vec![];
        }
        self.state.is_tracking = true;
        vec![AppAction::StartUpdates]
    }

    /// End continuous updates. No-op if not tracking.
    pub fn stop(&mut self) -> Vec<AppAction> {
        if !self.state.is_tracking {
            return vec![];
        }
        self.state.is_tracking = false;
        vec![AppAction::StopUpdates]
    }

    /// Subscribe to the provider's location and error streams. No-op if the
    /// listeners are already running.
    pub fn listen(&mut self) -> Vec<AppAction> {
        if self.is_listening {
            return vec![];
        }
        self.is_listening = true;
        vec![AppAction::ListenUpdates]
    }

    /// Store a fix from either the continuous stream or a one-shot request.
    pub fn location_updated(&mut self, location: Location) {
        tracing::debug!(
            latitude = location.coordinate.latitude,
            longitude = location.coordinate.longitude,
            "location updated"
        );
        self.state.current_location = Some(location);
    }

    /// Log a stream error. State is left unchanged; the root coordinator
    /// decides whether the error reaches the user.
    pub fn update_failed(&self, error: &LocationError) {
        tracing::warn!(%error, "location update failed");
    }
}
