//! Runtime events.
//!
//! This module defines [`AppEvent`], the inputs that drive the
//! [`crate::MapApp`] state machine. Events originate from the runtime:
//! provider snapshot reads, the long-lived event streams, and one-shot
//! location requests.

use waymark_core::{AuthorizationStatus, Location, LocationError};

/// Events processed by the root coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Authorization snapshot read during the on-appear flow.
    InitialAuthorization(AuthorizationStatus),

    /// Authorization change delivered by the provider stream.
    AuthorizationChanged(AuthorizationStatus),

    /// Continuous location fix delivered by the provider stream.
    LocationUpdated(Location),

    /// Error delivered by the provider error stream.
    UpdateFailed(LocationError),

    /// Result of a one-shot location request.
    SingleLocation(Result<Location, LocationError>),
}
