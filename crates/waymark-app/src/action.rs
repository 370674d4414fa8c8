//! Provider-facing side effects.
//!
//! This module defines the [`AppAction`] enum, the instructions produced by
//! the [`crate::MapApp`] state machine for the runtime to execute. The state
//! machine itself performs no I/O.

use waymark_core::AuthorizationKind;

/// Actions produced by the root coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Read the provider's authorization snapshot and feed it back as
    /// [`crate::AppEvent::InitialAuthorization`].
    CheckAuthorization,

    /// Prompt the user for location authorization.
    RequestAuthorization {
        /// Authorization level to request.
        kind: AuthorizationKind,
    },

    /// Start the long-lived authorization-change listener.
    ListenAuthorization,

    /// Start the long-lived location-update and error listeners.
    ListenUpdates,

    /// Command the provider to begin continuous updates.
    StartUpdates,

    /// Command the provider to end continuous updates.
    StopUpdates,

    /// Issue a one-shot location request.
    RequestLocation,

    /// Open the system settings page for this app.
    OpenSettings,
}
