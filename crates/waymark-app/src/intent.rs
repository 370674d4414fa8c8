//! UI intents.
//!
//! The fixed action surface a consuming view layer drives. Rendering is
//! entirely decoupled from this crate: the UI observes [`crate::MapSnapshot`]
//! and feeds intents back.

/// Intents the UI sends to the root coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// The map view appeared; kick off the authorization flow.
    OnAppear,

    /// The "get current location" button was tapped.
    GetCurrentLocation,

    /// The user dismissed the active alert.
    DismissAlert,

    /// The user chose "open settings" from the permission alert.
    OpenSettings,
}
