//! System settings collaborator.

use async_trait::async_trait;

/// Opens the system settings page for this app.
///
/// The only app-initiated side effect outside the location provider boundary:
/// the remedy offered when authorization is denied or restricted.
#[async_trait]
pub trait SettingsGateway: Send + Sync + 'static {
    /// Open the app's settings page.
    async fn open_settings(&self);
}
