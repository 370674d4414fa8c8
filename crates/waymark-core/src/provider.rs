//! Location provider capability trait.
//!
//! Decouples the coordinator layer from the platform location service.
//! Production implementations wrap the OS location manager; tests use a
//! scripted mock. The core consumes this trait, it never implements it.

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::{AuthorizationKind, AuthorizationStatus, Location, LocationError};

/// The OS-level location service consumed by the coordinator layer.
///
/// Commands (`request_authorization`, `start`, `stop`) are fire-and-forget:
/// their outcome is observed asynchronously through the event streams, not
/// through return values. `current_location` is the only request/response
/// call and resolves or fails exactly once.
///
/// # Event streams
///
/// Each `*_updates` accessor returns a fresh [`broadcast::Receiver`]
/// subscribed from the call onward. Streams are infinite: they never complete
/// on their own, and a new call resubscribes after a consuming task is torn
/// down. Within one stream events arrive in emission order; no ordering is
/// guaranteed across streams.
#[async_trait]
pub trait LocationProvider: Send + Sync + 'static {
    /// Prompt the user for location authorization.
    async fn request_authorization(&self, kind: AuthorizationKind);

    /// Current authorization status snapshot.
    fn authorization_status(&self) -> AuthorizationStatus;

    /// Begin continuous location updates.
    async fn start(&self);

    /// End continuous location updates.
    async fn stop(&self);

    /// One-shot request for the current location.
    async fn current_location(&self) -> Result<Location, LocationError>;

    /// Subscribe to authorization status changes.
    fn authorization_updates(&self) -> broadcast::Receiver<AuthorizationStatus>;

    /// Subscribe to continuous location fixes.
    fn location_updates(&self) -> broadcast::Receiver<Location>;

    /// Subscribe to provider errors.
    fn error_updates(&self) -> broadcast::Receiver<LocationError>;
}
