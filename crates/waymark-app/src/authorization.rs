//! Authorization coordinator.
//!
//! Tracks the current permission state, drives the initial permission-request
//! flow, and hands permission changes to the root coordinator.

use waymark_core::{AuthorizationKind, AuthorizationStatus};

use crate::AppAction;

/// State machine for OS location authorization.
#[derive(Debug, Clone)]
pub struct AuthorizationCoordinator {
    status: AuthorizationStatus,
}

impl Default for AuthorizationCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthorizationCoordinator {
    /// Create a coordinator with no determined status.
    pub fn new() -> Self {
        Self { status: AuthorizationStatus::NotDetermined }
    }

    /// Current authorization status.
    pub fn status(&self) -> AuthorizationStatus {
        self.status
    }

    /// Process the initial status snapshot read on appear.
    ///
    /// Always starts the authorization listener. If the status is not yet
    /// determined, the permission prompt is requested after the listener is
    /// in place so the resulting status change is observed. Blocked statuses
    /// are stored here so the root coordinator can react synchronously
    /// without waiting for an OS callback.
    pub fn check_initial_status(
        &mut self,
        status: AuthorizationStatus,
        kind: AuthorizationKind,
    ) -> Vec<AppAction> {
        self.status_changed(status);

        match status {
            AuthorizationStatus::NotDetermined => {
                // Listener first: the prompt's outcome arrives on the stream.
                vec![AppAction::ListenAuthorization, AppAction::RequestAuthorization { kind }]
            },
            _ => vec![AppAction::ListenAuthorization],
        }
    }

    /// Sole mutator of the authorization status.
    pub fn status_changed(&mut self, status: AuthorizationStatus) {
        if self.status != status {
            tracing::debug!(?status, "authorization status changed");
        }
        self.status = status;
    }
}
