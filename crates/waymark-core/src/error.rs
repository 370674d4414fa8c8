//! Error taxonomy for location operations.
//!
//! Provider errors are delivered as values through event channels and never
//! cross coordinator boundaries as panics or early returns. No variant is
//! fatal: the worst outcome is a stalled location feature with a dismissible
//! explanation and, for permission-class errors, an actionable remedy.

use thiserror::Error;

/// Errors reported by a location provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// Location services are disabled device-wide.
    #[error("location services are disabled")]
    ServiceDisabled,

    /// The app is not authorized to access location data.
    #[error("location access is not authorized")]
    Unauthorized,

    /// A location request failed with a provider-reported reason.
    #[error("failed to get location: {0}")]
    RequestFailed(String),

    /// The provider reported an error this crate does not model.
    #[error("unknown location error")]
    Unknown,
}

impl LocationError {
    /// True if recovering requires a permission change in Settings.
    ///
    /// Transient request failures are retryable in-app; permission-class
    /// errors are not.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::ServiceDisabled | Self::Unauthorized)
    }

    /// User-facing description suitable for an alert body.
    pub fn user_message(&self) -> String {
        match self {
            Self::ServiceDisabled => {
                "Location services are disabled. Please enable them in Settings.".to_string()
            },
            Self::Unauthorized => {
                "Location access is not authorized. Please allow access in Settings.".to_string()
            },
            Self::RequestFailed(_) => "Failed to get location. Please try again.".to_string(),
            Self::Unknown => "An unknown error occurred while accessing location.".to_string(),
        }
    }

    /// Actionable remedy for the user. `None` when retrying is the remedy.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ServiceDisabled => {
                Some("Go to Settings > Privacy > Location Services and turn them on.")
            },
            Self::Unauthorized => Some(
                "Go to Settings > Privacy > Location Services and allow access for this app.",
            ),
            Self::RequestFailed(_) | Self::Unknown => None,
        }
    }
}
