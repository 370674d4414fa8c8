//! OS location authorization model.

/// The OS-reported permission level governing location access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationStatus {
    /// The user has not yet been asked.
    NotDetermined,
    /// Access granted while the app is in use.
    AuthorizedWhenInUse,
    /// Access granted at all times.
    AuthorizedAlways,
    /// The user explicitly denied access.
    Denied,
    /// Access is blocked by device policy (parental controls, MDM).
    Restricted,
    /// The platform reported a status this crate does not model.
    Unknown,
}

impl AuthorizationStatus {
    /// True if location data may be accessed.
    pub fn is_authorized(self) -> bool {
        matches!(self, Self::AuthorizedWhenInUse | Self::AuthorizedAlways)
    }

    /// True if access is blocked and only a Settings change can recover.
    ///
    /// `NotDetermined` is not blocked: a permission prompt can still resolve
    /// it without leaving the app.
    pub fn is_blocked(self) -> bool {
        matches!(self, Self::Denied | Self::Restricted)
    }
}

/// Which authorization level to request from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationKind {
    /// Request while-in-use access.
    WhenInUse,
    /// Request always-on access.
    Always,
}
