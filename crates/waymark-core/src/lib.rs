//! Core domain types for Waymark
//!
//! Geographic primitives, the OS authorization model, the location error
//! taxonomy, and the capability traits the coordinator layer consumes. This
//! crate contains no I/O: platform integrations implement
//! [`LocationProvider`] and [`SettingsGateway`], and the application layer
//! drives them.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod authorization;
mod error;
mod geo;
mod provider;
mod settings;

pub use authorization::{AuthorizationKind, AuthorizationStatus};
pub use error::LocationError;
pub use geo::{CameraRegion, Coordinate, Location, REGION_EPSILON};
pub use provider::LocationProvider;
pub use settings::SettingsGateway;
