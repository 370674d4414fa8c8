//! Application layer for Waymark
//!
//! Pure coordinator state machines and a generic async runtime for the
//! location feature, enabling deterministic simulation testing with the same
//! code that runs in production.
//!
//! # Components
//!
//! - [`MapApp`]: root coordinator composing authorization, tracking, and
//!   camera state machines
//! - [`Intent`] / [`AppEvent`] / [`AppAction`]: the inputs and outputs of the
//!   state machine
//! - [`Runtime`]: async orchestration loop executing actions against a
//!   [`waymark_core::LocationProvider`]

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod authorization;
mod camera;
mod event;
mod intent;
mod map;
mod runtime;
mod state;
mod tracking;

pub use action::AppAction;
pub use authorization::AuthorizationCoordinator;
pub use camera::CameraCoordinator;
pub use event::AppEvent;
pub use intent::Intent;
pub use map::MapApp;
pub use runtime::{Runtime, RuntimeHandle};
pub use state::{Destination, MapConfig, MapSnapshot};
pub use tracking::TrackingCoordinator;
