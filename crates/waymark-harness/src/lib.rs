//! Deterministic test harness for the Waymark location feature.
//!
//! A scripted [`MockProvider`] with a recorded command log, a synchronous
//! [`SimFeature`] driver that interprets actions without background tasks,
//! and invariant checks for property-based testing.
//!
//! # Invariant Testing
//!
//! The `invariants` module verifies behavioral properties across all
//! execution paths rather than specific scenarios. Use
//! [`InvariantRegistry::standard()`] for the common feature invariants.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod invariants;
pub mod mock_provider;
pub mod sim;

pub use invariants::{
    CameraAlwaysFinite, Invariant, InvariantRegistry, InvariantResult, TrackingNeverBlocked,
    Violation,
};
pub use mock_provider::{MockProvider, MockSettings, ProviderCall};
pub use sim::SimFeature;
