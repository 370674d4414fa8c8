//! Invariant checking for the location feature.
//!
//! Invariants are properties that must hold after every processed intent or
//! event, across all execution paths. Property tests feed arbitrary event
//! sequences through the state machine and check the registry after each
//! step.

use waymark_app::MapSnapshot;

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Invariant violation with context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Name of the violated invariant.
    pub invariant: &'static str,
    /// Description of what went wrong.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// A property checked against the feature state.
pub trait Invariant: Send + Sync {
    /// Invariant name for error reporting.
    fn name(&self) -> &'static str;

    /// Check the invariant against a state snapshot.
    fn check(&self, snapshot: &MapSnapshot) -> InvariantResult;
}

/// Continuous tracking must never run while authorization is blocked.
pub struct TrackingNeverBlocked;

impl Invariant for TrackingNeverBlocked {
    fn name(&self) -> &'static str {
        "tracking_never_blocked"
    }

    fn check(&self, snapshot: &MapSnapshot) -> InvariantResult {
        if snapshot.is_tracking && snapshot.authorization.is_blocked() {
            return Err(Violation {
                invariant: self.name(),
                message: format!("tracking while authorization is {:?}", snapshot.authorization),
            });
        }
        Ok(())
    }
}

/// The camera region is always defined and finite.
pub struct CameraAlwaysFinite;

impl Invariant for CameraAlwaysFinite {
    fn name(&self) -> &'static str {
        "camera_always_finite"
    }

    fn check(&self, snapshot: &MapSnapshot) -> InvariantResult {
        if !snapshot.camera_region.is_finite() {
            return Err(Violation {
                invariant: self.name(),
                message: format!("non-finite camera region {:?}", snapshot.camera_region),
            });
        }
        Ok(())
    }
}

/// Registry of invariants to check together.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Registry with the standard feature invariants.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(TrackingNeverBlocked));
        registry.register(Box::new(CameraAlwaysFinite));
        registry
    }

    /// Add an invariant.
    pub fn register(&mut self, invariant: Box<dyn Invariant>) {
        self.invariants.push(invariant);
    }

    /// Check every registered invariant, collecting all violations.
    pub fn check_all(&self, snapshot: &MapSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<Violation> = self
            .invariants
            .iter()
            .filter_map(|invariant| invariant.check(snapshot).err())
            .collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}
