//! Map camera coordinator.
//!
//! Owns the region the map should display. Pure state: the only operation is
//! an explicit "move to region", and the coordinator reports whether the
//! assignment actually moved the camera so render-diffing consumers can skip
//! epsilon-level noise.

use waymark_core::CameraRegion;

/// State machine for the map camera region.
#[derive(Debug, Clone)]
pub struct CameraCoordinator {
    region: CameraRegion,
}

impl CameraCoordinator {
    /// Create a coordinator showing the given initial region.
    pub fn new(initial: CameraRegion) -> Self {
        Self { region: initial }
    }

    /// Region the map should display. Always defined.
    pub fn region(&self) -> CameraRegion {
        self.region
    }

    /// Replace the current region.
    ///
    /// Returns `true` if the new region differs beyond the comparison
    /// tolerance. The assignment happens either way.
    pub fn update_region(&mut self, region: CameraRegion) -> bool {
        let moved = !self.region.approx_eq(&region);
        self.region = region;
        moved
    }
}

impl Default for CameraCoordinator {
    fn default() -> Self {
        Self::new(CameraRegion::default())
    }
}
