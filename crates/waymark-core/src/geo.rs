//! Geographic primitives: coordinates, location fixes, and camera regions.
//!
//! [`CameraRegion`] equality is approximate. Camera state round-trips through
//! the map view and comes back with floating-point noise; exact comparison
//! would produce endless update loops, so all region comparison goes through
//! [`CameraRegion::approx_eq`] with [`REGION_EPSILON`] tolerance.

/// Per-field tolerance for region comparison, in degrees.
pub const REGION_EPSILON: f64 = 1e-6;

/// A WGS84 geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A single location fix reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Position of the fix.
    pub coordinate: Coordinate,
    /// Fix time in milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
    /// Estimated horizontal accuracy radius in meters.
    pub horizontal_accuracy_m: f64,
}

impl Location {
    /// Create a fix at the given coordinate with zero timestamp and accuracy.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinate: Coordinate::new(latitude, longitude),
            timestamp_ms: 0,
            horizontal_accuracy_m: 0.0,
        }
    }

    /// Set the fix timestamp.
    #[must_use]
    pub fn with_timestamp_ms(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    /// Set the horizontal accuracy radius.
    #[must_use]
    pub fn with_accuracy_m(mut self, accuracy_m: f64) -> Self {
        self.horizontal_accuracy_m = accuracy_m;
        self
    }
}

/// The geographic center and zoom span the map display should show.
///
/// Always defined: [`CameraRegion::default`] is the sentinel region at
/// (0, 0) with a 0.05 degree span, used until a real fix arrives.
#[derive(Debug, Clone, Copy)]
pub struct CameraRegion {
    /// Center of the visible region.
    pub center: Coordinate,
    /// North-south extent of the visible region, in degrees.
    pub span_latitude_delta: f64,
    /// East-west extent of the visible region, in degrees.
    pub span_longitude_delta: f64,
}

impl CameraRegion {
    /// Span of the sentinel region, in degrees.
    pub const DEFAULT_SPAN: f64 = 0.05;

    /// Create a region with the given center and spans.
    pub fn new(center: Coordinate, span_latitude_delta: f64, span_longitude_delta: f64) -> Self {
        Self { center, span_latitude_delta, span_longitude_delta }
    }

    /// Create a square region centered on a coordinate.
    pub fn centered_on(center: Coordinate, span: f64) -> Self {
        Self::new(center, span, span)
    }

    /// Approximate equality with [`REGION_EPSILON`] tolerance per field.
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.center.latitude - other.center.latitude).abs() < REGION_EPSILON
            && (self.center.longitude - other.center.longitude).abs() < REGION_EPSILON
            && (self.span_latitude_delta - other.span_latitude_delta).abs() < REGION_EPSILON
            && (self.span_longitude_delta - other.span_longitude_delta).abs() < REGION_EPSILON
    }

    /// True if every field is a finite number.
    pub fn is_finite(&self) -> bool {
        self.center.latitude.is_finite()
            && self.center.longitude.is_finite()
            && self.span_latitude_delta.is_finite()
            && self.span_longitude_delta.is_finite()
    }
}

/// Region equality is the approximate comparison: camera state round-trips
/// through the map view with floating-point noise, and exact comparison would
/// defeat render-skipping.
impl PartialEq for CameraRegion {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Default for CameraRegion {
    fn default() -> Self {
        Self::centered_on(Coordinate::new(0.0, 0.0), Self::DEFAULT_SPAN)
    }
}
