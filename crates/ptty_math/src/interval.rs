/// How far behind the origin a root may fall and still count as a hit.
///
/// A bounce ray starts on the point it just hit, which is only on the surface
/// up to rounding. Without this slack an inward bounce would miss its own
/// sphere about half of the time.
pub const SURFACE_TOLERANCE: f64 = 1e-6;

/// A closed range of ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Everything in front of the ray origin, including a ray that starts on
    /// a surface up to `SURFACE_TOLERANCE`.
    pub const FORWARD: Interval = Interval {
        min: -SURFACE_TOLERANCE,
        max: f64::INFINITY,
    };
}
