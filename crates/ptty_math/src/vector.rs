// Normalization policy and reflection helpers for Vec3
//
// glam already provides add/sub/scale/divide/dot/length as operators and
// methods. What it does not pin down is what the tracer wants from a
// zero-length normalize, so that lives here.

use crate::Vec3;

/// Extension trait for Vec3 with the tracer's numeric policies.
pub trait Vec3Ext {
    /// Unit vector in the same direction.
    ///
    /// A zero-length or non-finite vector yields `Vec3::ZERO` instead of NaNs.
    fn unit(self) -> Vec3;

    /// Unit vector in the same direction, or `None` when the length is zero
    /// or not finite.
    fn try_unit(self) -> Option<Vec3>;

    /// Mirror this direction about a surface normal: `d - 2 (d . n) n`.
    fn mirror(self, normal: Vec3) -> Vec3;
}

impl Vec3Ext for Vec3 {
    fn unit(self) -> Vec3 {
        self.try_unit().unwrap_or(Vec3::ZERO)
    }

    fn try_unit(self) -> Option<Vec3> {
        let length = self.length();
        if length > 0.0 && length.is_finite() {
            Some(self / length)
        } else {
            None
        }
    }

    fn mirror(self, normal: Vec3) -> Vec3 {
        self - normal * (2.0 * self.dot(normal))
    }
}
