use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Absolute per-component tolerance used by [`Vec2::approx_eq`].
/// Tight enough that it only absorbs representation noise, not accumulated drift.
pub const APPROX_EPSILON: f64 = 1e-16;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Creates a new Vec2.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the dot product of two vectors.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (scalar). Equivalent to z-component of 3D cross product.
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - other.x * self.y
    }

    /// Calculates the squared magnitude (length) of the vector.
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Calculates the magnitude (length) of the vector.
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Angle of the vector measured from the +y axis towards +x, i.e. `atan2(x, y)`.
    ///
    /// Note the argument order: `(0, 1)` has angle 0 and `(1, 0)` has angle π/2.
    pub fn angle(self) -> f64 {
        self.x.atan2(self.y)
    }

    /// Multiplies both components by `scalar`.
    pub fn scale(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Returns a normalized version of the vector (unit vector).
    /// If the magnitude is zero, it returns a zero vector.
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            Self::ZERO
        } else {
            self.scale(1.0 / mag)
        }
    }

    /// Returns the vector rotated 90 degrees clockwise, `(y, -x)`.
    /// Applied to a polygon edge this gives the candidate separating axis for that edge.
    pub fn orthogonal(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Signed length of the projection of `self` onto `axis`, in units of `axis`.
    ///
    /// `axis` must not be the zero vector; the result is NaN otherwise.
    pub fn project_onto_magnitude(self, axis: Self) -> f64 {
        self.dot(axis) / axis.dot(axis)
    }

    /// Vector projection of `self` onto `axis`.
    pub fn project_onto(self, axis: Self) -> Self {
        axis.scale(self.project_onto_magnitude(axis))
    }

    /// Componentwise comparison within [`APPROX_EPSILON`].
    pub fn approx_eq(self, other: Self) -> bool {
        (self.x - other.x).abs() < APPROX_EPSILON && (self.y - other.y).abs() < APPROX_EPSILON
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

// Vec2 * f64
impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

// f64 * Vec2
impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        vec.scale(self)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-10; // For floating point comparisons

    #[test]
    fn test_vec2_add_sub() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vec2::new(2.0, 2.0));

        let mut acc = v1;
        acc += v2;
        acc -= Vec2::new(0.5, 0.5);
        assert_eq!(acc, Vec2::new(3.5, 5.5));
        assert_eq!(-v1, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn test_vec2_scale() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.scale(3.0), Vec2::new(3.0, 6.0));
        assert_eq!(v * 3.0, Vec2::new(3.0, 6.0));
        assert_eq!(3.0 * v, Vec2::new(3.0, 6.0));
    }

    #[test]
    fn test_vec2_dot_cross() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert!((v1.dot(v2) - 11.0).abs() < EPSILON);
        // 1*4 - 3*2
        assert!((v1.cross(v2) - -2.0).abs() < EPSILON);
        assert!((v2.cross(v1) - 2.0).abs() < EPSILON);
        assert_eq!(v1.cross(v1), 0.0);
    }

    #[test]
    fn test_vec2_magnitude() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.magnitude_squared() - 25.0).abs() < EPSILON);
        assert!((v.magnitude() - 5.0).abs() < EPSILON);
        assert_eq!(Vec2::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_vec2_angle_measured_from_y_axis() {
        assert!(Vec2::new(0.0, 1.0).angle().abs() < EPSILON);
        assert!((Vec2::new(1.0, 0.0).angle() - PI / 2.0).abs() < EPSILON);
        assert!((Vec2::new(0.0, -1.0).angle() - PI).abs() < EPSILON);
        assert!((Vec2::new(-1.0, 0.0).angle() - -PI / 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_normalize() {
        let v = Vec2::new(3.0, 4.0);
        let norm_v = v.normalize();
        assert!((norm_v.magnitude() - 1.0).abs() < EPSILON);
        assert!((norm_v.x - 0.6).abs() < EPSILON);
        assert!((norm_v.y - 0.8).abs() < EPSILON);

        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_vec2_orthogonal() {
        let v = Vec2::new(3.0, 4.0);
        let ortho = v.orthogonal();
        assert_eq!(ortho, Vec2::new(4.0, -3.0));
        assert_eq!(v.dot(ortho), 0.0);
        // Clockwise: +x maps to -y
        assert_eq!(Vec2::new(1.0, 0.0).orthogonal(), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_vec2_projection() {
        let v = Vec2::new(2.0, 3.0);
        let axis = Vec2::new(2.0, 0.0);
        // Measured in units of the (non-normalized) axis
        assert!((v.project_onto_magnitude(axis) - 1.0).abs() < EPSILON);
        assert_eq!(v.project_onto(axis), Vec2::new(2.0, 0.0));

        let behind = Vec2::new(-4.0, 1.0);
        assert!((behind.project_onto_magnitude(axis) - -2.0).abs() < EPSILON);

        assert!(v.project_onto_magnitude(Vec2::ZERO).is_nan());
    }

    #[test]
    fn test_vec2_approx_eq() {
        let v = Vec2::new(0.1, 0.2);
        assert!(v.approx_eq(Vec2::new(0.1, 0.2)));
        assert!(!v.approx_eq(Vec2::new(0.1, 0.2 + 1e-12)));
        // 0.1 + 0.2 differs from 0.3 by one ulp (~5.5e-17), which the tolerance absorbs
        assert!(Vec2::new(0.1 + 0.2, 0.0).approx_eq(Vec2::new(0.3, 0.0)));
    }

    #[test]
    fn test_vec2_serde() {
        let v: Vec2 = serde_json::from_str(r#"{"x": 1.5, "y": -2.0}"#).unwrap();
        assert_eq!(v, Vec2::new(1.5, -2.0));
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
    }
}
