use nalgebra as na;

pub type Point3 = na::Point3<f64>;

/// Tolerance used when comparing heights and slab sizes.
pub const EPSILON: f64 = 1e-9;

pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).abs() <= EPSILON
    }
}

/// Center of a slab stacked along the Z axis through the origin.
pub fn on_z_axis(z: f64) -> Point3 {
    Point3::new(0.0, 0.0, z)
}
