//! Helper functions: homogeneous-transform algebra and pose comparison

use nalgebra::{Matrix3, Vector3};

use crate::kinematic_traits::{Joints, Solutions, Transform};

/// Checks the solution for validity. This is only internally needed as all returned
/// solutions are already checked.
pub(crate) mod dh_kinematics {
    use crate::kinematic_traits::Joints;

    /// Checks if all elements in the array are finite
    pub fn is_valid(qs: &Joints) -> bool {
        qs.iter().all(|&q| q.is_finite())
    }
}

/// Sign of a scalar as -1, 0 or +1.
pub fn sign(x: f64) -> f64 {
    ((x > 0.0) as i32 - (x < 0.0) as i32) as f64
}

/// Versine of the angle, `1 - cos(theta)`.
pub fn versine(theta: f64) -> f64 {
    1.0 - theta.cos()
}

/// Rotation by `theta` about the principal X axis.
pub fn rot_x(theta: f64) -> Matrix3<f64> {
    let (s, c) = theta.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, c, -s,
        0.0, s, c,
    )
}

/// Rotation by `theta` about the principal Y axis.
pub fn rot_y(theta: f64) -> Matrix3<f64> {
    let (s, c) = theta.sin_cos();
    Matrix3::new(
        c, 0.0, s,
        0.0, 1.0, 0.0,
        -s, 0.0, c,
    )
}

/// Rotation by `theta` about the principal Z axis.
pub fn rot_z(theta: f64) -> Matrix3<f64> {
    let (s, c) = theta.sin_cos();
    Matrix3::new(
        c, -s, 0.0,
        s, c, 0.0,
        0.0, 0.0, 1.0,
    )
}

/// Rotation by `theta` about an arbitrary axis `k` (Rodrigues form).
/// A zero axis yields the identity.
pub fn rot_about_axis(k: &Vector3<f64>, theta: f64) -> Matrix3<f64> {
    let norm = k.norm();
    if norm == 0.0 {
        return Matrix3::identity();
    }
    let k = k / norm;
    let v = versine(theta);
    let (s, c) = theta.sin_cos();
    Matrix3::new(
        k.x * k.x * v + c, k.x * k.y * v - k.z * s, k.x * k.z * v + k.y * s,
        k.y * k.x * v + k.z * s, k.y * k.y * v + c, k.y * k.z * v - k.x * s,
        k.z * k.x * v - k.y * s, k.z * k.y * v + k.x * s, k.z * k.z * v + c,
    )
}

/// Combines a rotation block and a displacement into a homogeneous transform.
pub fn homogeneous(rotation: &Matrix3<f64>, translation: &Vector3<f64>) -> Transform {
    let mut xform = Transform::identity();
    xform.fixed_view_mut::<3, 3>(0, 0).copy_from(rotation);
    xform.fixed_view_mut::<3, 1>(0, 3).copy_from(translation);
    xform
}

/// Inverts a homogeneous transform without a general 4x4 inversion,
/// as `[R^T, -R^T t]`.
pub fn invert_homogeneous(xform: &Transform) -> Transform {
    let rotation = rotation_of(xform).transpose();
    let translation = -rotation * position_of(xform);
    homogeneous(&rotation, &translation)
}

/// Position vector of a homogeneous transform.
pub fn position_of(xform: &Transform) -> Vector3<f64> {
    Vector3::new(xform[(0, 3)], xform[(1, 3)], xform[(2, 3)])
}

/// Rotation block of a homogeneous transform.
pub fn rotation_of(xform: &Transform) -> Matrix3<f64> {
    xform.fixed_view::<3, 3>(0, 0).into_owned()
}

/// The three basis vectors (x, y, z) of a transform in base coordinates.
pub fn bases_of(xform: &Transform) -> [Vector3<f64>; 3] {
    [
        Vector3::new(xform[(0, 0)], xform[(1, 0)], xform[(2, 0)]),
        Vector3::new(xform[(0, 1)], xform[(1, 1)], xform[(2, 1)]),
        Vector3::new(xform[(0, 2)], xform[(1, 2)], xform[(2, 2)]),
    ]
}

/// Transports a position vector through a homogeneous transform.
pub fn transform_point(xform: &Transform, position: &Vector3<f64>) -> Vector3<f64> {
    rotation_of(xform) * position + position_of(xform)
}

/// Angle in radians between two vectors, NaN if either has zero length.
pub fn angle_between(v1: &Vector3<f64>, v2: &Vector3<f64>) -> f64 {
    let m1 = v1.norm();
    let m2 = v2.norm();
    if m1 == 0.0 || m2 == 0.0 {
        return f64::NAN;
    }
    (v1.dot(v2) / (m1 * m2)).clamp(-1.0, 1.0).acos()
}

/// Euclidean distance between the translation parts of two transforms.
pub fn position_error(ta: &Transform, tb: &Transform) -> f64 {
    (position_of(ta) - position_of(tb)).norm()
}

/// Greatest angle between corresponding basis vectors of the two rotation
/// blocks. A cheap surrogate for the quaternion geodesic distance: always
/// non-negative and zero only when the rotations agree.
pub fn orientation_error(ta: &Transform, tb: &Transform) -> f64 {
    let a = bases_of(ta);
    let b = bases_of(tb);
    (0..3)
        .map(|i| angle_between(&a[i], &b[i]))
        .fold(0.0, f64::max)
}

/// Position and orientation errors between two poses, as a tuple.
pub fn pose_error(ta: &Transform, tb: &Transform) -> (f64, f64) {
    (position_error(ta, tb), orientation_error(ta, tb))
}

/// Print joint values for all solutions, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_solutions(solutions: &Solutions) {
    if solutions.is_empty() {
        println!("No solutions");
    }
    for solution in solutions {
        let mut row_str = String::new();
        for angle in solution {
            row_str.push_str(&format!("{:5.2} ", angle.to_degrees()));
        }
        println!("[{}]", row_str.trim_end());
    }
}

/// Print joint values, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_joints(joints: &Joints) {
    let mut row_str = String::new();
    for angle in joints {
        row_str.push_str(&format!("{:5.2} ", angle.to_degrees()));
    }
    println!("[{}]", row_str.trim_end());
}

/// Allows to specify joint values in degrees (converts to radians)
#[allow(dead_code)]
pub fn as_radians(degrees: [i32; 6]) -> Joints {
    std::array::from_fn(|i| (degrees[i] as f64).to_radians())
}
