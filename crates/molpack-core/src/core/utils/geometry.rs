use nalgebra::{Matrix3, Point3, Unit, Vector3};

/// Right-handed rotation about the X axis.
pub fn rotation_x(angle_degrees: f64) -> Matrix3<f64> {
    let (s, c) = angle_degrees.to_radians().sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, c, -s, //
        0.0, s, c,
    )
}

/// Right-handed rotation about the Y axis.
pub fn rotation_y(angle_degrees: f64) -> Matrix3<f64> {
    let (s, c) = angle_degrees.to_radians().sin_cos();
    Matrix3::new(
        c, 0.0, s, //
        0.0, 1.0, 0.0, //
        -s, 0.0, c,
    )
}

/// Right-handed rotation about the Z axis.
pub fn rotation_z(angle_degrees: f64) -> Matrix3<f64> {
    let (s, c) = angle_degrees.to_radians().sin_cos();
    Matrix3::new(
        c, -s, 0.0, //
        s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Composite rotation `Rz · Ry · Rx`: X is applied first, Z last.
pub fn rotation_zyx(x_degrees: f64, y_degrees: f64, z_degrees: f64) -> Matrix3<f64> {
    rotation_z(z_degrees) * rotation_y(y_degrees) * rotation_x(x_degrees)
}

/// Normalizes `direction`, or returns `None` if it has zero (or non-finite) length.
///
/// The vector is rescaled by its largest component first, so very small or very large
/// but non-zero directions normalize instead of under- or overflowing.
pub fn normalize_direction(direction: &Vector3<f64>) -> Option<Unit<Vector3<f64>>> {
    let scale = direction.amax();
    if !(scale > 0.0 && scale.is_finite()) {
        return None;
    }
    let scaled = direction / scale;
    let norm = scaled.norm();
    if norm > 0.0 && norm.is_finite() {
        Some(Unit::new_unchecked(scaled / norm))
    } else {
        None
    }
}

/// Splits a separation vector into its length along `axis` and the residual
/// distance perpendicular to it. The perpendicular part is clamped at zero so
/// rounding never produces a NaN.
#[inline]
pub fn decompose_along(separation: &Vector3<f64>, axis: &Unit<Vector3<f64>>) -> (f64, f64) {
    let along = separation.dot(&**axis);
    let perpendicular = (separation.norm_squared() - along * along).max(0.0).sqrt();
    (along, perpendicular)
}

pub fn calculate_rmsd(coords1: &[Point3<f64>], coords2: &[Point3<f64>]) -> Option<f64> {
    if coords1.len() != coords2.len() || coords1.is_empty() {
        return None;
    }
    let n = coords1.len() as f64;
    let squared_dist_sum: f64 = coords1
        .iter()
        .zip(coords2.iter())
        .map(|(p1, p2)| (p1 - p2).norm_squared())
        .sum();
    Some((squared_dist_sum / n).sqrt())
}
