//! Closed-form quadratic solve.

use orbis_math::EPSILON;

/// Real roots of `a t² + b t + c = 0` for `a > 0`, in ascending order.
///
/// A discriminant within a relative tolerance of zero is a tangency and
/// yields a single root. The tolerance scales with the coefficients only,
/// so uniformly small coefficients keep their two roots.
pub(crate) fn real_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    let discriminant = b * b - 4.0 * a * c;
    let scale = (b * b).max((4.0 * a * c).abs());

    if discriminant < -EPSILON * scale {
        return Vec::new();
    }
    if discriminant <= EPSILON * scale {
        return vec![-b / (2.0 * a)];
    }

    // Avoid cancellation between -b and the square root.
    let sqrt_disc = discriminant.sqrt();
    let q = -0.5 * (b + b.signum() * sqrt_disc);
    let (t0, t1) = (q / a, c / q);
    if t0 <= t1 {
        vec![t0, t1]
    } else {
        vec![t1, t0]
    }
}
