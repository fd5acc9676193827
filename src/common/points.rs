//! Common operations on 2D section points.

use crate::Point2;

/// Returns the distance between two points.
///
/// # Arguments
///
/// * `a`: the first point
/// * `b`: the second point
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use nacafoil::common::points::dist;
/// use nacafoil::Point2;
/// let a = Point2::new(1.0, 2.0);
/// let b = Point2::new(3.0, 2.0);
/// let d = dist(&a, &b);
/// assert_eq!(d, 2.0);
/// ```
pub fn dist(a: &Point2, b: &Point2) -> f64 {
    (a - b).norm()
}

/// Returns the midpoint between two points.
///
/// # Examples
///
/// ```
/// use nacafoil::common::points::mid_point;
/// use nacafoil::Point2;
/// let a = Point2::new(1.0, 2.0);
/// let b = Point2::new(3.0, 4.0);
/// let mid = mid_point(&a, &b);
/// assert_eq!(mid, Point2::new(2.0, 3.0));
/// ```
pub fn mid_point(a: &Point2, b: &Point2) -> Point2 {
    b + (a - b) * 0.5
}
