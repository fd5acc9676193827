//! Construction of the upper and lower surface points from the mean line and the thickness.

use crate::Point2;

/// Offset the half-thickness `yt` perpendicular to the mean line at chord position `x`, where the
/// mean line has height `yc` and slope `dyc`. Returns the (upper, lower) surface points.
///
/// # Arguments
///
/// * `x`: the chordwise position of the mean line station
/// * `yc`: the height of the mean line at `x`
/// * `dyc`: the slope of the mean line at `x`
/// * `yt`: the half-thickness at `x`
///
/// returns: (Point2, Point2)
///
/// # Examples
///
/// ```
/// use nacafoil::naca::surface::offset_surfaces;
/// use nacafoil::Point2;
/// let (upper, lower) = offset_surfaces(0.5, 0.0, 0.0, 0.05);
/// assert_eq!(upper, Point2::new(0.5, 0.05));
/// assert_eq!(lower, Point2::new(0.5, -0.05));
/// ```
pub fn offset_surfaces(x: f64, yc: f64, dyc: f64, yt: f64) -> (Point2, Point2) {
    let theta = dyc.atan2(1.0);
    let (sin, cos) = theta.sin_cos();
    let upper = Point2::new(x - yt * sin, yc + yt * cos);
    let lower = Point2::new(x + yt * sin, yc - yt * cos);
    (upper, lower)
}
