//! The standard NACA symmetric thickness distribution shared by the 4-digit and 5-digit families.

/// Evaluate the half-thickness of the NACA symmetric thickness form at chord position `x`, scaled
/// so that the section's maximum thickness is `t` (as a fraction of chord). The trailing edge is
/// left slightly open, as in the classic definition.
///
/// # Arguments
///
/// * `x`: the chordwise position, in [0, 1]
/// * `t`: the maximum thickness as a fraction of chord
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use nacafoil::naca::thickness::half_thickness;
/// assert_eq!(half_thickness(0.0, 0.12), 0.0);
/// ```
pub fn half_thickness(x: f64, t: f64) -> f64 {
    let x2 = x * x;
    let x3 = x2 * x;
    let x4 = x3 * x;
    (t / 0.2) * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x2 + 0.2843 * x3 - 0.1015 * x4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Spacing;
    use approx::assert_relative_eq;

    #[test]
    fn test_max_thickness_near_thirty_percent() {
        let (x_max, t_max) = Spacing::Uniform
            .stations(1000)
            .into_iter()
            .map(|x| (x, 2.0 * half_thickness(x, 0.12)))
            .fold((0.0, 0.0), |acc, v| if v.1 > acc.1 { v } else { acc });

        assert_relative_eq!(t_max, 0.12, epsilon = 1.0e-3);
        assert_relative_eq!(x_max, 0.3, epsilon = 0.01);
    }

    #[test]
    fn test_open_trailing_edge() {
        assert_relative_eq!(2.0 * half_thickness(1.0, 0.12), 0.00252, epsilon = 1.0e-9);
    }

    #[test]
    fn test_scales_linearly_with_thickness() {
        for x in Spacing::Uniform.stations(10) {
            assert_relative_eq!(
                half_thickness(x, 0.24),
                2.0 * half_thickness(x, 0.12),
                epsilon = 1.0e-12
            );
        }
    }
}
