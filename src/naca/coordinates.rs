use crate::common::points::{dist, mid_point};
use crate::{Aabb2, Point2};
use serde::{Deserialize, Serialize};

/// The generated surfaces of an airfoil section. Both surfaces run from the leading edge (index 0)
/// to the trailing edge and always have the same number of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// The upper (suction side) surface, leading edge to trailing edge
    pub upper: Vec<Point2>,

    /// The lower (pressure side) surface, leading edge to trailing edge
    pub lower: Vec<Point2>,
}

impl Coordinates {
    /// The number of stations on each surface
    pub fn len(&self) -> usize {
        self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }

    /// Returns the section as a single closed loop: the upper surface from leading to trailing
    /// edge, followed by the lower surface from trailing back to leading edge. The coincident
    /// edge points are not removed.
    pub fn outline(&self) -> Vec<Point2> {
        self.upper
            .iter()
            .chain(self.lower.iter().rev())
            .copied()
            .collect()
    }

    /// The axis aligned bounding box of both surfaces, or `None` if there are no points.
    pub fn bounds(&self) -> Option<Aabb2> {
        if self.is_empty() {
            return None;
        }
        Some(Aabb2::from_points(&self.outline()))
    }

    /// Finds the station with the largest distance between the upper and lower surface points.
    /// Because the thickness is laid off normal to the mean line, this distance is the full
    /// thickness at that station. Returns the chord position of the station's mean line point and
    /// the thickness, or (0, 0) if there are no points.
    pub fn max_thickness(&self) -> (f64, f64) {
        self.stations()
            .map(|(u, l)| (mid_point(u, l).x, dist(u, l)))
            .fold((0.0, 0.0), |best, s| if s.1 > best.1 { s } else { best })
    }

    /// Finds the station whose mean line point (halfway between the upper and lower surface
    /// points) sits furthest from the chord line. Returns its chord position and signed height,
    /// or (0, 0) if there are no points.
    pub fn max_camber(&self) -> (f64, f64) {
        self.stations()
            .map(|(u, l)| {
                let m = mid_point(u, l);
                (m.x, m.y)
            })
            .fold((0.0, 0.0), |best, s| {
                if s.1.abs() > best.1.abs() { s } else { best }
            })
    }

    /// The mean line points, halfway between each pair of upper and lower surface points
    pub fn camber_points(&self) -> Vec<Point2> {
        self.stations().map(|(u, l)| mid_point(u, l)).collect()
    }

    fn stations(&self) -> impl Iterator<Item = (&Point2, &Point2)> {
        self.upper.iter().zip(self.lower.iter())
    }
}
