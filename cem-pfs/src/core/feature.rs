//! Parking features (marker lines and slot quads) and timeframes.
//!
//! Markers and slots share one [`Feature`] type. The shape lives in a tagged
//! [`Geometry`] and every geometric operation (anchor, transform, distance)
//! works on its point slice, so the two variants never need separate code.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// Shape of a parking feature.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Geometry {
    /// Parking marker line (PCL delimiter), start and end point
    Line([Point2D; 2]),
    /// Parking slot quadrilateral, corners in upstream order
    Quad([Point2D; 4]),
}

/// Which kind of parking feature a geometry describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    /// Parking marker line
    Marker,
    /// Parking slot
    Slot,
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureKind::Marker => write!(f, "marker"),
            FeatureKind::Slot => write!(f, "slot"),
        }
    }
}

impl Geometry {
    /// Build a geometry from a point list: 2 points make a line, 4 a quad.
    ///
    /// Returns `None` for any other point count.
    pub fn from_points(points: &[Point2D]) -> Option<Self> {
        match *points {
            [a, b] => Some(Geometry::Line([a, b])),
            [a, b, c, d] => Some(Geometry::Quad([a, b, c, d])),
            _ => None,
        }
    }

    /// The ordered, non-empty point list.
    #[inline]
    pub fn points(&self) -> &[Point2D] {
        match self {
            Geometry::Line(points) => points,
            Geometry::Quad(points) => points,
        }
    }

    /// Feature kind of this shape.
    #[inline]
    pub fn kind(&self) -> FeatureKind {
        match self {
            Geometry::Line(_) => FeatureKind::Marker,
            Geometry::Quad(_) => FeatureKind::Slot,
        }
    }

    /// Point closest to the frame origin.
    ///
    /// Equal distances keep the first point in order. A degenerate shape
    /// (all points identical) yields that single point.
    pub fn nearest_to_origin(&self) -> Point2D {
        let points = self.points();
        let mut best = points[0];
        let mut best_dist = best.norm();
        for p in &points[1..] {
            let d = p.norm();
            if d < best_dist {
                best = *p;
                best_dist = d;
            }
        }
        best
    }

    /// Apply `f` to every point, keeping the shape.
    pub fn map_points(&self, f: impl Fn(Point2D) -> Point2D) -> Geometry {
        match self {
            Geometry::Line(points) => Geometry::Line(points.map(f)),
            Geometry::Quad(points) => Geometry::Quad(points.map(f)),
        }
    }
}

/// Anything that can be associated by anchor distance.
pub trait Anchored {
    /// Reference point used for all distance comparisons.
    fn anchor(&self) -> Point2D;

    /// Distance from the vehicle origin.
    fn distance_to_vehicle(&self) -> f64 {
        self.anchor().norm()
    }
}

/// A parking marker or slot reported by the system under test.
///
/// Immutable once decoded. The anchor is always the geometry point nearest to
/// the vehicle origin; it is recomputed whenever the geometry changes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Feature {
    /// Stable identifier, unique within a timeframe
    pub id: u32,
    /// Recording time in microseconds
    pub timestamp: u64,
    geometry: Geometry,
    anchor: Point2D,
}

impl Feature {
    /// Create a feature, computing its anchor.
    pub fn new(id: u32, timestamp: u64, geometry: Geometry) -> Self {
        Self {
            id,
            timestamp,
            anchor: geometry.nearest_to_origin(),
            geometry,
        }
    }

    /// Parking marker line.
    pub fn marker(id: u32, timestamp: u64, start: Point2D, end: Point2D) -> Self {
        Self::new(id, timestamp, Geometry::Line([start, end]))
    }

    /// Parking slot quad.
    pub fn slot(id: u32, timestamp: u64, corners: [Point2D; 4]) -> Self {
        Self::new(id, timestamp, Geometry::Quad(corners))
    }

    /// Feature geometry.
    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Marker or slot.
    #[inline]
    pub fn kind(&self) -> FeatureKind {
        self.geometry.kind()
    }

    /// Same id and timestamp with a replaced geometry (anchor recomputed).
    pub fn with_geometry(&self, geometry: Geometry) -> Self {
        Self::new(self.id, self.timestamp, geometry)
    }
}

impl Anchored for Feature {
    #[inline]
    fn anchor(&self) -> Point2D {
        self.anchor
    }
}

/// A ground-truth feature already expressed in the vehicle frame.
///
/// Carries no persistent id; ground truth is re-derived per timestamp.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroundTruthFeature {
    geometry: Geometry,
    anchor: Point2D,
}

impl GroundTruthFeature {
    /// Create a ground-truth feature, computing its anchor.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            anchor: geometry.nearest_to_origin(),
            geometry,
        }
    }

    /// Feature geometry.
    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Marker or slot.
    #[inline]
    pub fn kind(&self) -> FeatureKind {
        self.geometry.kind()
    }
}

impl Anchored for GroundTruthFeature {
    #[inline]
    fn anchor(&self) -> Point2D {
        self.anchor
    }
}

/// One decoded output sample of the system under test.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Timeframe {
    /// Recording time in microseconds
    pub timestamp: u64,
    /// Features in the order they were received upstream
    pub features: Vec<Feature>,
}

impl Timeframe {
    /// Create a timeframe.
    pub fn new(timestamp: u64, features: Vec<Feature>) -> Self {
        Self {
            timestamp,
            features,
        }
    }

    /// Number of features.
    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True if no features were reported.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Ids in upstream order.
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.features.iter().map(|f| f.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_is_nearest_point() {
        let f = Feature::marker(1, 0, Point2D::new(5.0, 1.0), Point2D::new(2.0, -1.0));
        assert_eq!(f.anchor(), Point2D::new(2.0, -1.0));
        assert_eq!(f.kind(), FeatureKind::Marker);
    }

    #[test]
    fn test_anchor_tie_keeps_first() {
        let f = Feature::slot(
            3,
            0,
            [
                Point2D::new(0.0, 2.0),
                Point2D::new(2.0, 0.0),
                Point2D::new(4.0, 0.0),
                Point2D::new(4.0, 2.0),
            ],
        );
        assert_eq!(f.anchor(), Point2D::new(0.0, 2.0));
        assert_eq!(f.kind(), FeatureKind::Slot);
    }

    #[test]
    fn test_degenerate_line_anchor() {
        let p = Point2D::new(3.0, 4.0);
        let f = Feature::marker(9, 0, p, p);
        assert_eq!(f.anchor(), p);
        assert_eq!(f.distance_to_vehicle(), 5.0);
    }

    #[test]
    fn test_from_points() {
        let p = Point2D::ZERO;
        assert!(matches!(Geometry::from_points(&[p, p]), Some(Geometry::Line(_))));
        assert!(matches!(
            Geometry::from_points(&[p, p, p, p]),
            Some(Geometry::Quad(_))
        ));
        assert!(Geometry::from_points(&[p]).is_none());
        assert!(Geometry::from_points(&[p, p, p]).is_none());
        assert!(Geometry::from_points(&[]).is_none());
    }

    #[test]
    fn test_with_geometry_recomputes_anchor() {
        let f = Feature::marker(1, 10, Point2D::new(1.0, 0.0), Point2D::new(2.0, 0.0));
        let moved = f.with_geometry(Geometry::Line([Point2D::new(9.0, 0.0), Point2D::new(3.0, 0.0)]));
        assert_eq!(moved.id, 1);
        assert_eq!(moved.timestamp, 10);
        assert_eq!(moved.anchor(), Point2D::new(3.0, 0.0));
    }

    #[test]
    fn test_timeframe_ids() {
        let frame = Timeframe::new(
            100,
            vec![
                Feature::marker(4, 100, Point2D::ZERO, Point2D::new(1.0, 0.0)),
                Feature::marker(2, 100, Point2D::ZERO, Point2D::new(0.0, 1.0)),
            ],
        );
        assert_eq!(frame.ids().collect::<Vec<_>>(), vec![4, 2]);
        assert_eq!(frame.len(), 2);
        assert!(!frame.is_empty());
    }
}
