use crate::position::RoadSegment;

use geo::Point;
use smallvec::SmallVec;

/// Geometry of a road, inlined for the common case of a short polyline.
pub type RoadPoints = SmallVec<[Point; 32]>;

/// The part of a feature's metadata that is relevant for routing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoadInfo {
    pub points: RoadPoints,
    pub speed_kmph: f64,
    pub bidirectional: bool,
}

impl RoadInfo {
    pub fn new(points: impl IntoIterator<Item = Point>, speed_kmph: f64, bidirectional: bool) -> Self {
        Self {
            points: points.into_iter().collect(),
            speed_kmph,
            bidirectional,
        }
    }

    /// Number of segments, i.e. consecutive point pairs, along the road.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// The points a position enters and leaves its segment by,
    /// or `None` if the road has no such segment.
    #[inline]
    pub fn segment_points(&self, pos: &RoadSegment) -> Option<(Point, Point)> {
        let start = self.points.get(pos.seg_start_point_id())?;
        let end = self.points.get(pos.seg_end_point_id())?;
        Some((*start, *end))
    }

    /// Whether the road can be routed over, i.e. has at least one
    /// segment and a positive speed.
    #[inline]
    pub fn is_routable(&self) -> bool {
        self.points.len() >= 2 && self.speed_kmph.is_finite() && self.speed_kmph > 0.0
    }
}
