//! Directed positions on road segments, and the synthetic anchors
//! placed at the raw start and finish coordinates of a route request.

use geo::Point;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};


/// Identifier of a road feature within the map data.
pub type FeatureId = u32;

/// A directed location on one segment of a road feature.
///
/// Segment `s` of a feature spans the points `s` and `s + 1` of its
/// polyline. Travelling forward it runs `s -> s + 1`, backward `s + 1 -> s`.
///
/// Equality, hashing and ordering consider only the feature and the
/// segment. The direction and the cached [`endpoint`](#method.endpoint)
/// do not take part, so both directions of one segment compare equal.
/// The search tells them apart through
/// [`DirectedPos`](crate::search::DirectedPos).
#[derive(Debug, Clone, Copy)]
pub struct RoadSegment {
    feature: FeatureId,
    forward: bool,
    segment: u32,
    endpoint: Point,
}

impl RoadSegment {
    pub const fn new(feature: FeatureId, forward: bool, segment: u32, endpoint: Point) -> Self {
        Self {
            feature,
            forward,
            segment,
            endpoint,
        }
    }

    #[inline]
    pub const fn feature_id(&self) -> FeatureId {
        self.feature
    }

    #[inline]
    pub const fn is_forward(&self) -> bool {
        self.forward
    }

    /// The ordinal of the segment along the feature.
    #[inline]
    pub const fn segment(&self) -> u32 {
        self.segment
    }

    /// Index of the polyline point the segment is entered from.
    #[inline]
    pub const fn seg_start_point_id(&self) -> usize {
        self.segment as usize + if self.forward { 0 } else { 1 }
    }

    /// Index of the polyline point the segment is left by.
    #[inline]
    pub const fn seg_end_point_id(&self) -> usize {
        self.segment as usize + if self.forward { 1 } else { 0 }
    }

    /// The cached coordinate the position was reached at.
    ///
    /// Positions produced by turn discovery cache the junction they were
    /// found at, which is the point their segment is entered from.
    #[inline]
    pub const fn endpoint(&self) -> Point {
        self.endpoint
    }

    /// The same segment, travelled the other way.
    pub const fn reversed(&self) -> Self {
        Self {
            forward: !self.forward,
            ..*self
        }
    }

    #[inline]
    const fn key(&self) -> (FeatureId, u32) {
        (self.feature, self.segment)
    }
}

impl PartialEq for RoadSegment {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for RoadSegment {}

impl Hash for RoadSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for RoadSegment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RoadSegment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Default for RoadSegment {
    fn default() -> Self {
        Self::new(0, true, 0, Point::new(0.0, 0.0))
    }
}

impl Display for RoadSegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ featureId: {}, isForward: {}, segId: {}, segEndpoint: ({}, {}) }}",
            self.feature,
            self.forward,
            self.segment,
            self.endpoint.x(),
            self.endpoint.y()
        )
    }
}

/// A vertex of the road search graph.
///
/// Either a real position on a road, or one of the two synthetic anchors
/// standing in for the off-road start and finish coordinates of a request.
/// Each anchor is a single node: two starts compare equal whatever their
/// coordinate.
#[derive(Debug, Clone, Copy)]
pub enum RoadPos {
    Real(RoadSegment),
    Start(Point),
    Final(Point),
}

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
enum PosKey {
    Start,
    Final,
    Real(FeatureId, u32),
}

impl RoadPos {
    pub const fn new(feature: FeatureId, forward: bool, segment: u32, endpoint: Point) -> Self {
        RoadPos::Real(RoadSegment::new(feature, forward, segment, endpoint))
    }

    /// The synthetic anchor at the start coordinate of a request.
    pub const fn start(point: Point) -> Self {
        RoadPos::Start(point)
    }

    /// The synthetic anchor at the finish coordinate of a request.
    pub const fn finish(point: Point) -> Self {
        RoadPos::Final(point)
    }

    /// The real feature the position lies on, `None` for anchors.
    #[inline]
    pub const fn feature_id(&self) -> Option<FeatureId> {
        match self {
            RoadPos::Real(seg) => Some(seg.feature_id()),
            _ => None,
        }
    }

    /// Anchors have no direction and report forward.
    #[inline]
    pub const fn is_forward(&self) -> bool {
        match self {
            RoadPos::Real(seg) => seg.is_forward(),
            _ => true,
        }
    }

    #[inline]
    pub const fn segment(&self) -> Option<u32> {
        match self {
            RoadPos::Real(seg) => Some(seg.segment()),
            _ => None,
        }
    }

    /// Index of the polyline point a real position is entered from.
    #[inline]
    pub const fn seg_start_point_id(&self) -> Option<usize> {
        match self {
            RoadPos::Real(seg) => Some(seg.seg_start_point_id()),
            _ => None,
        }
    }

    /// Index of the polyline point a real position is left by.
    #[inline]
    pub const fn seg_end_point_id(&self) -> Option<usize> {
        match self {
            RoadPos::Real(seg) => Some(seg.seg_end_point_id()),
            _ => None,
        }
    }

    /// The cached coordinate of a real position, or the raw request
    /// coordinate of an anchor.
    #[inline]
    pub const fn endpoint(&self) -> Point {
        match self {
            RoadPos::Real(seg) => seg.endpoint(),
            RoadPos::Start(point) | RoadPos::Final(point) => *point,
        }
    }

    #[inline]
    pub const fn is_anchor(&self) -> bool {
        !matches!(self, RoadPos::Real(_))
    }

    #[inline]
    pub const fn as_real(&self) -> Option<&RoadSegment> {
        match self {
            RoadPos::Real(seg) => Some(seg),
            _ => None,
        }
    }

    #[inline]
    fn key(&self) -> PosKey {
        match self {
            RoadPos::Start(_) => PosKey::Start,
            RoadPos::Final(_) => PosKey::Final,
            RoadPos::Real(seg) => PosKey::Real(seg.feature_id(), seg.segment()),
        }
    }
}

impl From<RoadSegment> for RoadPos {
    fn from(value: RoadSegment) -> Self {
        RoadPos::Real(value)
    }
}

impl Default for RoadPos {
    fn default() -> Self {
        RoadPos::Real(RoadSegment::default())
    }
}

impl PartialEq for RoadPos {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for RoadPos {}

impl Hash for RoadPos {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for RoadPos {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RoadPos {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Display for RoadPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RoadPos::Real(seg) => Display::fmt(seg, f),
            RoadPos::Start(p) => write!(f, "{{ start anchor: ({}, {}) }}", p.x(), p.y()),
            RoadPos::Final(p) => write!(f, "{{ final anchor: ({}, {}) }}", p.x(), p.y()),
        }
    }
}
