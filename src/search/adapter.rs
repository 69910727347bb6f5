use super::{SearchEdge, SearchGraph};
use crate::error::RoadError;
use crate::graph::{RoadNetwork, Turns, Vicinity};
use crate::position::{RoadPos, RoadSegment};
use crate::road::RoadEdge;

use geo::Point;
use log::warn;
use std::hash::{Hash, Hasher};
use turnroute_geo::{KMPH_TO_MPS, Metric, travel_seconds};

/// A road position as a search vertex.
///
/// Unlike [`RoadPos`], the two directions of one segment are distinct
/// vertices here: which way a segment is travelled decides the turns
/// leaving it.
#[derive(Debug, Clone, Copy)]
pub struct DirectedPos(pub RoadPos);

impl DirectedPos {
    #[inline]
    pub const fn pos(&self) -> &RoadPos {
        &self.0
    }
}

impl From<RoadPos> for DirectedPos {
    fn from(value: RoadPos) -> Self {
        DirectedPos(value)
    }
}

impl PartialEq for DirectedPos {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.0.is_forward() == other.0.is_forward()
    }
}

impl Eq for DirectedPos {}

impl Hash for DirectedPos {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
        self.0.is_forward().hash(state);
    }
}

impl SearchEdge for RoadEdge {
    type Vertex = DirectedPos;

    #[inline]
    fn target(&self) -> Self::Vertex {
        DirectedPos(*RoadEdge::target(self))
    }

    #[inline]
    fn weight(&self) -> f64 {
        RoadEdge::weight(self)
    }
}

/// Presents a road network, and the vicinity of one request, as a
/// graph of travel times between road positions.
pub struct RoadGraph<'a, N>
where
    N: RoadNetwork + ?Sized,
{
    network: &'a N,
    vicinity: &'a Vicinity,

    metric: Metric,
    max_speed_mps: f64,
}

impl<'a, N> RoadGraph<'a, N>
where
    N: RoadNetwork + ?Sized,
{
    pub fn new(network: &'a N, vicinity: &'a Vicinity) -> Self {
        Self {
            network,
            vicinity,
            metric: network.config().metric,
            max_speed_mps: network.max_speed_kmph() * KMPH_TO_MPS,
        }
    }

    /// The edge from a position next to the finish onto the final anchor,
    /// costing the travel of the position's whole segment.
    fn arrival(&self, segment: &RoadSegment) -> Result<RoadEdge, RoadError> {
        let feature = segment.feature_id();
        let road = self.network.road_info(feature)?;
        let speed_kmph = self.network.speed_kmph(feature)?;

        let Some((entry, exit)) = road.segment_points(segment) else {
            return Err(RoadError::invalid(
                feature,
                format!("has no segment {}", segment.segment()),
            ));
        };

        let seconds = travel_seconds(self.metric.distance(entry, exit), speed_kmph);
        Ok(RoadEdge::new(RoadPos::finish(exit), seconds))
    }

    /// Fastest travel time between two points, in seconds.
    pub(crate) fn fastest_seconds(&self, from: Point, to: Point) -> f64 {
        if self.max_speed_mps <= 0.0 || !self.max_speed_mps.is_finite() {
            return 0.0;
        }

        self.metric.distance(from, to) / self.max_speed_mps
    }
}

impl<N> SearchGraph for RoadGraph<'_, N>
where
    N: RoadNetwork + ?Sized,
{
    type Vertex = DirectedPos;
    type Edge = RoadEdge;
    type Error = RoadError;

    fn adjacency_list(&self, vertex: &Self::Vertex) -> Result<Vec<Self::Edge>, Self::Error> {
        let segment = match vertex.pos() {
            RoadPos::Real(segment) => segment,
            anchor => {
                let Some(turns) = self.vicinity.turns(anchor) else {
                    warn!("No vicinity set for {anchor}, it has no edges");
                    return Ok(Vec::new());
                };

                return Ok(turns.iter().map(RoadEdge::from).collect());
            }
        };

        let mut edges = self
            .network
            .nearest_turns(segment)?
            .iter()
            .map(RoadEdge::from)
            .collect::<Vec<_>>();

        if self.vicinity.reaches_final(vertex.pos()) {
            edges.push(self.arrival(segment)?);
        }

        Ok(edges)
    }

    fn heuristic_cost_estimate(&self, from: &Self::Vertex, to: &Self::Vertex) -> f64 {
        // Anchors lie off the road, so any positive estimate could overshoot.
        if from.pos().is_anchor() || to.pos().is_anchor() {
            return 0.0;
        }

        self.fastest_seconds(from.pos().endpoint(), to.pos().endpoint())
    }
}
