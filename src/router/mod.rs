//! Routing between two raw coordinates: synthetic anchors are tied to
//! the road network through their vicinity, searched between, and the
//! resulting positions rebuilt into a route.

use crate::error::{RoadError, RouteError};
use crate::graph::{Reconstruct, RoadNetwork, Route, Vicinity};
use crate::position::{RoadPos, RoadSegment};
use crate::search::{self, DirectedPos, RoadGraph, SearchGraph};

use geo::Point;
use log::{debug, info};
#[cfg(feature = "tracing")]
use tracing::Level;


/// A route between two coordinates which need not lie on a road.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub start: Point,
    pub finish: Point,

    /// Road positions the route may leave the start from.
    pub start_vicinity: Vec<RoadPos>,
    /// Road positions the route may arrive at the finish by.
    pub final_vicinity: Vec<RoadPos>,
}

impl RouteRequest {
    pub fn new(start: Point, finish: Point) -> Self {
        Self {
            start,
            finish,
            start_vicinity: Vec::new(),
            final_vicinity: Vec::new(),
        }
    }

    pub fn with_start_vicinity(mut self, vicinity: impl IntoIterator<Item = RoadPos>) -> Self {
        self.start_vicinity = vicinity.into_iter().collect();
        self
    }

    pub fn with_final_vicinity(mut self, vicinity: impl IntoIterator<Item = RoadPos>) -> Self {
        self.final_vicinity = vicinity.into_iter().collect();
        self
    }
}

/// Computes fastest routes over a shared road network.
///
/// The router holds no per-request state, so one network may serve
/// any number of routers, and one router any number of requests.
pub struct Router<'a, N>
where
    N: RoadNetwork + ?Sized,
{
    network: &'a N,
}

impl<'a, N> Router<'a, N>
where
    N: RoadNetwork + ?Sized,
{
    pub fn new(network: &'a N) -> Self {
        Self { network }
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::INFO, skip_all))]
    pub fn calculate_route(&self, request: &RouteRequest) -> Result<Route, RouteError> {
        if request.start_vicinity.is_empty() {
            return Err(RouteError::EmptyVicinity("start"));
        }

        if request.final_vicinity.is_empty() {
            return Err(RouteError::EmptyVicinity("final"));
        }

        let start = RoadPos::start(request.start);
        let finish = RoadPos::finish(request.finish);

        let departures = request
            .start_vicinity
            .iter()
            .map(|pos| self.at_entry(pos))
            .collect::<Result<Vec<_>, _>>()?;

        let mut vicinity = Vicinity::new();
        vicinity.set_fake_turns(&start, &departures)?;
        vicinity.set_fake_turns(&finish, &request.final_vicinity)?;

        let goals = self.goal_vertices(&request.final_vicinity)?;
        let graph = RoadGraph::new(self.network, &vicinity);

        debug!(
            "Routing {start} -> {finish} over {} departures and {} arrivals",
            departures.len(),
            request.final_vicinity.len()
        );

        let found = search::astar(
            &graph,
            &DirectedPos(start),
            |vertex| {
                goals
                    .iter()
                    .map(|goal| graph.heuristic_cost_estimate(vertex, goal))
                    .reduce(f64::min)
                    .unwrap_or_default()
            },
            // Arriving costs the whole final segment, so the search ends on
            // the anchor rather than on entering a final position.
            |vertex| matches!(vertex.pos(), RoadPos::Final(_)),
        )?;

        let Some((path, cost)) = found else {
            return Err(RouteError::NoRoute);
        };

        let positions = path
            .into_iter()
            .map(|vertex| vertex.0)
            .filter(|pos| !pos.is_anchor())
            .collect::<Vec<_>>();

        let mut route = Route::default();
        self.network.reconstruct_path(&positions, &mut route)?;

        info!(
            "Found route of {} positions in {:.3}s",
            positions.len(),
            cost.seconds()
        );

        Ok(route)
    }

    /// The position, with its endpoint moved to where its segment is entered.
    fn at_entry(&self, pos: &RoadPos) -> Result<RoadPos, RoadError> {
        let Some(segment) = pos.as_real() else {
            return Err(RoadError::AnchorInVicinity(*pos));
        };

        let (entry, _) = self.segment_points(segment)?;
        Ok(RoadPos::new(
            segment.feature_id(),
            segment.is_forward(),
            segment.segment(),
            entry,
        ))
    }

    /// Every vertex by which a final vicinity position may be reached.
    ///
    /// A goal matches in either direction, so its segment can be entered
    /// from either end, and each end is a goal.
    fn goal_vertices(&self, vicinity: &[RoadPos]) -> Result<Vec<DirectedPos>, RoadError> {
        let mut goals = Vec::with_capacity(vicinity.len() * 2);

        for segment in vicinity.iter().filter_map(RoadPos::as_real) {
            let (entry, exit) = self.segment_points(segment)?;
            goals.extend([entry, exit].map(|point| {
                DirectedPos(RoadPos::new(
                    segment.feature_id(),
                    segment.is_forward(),
                    segment.segment(),
                    point,
                ))
            }));
        }

        Ok(goals)
    }

    fn segment_points(&self, segment: &RoadSegment) -> Result<(Point, Point), RoadError> {
        let feature = segment.feature_id();

        self.network
            .road_info(feature)?
            .segment_points(segment)
            .ok_or_else(|| RoadError::invalid(feature, format!("has no segment {}", segment.segment())))
    }
}
