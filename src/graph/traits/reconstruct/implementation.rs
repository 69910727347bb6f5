use super::definition::Reconstruct;
use crate::config::GraphConfig;
use crate::error::RoadError;
use crate::graph::{RoadNetwork, RouteSink};
use crate::position::{RoadPos, RoadSegment};
use crate::road::RoadInfo;

use geo::Point;
use itertools::Either;
use log::debug;
use turnroute_geo::{almost_equal, travel_seconds};
#[cfg(feature = "tracing")]
use tracing::Level;

/// A road loaded for reconstruction, with the speed it is travelled at.
struct TravelledRoad {
    info: RoadInfo,
    speed_kmph: f64,
}

impl TravelledRoad {
    fn load<N>(network: &N, pos: &RoadSegment) -> Result<Self, RoadError>
    where
        N: RoadNetwork + ?Sized,
    {
        let feature = pos.feature_id();
        let info = network.road_info(feature)?;
        let speed_kmph = network.speed_kmph(feature)?;

        if !speed_kmph.is_finite() || speed_kmph <= 0.0 {
            return Err(RoadError::invalid(
                feature,
                format!("cannot travel at {speed_kmph}km/h"),
            ));
        }

        if info.segment_points(pos).is_none() {
            return Err(RoadError::invalid(
                feature,
                format!(
                    "segment {} does not exist on a road of {} segments",
                    pos.segment(),
                    info.segment_count()
                ),
            ));
        }

        Ok(Self { info, speed_kmph })
    }

    #[inline]
    fn point(&self, index: usize) -> Point {
        self.info.points[index]
    }
}

/// Accumulates the geometry and timing of a route as it is walked.
struct PathWalker {
    config: GraphConfig,
    points: Vec<Point>,
    times: Vec<(usize, f64)>,
    seconds: f64,
}

impl PathWalker {
    fn new(config: GraphConfig, start: Point, capacity: usize) -> Self {
        let mut points = Vec::with_capacity(capacity + 1);
        points.push(start);

        Self {
            config,
            points,
            times: Vec::with_capacity(capacity),
            seconds: 0.0,
        }
    }

    fn last(&self) -> Point {
        // Never empty, seeded by the start point.
        self.points[self.points.len() - 1]
    }

    /// Travels from the last point to `point` at `speed_kmph`.
    fn advance(&mut self, point: Point, speed_kmph: f64) {
        let last = self.last();
        self.seconds += travel_seconds(self.config.metric.distance(last, point), speed_kmph);

        if !almost_equal(last, point, self.config.cross_tolerance) {
            self.points.push(point);
        }
    }

    /// Marks the end of a road position's segment.
    fn mark(&mut self) {
        self.times.push((self.points.len() - 1, self.seconds));
    }

    fn finish<R>(mut self, route: &mut R)
    where
        R: RouteSink + ?Sized,
    {
        if self.points.len() == 1 {
            self.points.push(self.points[0]);
        }

        debug!(
            "Reconstructed {} positions into {} points over {:.2}s",
            self.times.len(),
            self.points.len(),
            self.seconds
        );

        route.set_geometry(self.points);
        route.set_section_times(self.times);
    }
}

/// Whether `next` lies further along the road than `prev`, travelling
/// in the same direction.
fn is_ahead(prev: &RoadSegment, next: &RoadSegment) -> bool {
    prev.feature_id() == next.feature_id()
        && prev.is_forward() == next.is_forward()
        && if prev.is_forward() {
            next.segment() > prev.segment()
        } else {
            next.segment() < prev.segment()
        }
}

impl<N> Reconstruct for N
where
    N: RoadNetwork + ?Sized,
{
    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::DEBUG, skip_all))]
    fn reconstruct_path<R>(&self, positions: &[RoadPos], route: &mut R) -> Result<(), RoadError>
    where
        R: RouteSink + ?Sized,
    {
        let real = |index: usize| -> Result<RoadSegment, RoadError> {
            positions[index].as_real().copied().ok_or(RoadError::InconsistentPath {
                index: index.saturating_sub(1),
            })
        };

        if positions.is_empty() {
            return Err(RoadError::EmptyPath);
        }

        let config = self.config();
        let mut prev = real(0)?;
        let mut road = TravelledRoad::load(self, &prev)?;

        let mut walker = PathWalker::new(
            config,
            road.point(prev.seg_start_point_id()),
            positions.len(),
        );

        walker.advance(road.point(prev.seg_end_point_id()), road.speed_kmph);
        walker.mark();

        for index in 1..positions.len() {
            let next = real(index)?;

            if is_ahead(&prev, &next) {
                // Walk every point between the two positions on the same road.
                let from = prev.seg_end_point_id();
                let to = next.seg_end_point_id();

                if road.info.segment_points(&next).is_none() {
                    return Err(RoadError::invalid(
                        next.feature_id(),
                        format!("segment {} does not exist", next.segment()),
                    ));
                }

                let ids = if next.is_forward() {
                    Either::Left(from + 1..=to)
                } else {
                    Either::Right((to..from).rev())
                };

                for id in ids {
                    walker.advance(road.point(id), road.speed_kmph);
                }
            } else {
                if next.feature_id() != prev.feature_id() {
                    road = TravelledRoad::load(self, &next)?;
                } else if road.info.segment_points(&next).is_none() {
                    return Err(RoadError::invalid(
                        next.feature_id(),
                        format!("segment {} does not exist", next.segment()),
                    ));
                }

                let entry = road.point(next.seg_start_point_id());
                if !almost_equal(walker.last(), entry, config.cross_tolerance) {
                    debug!("Path breaks between {prev} and {next}");
                    return Err(RoadError::InconsistentPath { index: index - 1 });
                }

                walker.advance(road.point(next.seg_end_point_id()), road.speed_kmph);
            }

            walker.mark();
            prev = next;
        }

        walker.finish(route);
        Ok(())
    }
}
