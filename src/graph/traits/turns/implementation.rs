use super::definition::Turns;
use crate::error::RoadError;
use crate::graph::RoadNetwork;
use crate::position::{FeatureId, RoadPos, RoadSegment};
use crate::road::{PossibleTurn, RoadInfo};

use geo::Point;
use log::trace;
use turnroute_geo::{almost_equal, travel_seconds};
#[cfg(feature = "tracing")]
use tracing::Level;

/// Collects the turns available at a single cross point.
struct CrossTurnsLoader {
    cross: Point,
    tolerance: f64,

    /// Describes the travelled road, shared by every turn found.
    template: PossibleTurn,
    turns: Vec<PossibleTurn>,
}

impl CrossTurnsLoader {
    fn new(cross: Point, tolerance: f64, template: PossibleTurn) -> Self {
        Self {
            cross,
            tolerance,
            template,
            turns: Vec::new(),
        }
    }

    fn load(&mut self, feature: FeatureId, road: &RoadInfo) -> Result<(), RoadError> {
        let count = road.points.len();
        let mut crossed = false;

        for (index, point) in road.points.iter().enumerate() {
            if !almost_equal(self.cross, *point, self.tolerance) {
                continue;
            }

            crossed = true;

            if index + 1 < count {
                //  p
                //  o------------>o
                let pos = RoadPos::new(feature, true, index as u32, *point);
                self.turns.push(self.template.onto(pos));
            }

            if index > 0 && road.bidirectional {
                //                p
                //  o<------------o
                let pos = RoadPos::new(feature, false, (index - 1) as u32, *point);
                self.turns.push(self.template.onto(pos));
            }
        }

        if !crossed {
            return Err(RoadError::invalid(
                feature,
                format!(
                    "reported at ({}, {}) but has no point there",
                    self.cross.x(),
                    self.cross.y()
                ),
            ));
        }

        Ok(())
    }
}

impl<N> Turns for N
where
    N: RoadNetwork + ?Sized,
{
    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::DEBUG, skip(self)))]
    fn nearest_turns(&self, pos: &RoadSegment) -> Result<Vec<PossibleTurn>, RoadError> {
        let feature = pos.feature_id();
        let road = self.road_info(feature)?;

        if !road.is_routable() {
            return Err(RoadError::invalid(
                feature,
                format!(
                    "{} points at {}km/h cannot be routed over",
                    road.points.len(),
                    road.speed_kmph
                ),
            ));
        }

        let Some((start, cross)) = road.segment_points(pos) else {
            return Err(RoadError::invalid(
                feature,
                format!(
                    "segment {} does not exist on a road of {} segments",
                    pos.segment(),
                    road.segment_count()
                ),
            ));
        };

        let config = self.config();
        let meters = config.metric.distance(start, cross);

        let template = PossibleTurn {
            pos: RoadPos::Real(*pos),
            start_point: start,
            end_point: cross,
            speed_kmph: road.speed_kmph,
            meters_covered: meters,
            seconds_covered: travel_seconds(meters, road.speed_kmph),
        };

        let mut loader = CrossTurnsLoader::new(cross, config.cross_tolerance, template);
        self.for_each_closest_to_cross(cross, &mut |id: FeatureId, info: &RoadInfo| {
            loader.load(id, info)
        })?;

        // Both directions of a segment are the same position,
        // so this drops the U-turn back along `pos`.
        let own = RoadPos::Real(*pos);
        let mut turns = loader.turns;
        turns.retain(|turn| turn.pos != own);

        trace!("Found {} turns from {pos}", turns.len());
        Ok(turns)
    }
}
