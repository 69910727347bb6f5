use crate::config::GraphConfig;
use crate::error::RoadError;
use crate::graph::{CrossVisitor, RoadNetwork};
use crate::position::{FeatureId, RoadSegment};
use crate::road::RoadInfo;

use geo::Point;
use itertools::Itertools;
use log::{debug, trace};
use rstar::{AABB, RTree, RTreeObject};
use rustc_hash::FxHashMap;
use std::fmt::{Debug, Formatter};
use turnroute_geo::{almost_equal, parse_road};

/// A single polyline point of a road, as held in the spatial index.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RoadVertex {
    feature: FeatureId,
    position: Point,
}

impl RTreeObject for RoadVertex {
    type Envelope = AABB<Point>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}

/// A road network held entirely in memory.
///
/// Roads are kept by feature id, and every road point is indexed
/// spatially so the roads passing through a cross point can be found
/// without scanning the network.
pub struct MemoryNetwork {
    roads: FxHashMap<FeatureId, RoadInfo>,
    index: RTree<RoadVertex>,
    config: GraphConfig,
}

impl Debug for MemoryNetwork {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MemoryNetwork with Roads: {}", self.roads.len())
    }
}

impl Default for MemoryNetwork {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

impl MemoryNetwork {
    pub fn new(config: GraphConfig) -> Self {
        Self {
            roads: FxHashMap::default(),
            index: RTree::new(),
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    pub fn features(&self) -> impl Iterator<Item = FeatureId> + '_ {
        self.roads.keys().copied().sorted_unstable()
    }

    /// Adds a road, replacing any road already held under `feature`.
    pub fn insert(&mut self, feature: FeatureId, road: RoadInfo) -> Result<(), RoadError> {
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

        if let Some(previous) = self.roads.remove(&feature) {
            debug!("Replacing road {feature}");
            for position in previous.points {
                self.index.remove(&RoadVertex { feature, position });
            }
        }

        for position in &road.points {
            self.index.insert(RoadVertex {
                feature,
                position: *position,
            });
        }

        trace!("Inserted road {feature} of {} points", road.points.len());
        self.roads.insert(feature, road);

        Ok(())
    }

    /// Adds a road from a WKT `LINESTRING`.
    pub fn insert_wkt(
        &mut self,
        feature: FeatureId,
        wkt: &str,
        speed_kmph: f64,
        bidirectional: bool,
    ) -> Result<(), RoadError> {
        let points = parse_road(wkt)?;
        self.insert(feature, RoadInfo::new(points, speed_kmph, bidirectional))
    }

    /// Finds the road segment travelled from `from` to `to`, if any.
    ///
    /// Backward travel is only matched on bidirectional roads. When several
    /// roads share the segment, the lowest feature id wins.
    pub fn locate_segment(&self, from: Point, to: Point) -> Option<RoadSegment> {
        let tolerance = self.config.cross_tolerance;
        let same = |a: &Point, b: Point| almost_equal(*a, b, tolerance);

        self.features_at(from)
            .into_iter()
            .filter_map(|feature| Some((feature, self.roads.get(&feature)?)))
            .find_map(|(feature, road)| {
                road.points
                    .iter()
                    .tuple_windows()
                    .enumerate()
                    .find_map(|(segment, (a, b))| {
                        let segment = segment as u32;

                        if same(a, from) && same(b, to) {
                            Some(RoadSegment::new(feature, true, segment, from))
                        } else if road.bidirectional && same(b, from) && same(a, to) {
                            Some(RoadSegment::new(feature, false, segment, from))
                        } else {
                            None
                        }
                    })
            })
    }

    /// Distinct features with a point within tolerance of `point`, ascending.
    fn features_at(&self, point: Point) -> Vec<FeatureId> {
        let tolerance = self.config.cross_tolerance;
        let window = AABB::from_corners(
            Point::new(point.x() - tolerance, point.y() - tolerance),
            Point::new(point.x() + tolerance, point.y() + tolerance),
        );

        self.index
            .locate_in_envelope_intersecting(&window)
            .map(|vertex| vertex.feature)
            .sorted_unstable()
            .dedup()
            .collect()
    }
}

impl RoadNetwork for MemoryNetwork {
    fn road_info(&self, feature: FeatureId) -> Result<RoadInfo, RoadError> {
        self.roads
            .get(&feature)
            .cloned()
            .ok_or(RoadError::UnknownFeature(feature))
    }

    fn speed_kmph(&self, feature: FeatureId) -> Result<f64, RoadError> {
        self.roads
            .get(&feature)
            .map(|road| road.speed_kmph)
            .ok_or(RoadError::UnknownFeature(feature))
    }

    fn for_each_closest_to_cross(
        &self,
        cross: Point,
        visitor: &mut CrossVisitor<'_>,
    ) -> Result<(), RoadError> {
        for feature in self.features_at(cross) {
            let road = self
                .roads
                .get(&feature)
                .ok_or(RoadError::UnknownFeature(feature))?;

            visitor(feature, road)?;
        }

        Ok(())
    }

    fn max_speed_kmph(&self) -> f64 {
        self.roads
            .values()
            .map(|road| road.speed_kmph)
            .reduce(f64::max)
            .unwrap_or(self.config.max_speed_kmph)
    }

    fn config(&self) -> GraphConfig {
        self.config
    }
}
