use crate::config::GraphConfig;
use crate::error::RoadError;
use crate::position::FeatureId;
use crate::road::RoadInfo;

use geo::Point;

/// Callback invoked for every feature found around a cross point.
pub type CrossVisitor<'a> = dyn FnMut(FeatureId, &RoadInfo) -> Result<(), RoadError> + 'a;

/// The map-data provider a road graph is built over.
///
/// Implementors answer which roads exist near a point, and what a
/// given road looks like. Everything else, namely turn discovery
/// ([`Turns`](crate::graph::Turns)) and path reconstruction
/// ([`Reconstruct`](crate::graph::Reconstruct)), is derived from these.
pub trait RoadNetwork {
    /// Geometry, speed and directionality of a feature.
    fn road_info(&self, feature: FeatureId) -> Result<RoadInfo, RoadError>;

    /// Speed of a feature in km/h.
    ///
    /// Providers holding speeds separately from geometry should
    /// override this to skip the geometry lookup.
    fn speed_kmph(&self, feature: FeatureId) -> Result<f64, RoadError> {
        Ok(self.road_info(feature)?.speed_kmph)
    }

    /// Calls `visitor` once for every feature with a point within the
    /// configured tolerance of `cross`. The order of visits is unspecified.
    ///
    /// An error returned by the visitor stops the scan and is returned.
    fn for_each_closest_to_cross(
        &self,
        cross: Point,
        visitor: &mut CrossVisitor<'_>,
    ) -> Result<(), RoadError>;

    /// The fastest speed of any road in the network, in km/h.
    ///
    /// Must not be below any real road speed, or the search heuristic
    /// overestimates travel times.
    fn max_speed_kmph(&self) -> f64 {
        self.config().max_speed_kmph
    }

    fn config(&self) -> GraphConfig {
        GraphConfig::default()
    }
}
