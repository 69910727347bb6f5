use crate::KMPH_TO_MPS;

use geo::{Distance, Euclidean, Haversine, Point};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The distance function applied to road geometry.
///
/// Road lengths, covered distances and the search heuristic must all
/// be measured with the same metric, otherwise the heuristic is no
/// longer a lower bound on the edge costs.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Planar distance, for coordinates already projected into metres.
    #[default]
    Euclidean,

    /// Great-circle distance in metres, for `(lng, lat)` coordinates.
    Haversine,
}

impl Metric {
    /// Distance between two points, in metres.
    #[inline]
    pub fn distance(&self, a: Point, b: Point) -> f64 {
        match self {
            Metric::Euclidean => Euclidean.distance(a, b),
            Metric::Haversine => Haversine.distance(a, b),
        }
    }
}

/// Seconds taken to cover `meters` at `speed_kmph`.
#[inline]
pub fn travel_seconds(meters: f64, speed_kmph: f64) -> f64 {
    meters / (speed_kmph * KMPH_TO_MPS)
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use std::str::FromStr;

    #[test]
    fn euclidean_is_planar() {
        let d = Metric::Euclidean.distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn haversine_degree_of_longitude() {
        // One degree along the equator.
        let d = Metric::Haversine.distance(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert_relative_eq!(d, 111_195.0, max_relative = 0.001);
    }

    #[test]
    fn seconds_at_speed() {
        assert_relative_eq!(travel_seconds(10.0, 60.0), 0.6, epsilon = 1e-9);
        assert_relative_eq!(travel_seconds(1000.0, 3.6), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn parses_names() {
        assert_eq!(Metric::from_str("haversine"), Ok(Metric::Haversine));
        assert_eq!(Metric::from_str("Euclidean"), Ok(Metric::Euclidean));
        assert!(Metric::from_str("manhattan").is_err());
        assert_eq!(Metric::Haversine.to_string(), "haversine");
    }
}
