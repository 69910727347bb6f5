use crate::GeoError;

use geo::{LineString, Point};
use log::trace;
use wkt::TryFromWkt;

/// Parses a road polyline from a WKT `LINESTRING`.
///
/// ```rust
/// use turnroute_geo::parse_road;
///
/// let points = parse_road("LINESTRING (0 0, 10 0)").unwrap();
/// assert_eq!(points.len(), 2);
/// ```
pub fn parse_road(input: &str) -> Result<Vec<Point>, GeoError> {
    let line: LineString<f64> =
        LineString::try_from_wkt_str(input).map_err(|err| GeoError::InvalidWkt(err.to_string()))?;

    trace!("Parsed road of {} points", line.0.len());

    if line.0.len() < 2 {
        return Err(GeoError::TooFewPoints(line.0.len()));
    }

    Ok(line.into_points())
}
