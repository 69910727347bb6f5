//! Geometry primitives shared by the road graph: distance metrics,
//! coordinate tolerance checks and speed/time conversion.

/// Conversion factor from kilometres-per-hour to metres-per-second.
pub const KMPH_TO_MPS: f64 = 1000.0 / (60.0 * 60.0);

/// Default tolerance (in coordinate units) below which two points
/// are considered the same junction.
pub const DEFAULT_EPSILON: f64 = 1e-6;

#[doc(hidden)]
pub mod error;
pub mod line;
pub mod metric;
pub mod point;

#[doc(inline)]
pub use error::GeoError;
#[doc(inline)]
pub use line::parse_road;
#[doc(inline)]
pub use metric::{Metric, travel_seconds};
#[doc(inline)]
pub use point::almost_equal;
