use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("could not parse wkt geometry: {0}")]
    InvalidWkt(String),

    #[error("a road requires at least two points, given {0}")]
    TooFewPoints(usize),
}
