use crate::position::{FeatureId, RoadPos};

use thiserror::Error;
use turnroute_geo::GeoError;

/// Integrity failures of the road graph and the data backing it.
///
/// None of these are transient: repeating the call against the same
/// data cannot succeed, so they are surfaced to the caller directly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoadError {
    #[error("feature {0} does not exist in the road network")]
    UnknownFeature(FeatureId),

    #[error("invalid road data for feature {feature}: {reason}")]
    InvalidRoadData { feature: FeatureId, reason: String },

    #[error("positions {index} and {} share no geometry", .index + 1)]
    InconsistentPath { index: usize },

    #[error("cannot reconstruct a path from no positions")]
    EmptyPath,

    #[error("{0} is not a synthetic anchor")]
    NotAnAnchor(RoadPos),

    #[error("anchor {0} cannot be part of a vicinity")]
    AnchorInVicinity(RoadPos),

    #[error("could not load road geometry: {0}")]
    Geometry(#[from] GeoError),
}

impl RoadError {
    pub(crate) fn invalid(feature: FeatureId, reason: impl Into<String>) -> Self {
        RoadError::InvalidRoadData {
            feature,
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error(transparent)]
    Road(#[from] RoadError),

    #[error("no vicinity positions were given for the {0} anchor")]
    EmptyVicinity(&'static str),

    #[error("could not find a route between the anchors")]
    NoRoute,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}
