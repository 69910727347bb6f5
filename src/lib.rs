#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod graph;
pub mod position;
pub mod road;
pub mod router;
pub mod search;

#[doc(inline)]
pub use config::GraphConfig;
#[doc(inline)]
pub use error::{ConfigError, RoadError, RouteError};
#[doc(inline)]
pub use graph::{MemoryNetwork, Reconstruct, RoadNetwork, Route, RouteSink, Turns, Vicinity};
#[doc(inline)]
pub use position::{FeatureId, RoadPos, RoadSegment};
#[doc(inline)]
pub use road::{PossibleTurn, RoadEdge, RoadInfo};
#[doc(inline)]
pub use router::{RouteRequest, Router};
