//! A generic A* search over any graph exposing adjacency and a heuristic,
//! and the adapter presenting a [`RoadNetwork`](crate::graph::RoadNetwork)
//! as such a graph.

pub mod adapter;
pub mod cost;
pub mod definition;
pub mod solver;

#[doc(inline)]
pub use adapter::{DirectedPos, RoadGraph};
#[doc(inline)]
pub use cost::Cost;
#[doc(inline)]
pub use definition::{SearchEdge, SearchGraph};
#[doc(inline)]
pub use solver::astar;
