//! Value types exchanged between the map-data provider, turn discovery
//! and the search.

pub mod edge;
pub mod info;
pub mod turn;

pub use edge::RoadEdge;
pub use info::RoadInfo;
pub use turn::PossibleTurn;
