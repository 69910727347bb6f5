use crate::position::RoadPos;
use crate::road::PossibleTurn;

/// A weighted edge of the search graph.
///
/// The weight is the travel time, in seconds, the search minimises.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadEdge {
    target: RoadPos,
    weight: f64,
}

impl RoadEdge {
    pub const fn new(target: RoadPos, weight: f64) -> Self {
        Self { target, weight }
    }

    #[inline]
    pub const fn target(&self) -> &RoadPos {
        &self.target
    }

    #[inline]
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

impl From<&PossibleTurn> for RoadEdge {
    fn from(turn: &PossibleTurn) -> Self {
        RoadEdge::new(turn.pos, turn.seconds_covered)
    }
}
