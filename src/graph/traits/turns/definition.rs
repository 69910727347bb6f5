use crate::error::RoadError;
use crate::position::RoadSegment;
use crate::road::PossibleTurn;

pub trait Turns {
    /// Finds every turn reachable from the end of `pos`'s segment.
    ///
    /// The segment's end point is taken as the cross point. Every road
    /// passing through it, the current one included, contributes a turn
    /// onto each of its segments that can be entered there: forward out
    /// of the point, and backward out of it when the road is bidirectional.
    /// The immediate U-turn back onto `pos`'s own segment is excluded.
    ///
    /// Each turn carries the cost of travelling `pos`'s segment, which is
    /// what must be covered before the turn can be taken.
    ///
    /// An empty result is a dead end, not an error.
    fn nearest_turns(&self, pos: &RoadSegment) -> Result<Vec<PossibleTurn>, RoadError>;
}
