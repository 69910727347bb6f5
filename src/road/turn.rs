use crate::position::RoadPos;

use geo::Point;

/// A turn from the road being travelled onto a new road position.
///
/// Everything but [`pos`](#structfield.pos) describes the *old* road:
/// the segment travelled to reach the turn, its speed, and what it
/// cost to get there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PossibleTurn {
    /// The position turned onto.
    pub pos: RoadPos,

    /// Start point of the travelled segment.
    pub start_point: Point,
    /// End point of the travelled segment, where the turn is taken.
    pub end_point: Point,

    /// Speed on the travelled road.
    pub speed_kmph: f64,

    pub meters_covered: f64,
    pub seconds_covered: f64,
}

impl PossibleTurn {
    /// A turn onto `pos` which costs nothing to take, as from an anchor
    /// that is already at its vicinity positions.
    pub fn immediate(pos: RoadPos) -> Self {
        let at = pos.endpoint();

        Self {
            pos,
            start_point: at,
            end_point: at,
            speed_kmph: 0.0,
            meters_covered: 0.0,
            seconds_covered: 0.0,
        }
    }

    /// The same turn, onto a different position.
    pub fn onto(&self, pos: RoadPos) -> Self {
        Self { pos, ..*self }
    }
}
