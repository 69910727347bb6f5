use crate::error::RoadError;
use crate::position::RoadPos;
use crate::road::PossibleTurn;

use log::debug;

/// Which anchors of a [`Vicinity`] have had their turns set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VicinityState {
    Empty,
    StartSet,
    FinalSet,
    BothSet,
}

/// The turns leaving the synthetic anchors of one route request.
///
/// Start and finish coordinates rarely fall on a road, so rather than
/// discovering their turns from road geometry, the request supplies the
/// real positions nearby. A `Vicinity` belongs to a single request; it
/// is handed to the search explicitly, so requests sharing one
/// [`RoadNetwork`](crate::graph::RoadNetwork) cannot see each other's anchors.
#[derive(Debug, Clone, Default)]
pub struct Vicinity {
    start: Option<Vec<PossibleTurn>>,
    finish: Option<Vec<PossibleTurn>>,
}

impl Vicinity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the turns from `anchor` to each of the `vicinity` positions.
    ///
    /// Turns are free to take: the anchor is considered already at every
    /// vicinity position. Setting an anchor again replaces its turns.
    pub fn set_fake_turns(&mut self, anchor: &RoadPos, vicinity: &[RoadPos]) -> Result<(), RoadError> {
        if let Some(pos) = vicinity.iter().find(|pos| pos.is_anchor()) {
            return Err(RoadError::AnchorInVicinity(*pos));
        }

        let slot = match anchor {
            RoadPos::Start(_) => &mut self.start,
            RoadPos::Final(_) => &mut self.finish,
            RoadPos::Real(_) => return Err(RoadError::NotAnAnchor(*anchor)),
        };

        let turns = vicinity
            .iter()
            .map(|pos| PossibleTurn::immediate(*pos))
            .collect::<Vec<_>>();

        debug!("Setting {} fake turns from {anchor}", turns.len());
        *slot = Some(turns);

        Ok(())
    }

    /// Turns leaving `anchor`, or `None` if they were never set
    /// (or `anchor` is a real position).
    pub fn turns(&self, anchor: &RoadPos) -> Option<&[PossibleTurn]> {
        match anchor {
            RoadPos::Start(_) => self.start.as_deref(),
            RoadPos::Final(_) => self.finish.as_deref(),
            RoadPos::Real(_) => None,
        }
    }

    /// Whether `pos` is one of the positions next to the final anchor.
    pub fn reaches_final(&self, pos: &RoadPos) -> bool {
        self.finish
            .as_deref()
            .is_some_and(|turns| turns.iter().any(|turn| turn.pos == *pos))
    }

    pub fn state(&self) -> VicinityState {
        match (&self.start, &self.finish) {
            (None, None) => VicinityState::Empty,
            (Some(_), None) => VicinityState::StartSet,
            (None, Some(_)) => VicinityState::FinalSet,
            (Some(_), Some(_)) => VicinityState::BothSet,
        }
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.finish = None;
    }
}
