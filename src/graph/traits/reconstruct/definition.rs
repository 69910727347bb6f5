use crate::error::RoadError;
use crate::graph::RouteSink;
use crate::position::RoadPos;

pub trait Reconstruct {
    /// Rebuilds the real-world geometry and timing of a searched path.
    ///
    /// `positions` are the road positions of the path, in travel order,
    /// without the synthetic start and finish anchors. The route runs from
    /// the entry of the first position's segment to the end of the last's.
    ///
    /// Consecutive positions further along one road, in the same direction,
    /// contribute every road point between them. Otherwise the first must
    /// end where the second begins, or the path is inconsistent.
    fn reconstruct_path<R>(&self, positions: &[RoadPos], route: &mut R) -> Result<(), RoadError>
    where
        R: RouteSink + ?Sized;
}
