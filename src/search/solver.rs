use super::{Cost, SearchEdge, SearchGraph};

use log::debug;
use std::cell::RefCell;

/// Searches `graph` from `start` for the cheapest path to any vertex
/// satisfying `success`, guided by `heuristic`.
///
/// Returns the path, `start` and goal included, with its total cost, or
/// `None` if no goal is reachable. The first error raised while expanding
/// a vertex ends the search and is returned instead.
pub fn astar<G, FH, FS>(
    graph: &G,
    start: &G::Vertex,
    mut heuristic: FH,
    mut success: FS,
) -> Result<Option<(Vec<G::Vertex>, Cost)>, G::Error>
where
    G: SearchGraph + ?Sized,
    FH: FnMut(&G::Vertex) -> f64,
    FS: FnMut(&G::Vertex) -> bool,
{
    let failure = RefCell::new(None);
    let mut expanded = 0usize;

    let found = pathfinding::prelude::astar(
        start,
        |vertex| {
            expanded += 1;

            match graph.adjacency_list(vertex) {
                Ok(edges) => edges
                    .iter()
                    .map(|edge| (edge.target(), Cost::from(edge.weight())))
                    .collect::<Vec<_>>(),
                Err(err) => {
                    failure.borrow_mut().get_or_insert(err);
                    Vec::new()
                }
            }
        },
        |vertex| Cost::from(heuristic(vertex)),
        // A pending failure ends the search at the next vertex popped.
        |vertex| failure.borrow().is_some() || success(vertex),
    );

    debug!("Expanded {expanded} vertices");

    if let Some(err) = failure.into_inner() {
        return Err(err);
    }

    Ok(found)
}
