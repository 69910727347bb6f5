use std::hash::Hash;

/// An outgoing edge of a [`SearchGraph`].
pub trait SearchEdge {
    type Vertex;

    fn target(&self) -> Self::Vertex;

    /// Cost of taking the edge. Must not be negative.
    fn weight(&self) -> f64;
}

/// The contract a graph fulfils to be searched by [`astar`](super::astar).
pub trait SearchGraph {
    type Vertex: Clone + Eq + Hash;
    type Edge: SearchEdge<Vertex = Self::Vertex>;
    type Error;

    /// Every edge leaving `vertex`.
    fn adjacency_list(&self, vertex: &Self::Vertex) -> Result<Vec<Self::Edge>, Self::Error>;

    /// A lower bound on the cost of travelling from `from` to `to`.
    ///
    /// Must never exceed the true cost (admissible), and must not drop by
    /// more than an edge's weight across that edge (consistent).
    fn heuristic_cost_estimate(&self, from: &Self::Vertex, to: &Self::Vertex) -> f64;
}
