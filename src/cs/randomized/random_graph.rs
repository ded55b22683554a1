use log::debug;
use rand::Rng;

use crate::cs::graph::Graph;
use crate::error::Result;

/// Returns a graph on `nodes` nodes with `edges` distinct random edges.
///
/// Endpoints are drawn uniformly and pairs that would form a self-loop or
/// repeat an existing edge are rejected and redrawn. The edge count is capped
/// at `nodes * (nodes - 1) / 2`, the size of the complete graph.
///
/// # Example
/// ```
/// use cover::cs::randomized::random_graph;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(2024);
/// let g = random_graph(10, 15, &mut rng).unwrap();
/// assert_eq!(g.number_of_nodes(), 10);
/// assert_eq!(g.number_of_edges(), 15);
/// ```
pub fn random_graph<R: Rng + ?Sized>(nodes: usize, edges: usize, rng: &mut R) -> Result<Graph> {
    let max_edges = nodes * nodes.saturating_sub(1) / 2;
    let target = edges.min(max_edges);
    let mut graph = Graph::new(nodes);

    let mut added = 0;
    let mut draws = 0usize;
    while added < target {
        let u = rng.gen_range(0..nodes);
        let v = rng.gen_range(0..nodes);
        draws += 1;
        if u != v && !graph.are_connected(u, v)? {
            graph.add_edge(u, v)?;
            added += 1;
        }
    }

    debug!(
        "random graph: {} nodes, {} edges after {} draws",
        nodes, added, draws
    );
    Ok(graph)
}

/// [`random_graph`] driven by the thread-local generator.
pub fn random_graph_thread_rng(nodes: usize, edges: usize) -> Result<Graph> {
    random_graph(nodes, edges, &mut rand::thread_rng())
}
