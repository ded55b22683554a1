use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cs::graph::exhaustive_cover::is_vertex_cover;
use crate::cs::graph::{Graph, NodeId};
use crate::error::{GraphError, Result};

/// Greedy vertex cover that repeatedly takes the node of highest degree.
///
/// Works on a private copy of the graph. Each round picks the node with the
/// most remaining edges (the lowest identifier wins ties), adds it to the
/// cover and deletes its edges from the copy. Stops as soon as the cover
/// covers every edge of `graph`, which is never modified.
///
/// A graph without edges yields an empty cover.
///
/// # Example
/// ```
/// use cover::cs::approx::vertex_cover::approx_highest_degree;
/// use cover::cs::graph::Graph;
/// use std::collections::HashSet;
///
/// let star = Graph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
/// assert_eq!(approx_highest_degree(&star), HashSet::from([0]));
/// ```
pub fn approx_highest_degree(graph: &Graph) -> HashSet<NodeId> {
    let mut working = graph.clone();
    let mut cover = HashSet::new();

    while !is_vertex_cover(graph, &cover) {
        // Every edge still uncovered in `graph` is still present in `working`.
        let Some(v) = highest_degree_node(&working) else {
            break;
        };
        trace!("highest degree: taking node {}", v);
        cover.insert(v);
        if working.isolate_node(v).is_err() {
            break;
        }
    }

    debug!("highest-degree cover has {} nodes", cover.len());
    cover
}

/// First node with the largest positive degree.
fn highest_degree_node(graph: &Graph) -> Option<NodeId> {
    let mut best = None;
    let mut max_degree = 0;
    for node in graph.nodes() {
        let degree = graph.degree(node).unwrap_or(0);
        if degree > max_degree {
            max_degree = degree;
            best = Some(node);
        }
    }
    best
}

/// Vertex cover built from uniformly random nodes.
///
/// Keeps adding a random node that is not yet in the cover until the cover
/// covers every edge. The graph is not copied or modified. The full node set
/// always covers a simple graph, so the loop ends before running out of
/// candidates.
pub fn approx_random_vertex<R: Rng + ?Sized>(graph: &Graph, rng: &mut R) -> HashSet<NodeId> {
    let mut remaining: Vec<NodeId> = graph.nodes().collect();
    let mut cover = HashSet::new();

    while !is_vertex_cover(graph, &cover) && !remaining.is_empty() {
        let v = remaining.swap_remove(rng.gen_range(0..remaining.len()));
        trace!("random vertex: taking node {}", v);
        cover.insert(v);
    }

    debug!("random-vertex cover has {} nodes", cover.len());
    cover
}

/// Vertex cover built from both endpoints of random edges.
///
/// Works on a private copy of the graph. Each round picks a random node that
/// still has edges, then a random neighbour of it, adds both to the cover and
/// deletes their edges from the copy. Stops once the cover covers every edge
/// of `graph`. Since the chosen edges form a matching, the cover is at most
/// twice the size of a minimum one.
///
/// # Errors
/// Returns [`GraphError::NoEdges`] if `graph` has no edges.
pub fn approx_random_edge<R: Rng + ?Sized>(graph: &Graph, rng: &mut R) -> Result<HashSet<NodeId>> {
    if !graph.has_edges() {
        return Err(GraphError::NoEdges);
    }

    let mut working = graph.clone();
    let mut cover = HashSet::new();

    while !is_vertex_cover(graph, &cover) {
        let candidates: Vec<NodeId> = working
            .nodes()
            .filter(|&v| working.degree(v).is_ok_and(|d| d > 0))
            .collect();
        let &u = candidates.choose(rng).ok_or(GraphError::NoEdges)?;
        let &v = working
            .adjacent_nodes(u)?
            .choose(rng)
            .ok_or(GraphError::NoEdges)?;
        trace!("random edge: taking ({}, {})", u, v);

        cover.insert(u);
        cover.insert(v);
        working.isolate_node(u)?;
        working.isolate_node(v)?;
    }

    debug!("random-edge cover has {} nodes", cover.len());
    Ok(cover)
}

/// Selects one of the approximate vertex cover strategies by value.
///
/// # Example
/// ```
/// use cover::cs::approx::vertex_cover::CoverHeuristic;
/// use cover::cs::graph::{exhaustive_cover::is_vertex_cover, Graph};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// for heuristic in CoverHeuristic::ALL {
///     let cover = heuristic.cover(&g, &mut rng).unwrap();
///     assert!(is_vertex_cover(&g, &cover));
/// }
///
/// assert_eq!("random-edge".parse::<CoverHeuristic>().unwrap(), CoverHeuristic::RandomEdge);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverHeuristic {
    HighestDegree,
    RandomVertex,
    RandomEdge,
}

impl CoverHeuristic {
    pub const ALL: [CoverHeuristic; 3] = [
        CoverHeuristic::HighestDegree,
        CoverHeuristic::RandomVertex,
        CoverHeuristic::RandomEdge,
    ];

    /// Runs the heuristic on `graph`. Only `RandomEdge` can fail, on a
    /// graph without edges.
    pub fn cover<R: Rng + ?Sized>(&self, graph: &Graph, rng: &mut R) -> Result<HashSet<NodeId>> {
        match self {
            CoverHeuristic::HighestDegree => Ok(approx_highest_degree(graph)),
            CoverHeuristic::RandomVertex => Ok(approx_random_vertex(graph, rng)),
            CoverHeuristic::RandomEdge => approx_random_edge(graph, rng),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CoverHeuristic::HighestDegree => "highest-degree",
            CoverHeuristic::RandomVertex => "random-vertex",
            CoverHeuristic::RandomEdge => "random-edge",
        }
    }
}

impl fmt::Display for CoverHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoverHeuristic {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        CoverHeuristic::ALL
            .into_iter()
            .find(|h| h.name() == s)
            .ok_or_else(|| GraphError::invalid_input(format!("unknown cover heuristic: {s}")))
    }
}
