//! # Exact Vertex Cover and Independent Set
//!
//! Exhaustive solvers that test every subset of the node set, in the order
//! produced by [`PowerSet`], and keep the best one seen. Ties go to whichever
//! optimal subset is enumerated first.
//!
//! Both solvers are exponential: 2^V subsets, each checked in O(V + E). They
//! are meant for graphs of roughly twenty nodes or fewer and refuse more than
//! [`MAX_SUBSET_ELEMENTS`] nodes outright.
//!
//! ```
//! use cover::cs::graph::{exhaustive_cover, Graph};
//! use std::collections::HashSet;
//!
//! let g = Graph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
//! let mvc = exhaustive_cover::minimum_vertex_cover(&g).unwrap();
//! assert_eq!(mvc.len(), 2);
//! assert!(exhaustive_cover::is_vertex_cover(&g, &mvc));
//!
//! let mis = exhaustive_cover::max_independent_set(&g).unwrap();
//! assert_eq!(mis, HashSet::from([1, 2]));
//! ```

use std::collections::HashSet;

use log::{debug, warn};

use crate::cs::combinatorial::power_set::{PowerSet, MAX_SUBSET_ELEMENTS};
use crate::cs::graph::{Graph, NodeId};
use crate::error::Result;

/// Node counts above this get a warning; the search will be slow.
const SLOW_SEARCH_NODES: usize = 24;

/// Returns `true` if every edge has at least one endpoint in `cover`.
pub fn is_vertex_cover(graph: &Graph, cover: &HashSet<NodeId>) -> bool {
    graph
        .edges()
        .all(|(u, v)| cover.contains(&u) || cover.contains(&v))
}

/// Returns `true` if no two members of `set` are adjacent. Identifiers that
/// are not nodes of the graph have no edges and never conflict.
pub fn is_independent_set(graph: &Graph, set: &HashSet<NodeId>) -> bool {
    set.iter().all(|&u| {
        graph
            .adjacent_nodes(u)
            .unwrap_or_default()
            .iter()
            .all(|v| !set.contains(v))
    })
}

/// Smallest vertex cover, found by exhaustive search.
pub fn minimum_vertex_cover(graph: &Graph) -> Result<HashSet<NodeId>> {
    let nodes = searchable_nodes(graph, "minimum vertex cover");
    let mut best: HashSet<NodeId> = nodes.iter().copied().collect();
    for subset in PowerSet::new(&nodes)? {
        if subset.len() >= best.len() {
            continue;
        }
        let candidate: HashSet<NodeId> = subset.into_iter().collect();
        if is_vertex_cover(graph, &candidate) {
            best = candidate;
        }
    }
    debug!("minimum vertex cover has {} nodes", best.len());
    Ok(best)
}

/// Largest independent set, found by exhaustive search.
pub fn max_independent_set(graph: &Graph) -> Result<HashSet<NodeId>> {
    let nodes = searchable_nodes(graph, "maximum independent set");
    let mut best = HashSet::new();
    for subset in PowerSet::new(&nodes)? {
        if subset.len() <= best.len() {
            continue;
        }
        let candidate: HashSet<NodeId> = subset.into_iter().collect();
        if is_independent_set(graph, &candidate) {
            best = candidate;
        }
    }
    debug!("maximum independent set has {} nodes", best.len());
    Ok(best)
}

fn searchable_nodes(graph: &Graph, what: &str) -> Vec<NodeId> {
    let nodes: Vec<NodeId> = graph.nodes().collect();
    if nodes.len() > SLOW_SEARCH_NODES && nodes.len() <= MAX_SUBSET_ELEMENTS {
        warn!(
            "exhaustive {} over {} nodes enumerates 2^{} subsets",
            what,
            nodes.len(),
            nodes.len()
        );
    }
    debug!("searching {} over {} nodes", what, nodes.len());
    nodes
}
