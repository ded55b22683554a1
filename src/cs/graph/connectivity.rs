//! Cycle detection and connectivity for undirected graphs.

use std::collections::{HashSet, VecDeque};

use crate::cs::graph::{Graph, NodeId};

/// Returns `true` if the graph contains a cycle.
///
/// Runs a depth-first search from every undiscovered node, so cycles in any
/// component are found. An edge back to an already visited node other than
/// the one just arrived from closes a cycle.
///
/// # Examples
/// ```
/// use cover::cs::graph::{has_cycle, Graph};
///
/// let triangle = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
/// assert!(has_cycle(&triangle));
///
/// let path = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
/// assert!(!has_cycle(&path));
/// ```
///
/// # Complexity
/// * Time: O(V + E)
/// * Space: O(V), recursion depth at most V
pub fn has_cycle(graph: &Graph) -> bool {
    let mut visited = HashSet::new();
    for node in graph.nodes() {
        if !visited.contains(&node) && closes_cycle(graph, node, None, &mut visited) {
            return true;
        }
    }
    false
}

fn closes_cycle(
    graph: &Graph,
    current: NodeId,
    parent: Option<NodeId>,
    visited: &mut HashSet<NodeId>,
) -> bool {
    visited.insert(current);
    for &next in graph.adjacent_nodes(current).unwrap_or_default() {
        if !visited.contains(&next) {
            if closes_cycle(graph, next, Some(current), visited) {
                return true;
            }
        } else if Some(next) != parent {
            return true;
        }
    }
    false
}

/// Returns `true` if a breadth-first search from the lowest node identifier
/// reaches every node. A graph with no nodes counts as connected.
///
/// # Examples
/// ```
/// use cover::cs::graph::{is_connected, Graph};
///
/// let mut g = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
/// assert!(is_connected(&g));
///
/// g.add_node();
/// assert!(!is_connected(&g));
/// ```
pub fn is_connected(graph: &Graph) -> bool {
    let Some(start) = graph.nodes().next() else {
        return true;
    };

    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        for &next in graph.adjacent_nodes(node).unwrap_or_default() {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen.len() == graph.number_of_nodes()
}
