//! # Breadth-First and Depth-First Search
//!
//! Reachability tests, path search and predecessor trees over an undirected
//! [`Graph`]. None of these functions mutate the graph, and every one of them
//! fails with [`GraphError::NodeNotFound`] if `src` or `dst` is not a node.
//!
//! The reachability tests answer `true` as soon as `dst` shows up as a
//! neighbour of the node being expanded, before it is ever queued. One
//! consequence is that `bfs_reachable(g, v, v)` is `true` only when `v` has
//! at least one edge.
//!
//! Recursive variants (`dfs_path`, `dfs_predecessors`) recurse at most once
//! per node, so their depth is bounded by the node count.
//!
//! ```
//! use cover::cs::graph::{traversal, Graph};
//!
//! let g = Graph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
//! assert!(traversal::bfs_reachable(&g, 0, 3).unwrap());
//! assert_eq!(traversal::bfs_path(&g, 0, 3).unwrap(), vec![0, 1, 3]);
//!
//! let preds = traversal::bfs_predecessors(&g, 0).unwrap();
//! assert_eq!(traversal::path_to(&preds, 0, 3), vec![0, 1, 3]);
//! ```
//!
//! [`GraphError::NodeNotFound`]: crate::error::GraphError::NodeNotFound

use std::collections::{HashMap, HashSet, VecDeque};

use crate::cs::graph::{Graph, NodeId};
use crate::error::Result;

/// Maps each reached node to the node that discovered it. The source has no entry.
pub type Predecessors = HashMap<NodeId, NodeId>;

/// Whether `dst` is reachable from `src`, searching breadth-first.
pub fn bfs_reachable(graph: &Graph, src: NodeId, dst: NodeId) -> Result<bool> {
    graph.check_node(src)?;
    graph.check_node(dst)?;

    let mut queue = VecDeque::from([src]);
    let mut marked = HashSet::from([src]);
    while let Some(current) = queue.pop_front() {
        for &next in graph.adjacent_nodes(current)? {
            if next == dst {
                return Ok(true);
            }
            if marked.insert(next) {
                queue.push_back(next);
            }
        }
    }
    Ok(false)
}

/// Whether `dst` is reachable from `src`, searching depth-first with an
/// explicit stack. Nodes are marked when popped, so a node can sit on the
/// stack more than once.
pub fn dfs_reachable(graph: &Graph, src: NodeId, dst: NodeId) -> Result<bool> {
    graph.check_node(src)?;
    graph.check_node(dst)?;

    let mut stack = vec![src];
    let mut marked = HashSet::new();
    while let Some(current) = stack.pop() {
        if !marked.insert(current) {
            continue;
        }
        for &next in graph.adjacent_nodes(current)? {
            if next == dst {
                return Ok(true);
            }
            if !marked.contains(&next) {
                stack.push(next);
            }
        }
    }
    Ok(false)
}

/// A shortest path (by edge count) from `src` to `dst`, both inclusive, or
/// an empty vector if `dst` is unreachable.
pub fn bfs_path(graph: &Graph, src: NodeId, dst: NodeId) -> Result<Vec<NodeId>> {
    graph.check_node(src)?;
    graph.check_node(dst)?;

    let mut visited = HashSet::from([src]);
    let mut queue = VecDeque::from([(src, vec![src])]);
    while let Some((current, path)) = queue.pop_front() {
        if current == dst {
            return Ok(path);
        }
        for &next in graph.adjacent_nodes(current)? {
            if visited.insert(next) {
                let mut next_path = path.clone();
                next_path.push(next);
                queue.push_back((next, next_path));
            }
        }
    }
    Ok(Vec::new())
}

/// Some path from `src` to `dst`, both inclusive, found by backtracking
/// depth-first search; empty if `dst` is unreachable. Not necessarily shortest.
pub fn dfs_path(graph: &Graph, src: NodeId, dst: NodeId) -> Result<Vec<NodeId>> {
    graph.check_node(src)?;
    graph.check_node(dst)?;

    let mut visited = HashSet::new();
    let mut path = Vec::new();
    if extend_path(graph, src, dst, &mut visited, &mut path)? {
        Ok(path)
    } else {
        Ok(Vec::new())
    }
}

/// Pushes `current` onto `path` and keeps it there only if `dst` is reached
/// through it.
fn extend_path(
    graph: &Graph,
    current: NodeId,
    dst: NodeId,
    visited: &mut HashSet<NodeId>,
    path: &mut Vec<NodeId>,
) -> Result<bool> {
    visited.insert(current);
    path.push(current);
    if current == dst {
        return Ok(true);
    }
    for &next in graph.adjacent_nodes(current)? {
        if !visited.contains(&next) && extend_path(graph, next, dst, visited, path)? {
            return Ok(true);
        }
    }
    path.pop();
    Ok(false)
}

/// Breadth-first search tree rooted at `src`.
pub fn bfs_predecessors(graph: &Graph, src: NodeId) -> Result<Predecessors> {
    graph.check_node(src)?;

    let mut predecessors = Predecessors::new();
    let mut marked = HashSet::from([src]);
    let mut queue = VecDeque::from([src]);
    while let Some(current) = queue.pop_front() {
        for &next in graph.adjacent_nodes(current)? {
            if marked.insert(next) {
                predecessors.insert(next, current);
                queue.push_back(next);
            }
        }
    }
    Ok(predecessors)
}

/// Depth-first search tree rooted at `src`.
pub fn dfs_predecessors(graph: &Graph, src: NodeId) -> Result<Predecessors> {
    graph.check_node(src)?;

    let mut predecessors = Predecessors::new();
    let mut marked = HashSet::from([src]);
    explore(graph, src, &mut marked, &mut predecessors)?;
    Ok(predecessors)
}

fn explore(
    graph: &Graph,
    current: NodeId,
    marked: &mut HashSet<NodeId>,
    predecessors: &mut Predecessors,
) -> Result<()> {
    for &next in graph.adjacent_nodes(current)? {
        if marked.insert(next) {
            predecessors.insert(next, current);
            explore(graph, next, marked, predecessors)?;
        }
    }
    Ok(())
}

/// Walks a predecessor tree back from `dst` to `src`. Returns the path in
/// forward order, or an empty vector if `dst` is not in the tree.
pub fn path_to(predecessors: &Predecessors, src: NodeId, dst: NodeId) -> Vec<NodeId> {
    let mut path = vec![dst];
    let mut current = dst;
    while current != src {
        match predecessors.get(&current) {
            // A well-formed tree never revisits a node; bail out on a cycle.
            Some(&prev) if path.len() <= predecessors.len() => {
                path.push(prev);
                current = prev;
            }
            _ => return Vec::new(),
        }
    }
    path.reverse();
    path
}
