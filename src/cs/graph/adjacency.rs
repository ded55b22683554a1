//! # Undirected Adjacency-List Graph
//!
//! A simple undirected graph whose nodes are identified by dense integers.
//! `Graph::new(n)` creates nodes `0..n`, `add_node` hands out the next
//! identifier, and identifiers are never handed out twice, even after a
//! node has been removed. Removal therefore leaves gaps, so callers should
//! iterate `nodes()` rather than `0..number_of_nodes()`.
//!
//! The adjacency relation is kept symmetric and simple: every edge appears
//! in both endpoints' lists, there are no parallel edges, and self-loops are
//! rejected.
//!
//! ```
//! use cover::cs::graph::Graph;
//!
//! let mut g = Graph::new(3);
//! g.add_edge(0, 1).unwrap();
//! g.add_edge(1, 2).unwrap();
//! g.add_edge(1, 0).unwrap(); // already present, ignored
//!
//! assert!(g.are_connected(1, 0).unwrap());
//! assert_eq!(g.adjacent_nodes(1).unwrap(), &[0, 2]);
//! assert_eq!(g.number_of_edges(), 2);
//! ```

use std::collections::BTreeMap;

use crate::error::{GraphError, Result};

/// Node identifier.
pub type NodeId = usize;

/// Simple undirected graph with adjacency lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// For each node, its neighbours in insertion order.
    adj: BTreeMap<NodeId, Vec<NodeId>>,
    /// Identifier the next `add_node` will assign.
    next_id: NodeId,
}

impl Graph {
    /// Create a graph with `n` isolated nodes `0..n`.
    pub fn new(n: usize) -> Self {
        Graph {
            adj: (0..n).map(|v| (v, Vec::new())).collect(),
            next_id: n,
        }
    }

    /// Create a graph with `n` nodes and the given undirected edges.
    pub fn from_edges(n: usize, edges: &[(NodeId, NodeId)]) -> Result<Self> {
        let mut graph = Graph::new(n);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Append an isolated node and return its identifier.
    pub fn add_node(&mut self) -> NodeId {
        let id = self.next_id;
        self.adj.insert(id, Vec::new());
        self.next_id += 1;
        id
    }

    /// Add the undirected edge `{a, b}`. Adding an existing edge is a no-op.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        self.check_node(a)?;
        self.check_node(b)?;
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        if self.adj[&a].contains(&b) {
            return Ok(());
        }
        self.neighbours_mut(a)?.push(b);
        self.neighbours_mut(b)?.push(a);
        Ok(())
    }

    /// Remove the edge `{a, b}`, returning whether it was present.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> Result<bool> {
        self.check_node(b)?;
        let list = self.neighbours_mut(a)?;
        let Some(pos) = list.iter().position(|&n| n == b) else {
            return Ok(false);
        };
        list.remove(pos);
        self.neighbours_mut(b)?.retain(|&n| n != a);
        Ok(true)
    }

    /// Whether `b` is adjacent to `a`. Fails if `a` is not a node.
    pub fn are_connected(&self, a: NodeId, b: NodeId) -> Result<bool> {
        Ok(self.adjacent_nodes(a)?.contains(&b))
    }

    /// Neighbours of `a` in the order their edges were added.
    pub fn adjacent_nodes(&self, a: NodeId) -> Result<&[NodeId]> {
        self.adj
            .get(&a)
            .map(Vec::as_slice)
            .ok_or(GraphError::NodeNotFound(a))
    }

    pub fn degree(&self, a: NodeId) -> Result<usize> {
        Ok(self.adjacent_nodes(a)?.len())
    }

    /// Number of nodes currently in the graph. After removals this is not
    /// the largest identifier plus one.
    pub fn number_of_nodes(&self) -> usize {
        self.adj.len()
    }

    /// Alias for [`Graph::number_of_nodes`].
    pub fn size(&self) -> usize {
        self.number_of_nodes()
    }

    pub fn number_of_edges(&self) -> usize {
        self.adj.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn has_edges(&self) -> bool {
        self.adj.values().any(|list| !list.is_empty())
    }

    pub fn contains_node(&self, a: NodeId) -> bool {
        self.adj.contains_key(&a)
    }

    /// Node identifiers in increasing order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adj.keys().copied()
    }

    /// Every edge once, as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adj.iter().flat_map(|(&u, list)| {
            list.iter()
                .copied()
                .filter(move |&v| u < v)
                .map(move |v| (u, v))
        })
    }

    /// Drop every edge touching `a`; the node itself stays.
    pub fn isolate_node(&mut self, a: NodeId) -> Result<()> {
        let neighbours = std::mem::take(self.neighbours_mut(a)?);
        for n in neighbours {
            if let Some(list) = self.adj.get_mut(&n) {
                list.retain(|&x| x != a);
            }
        }
        Ok(())
    }

    /// Delete `a` and purge it from every other node's list. Its identifier
    /// is not reused.
    pub fn remove_node(&mut self, a: NodeId) -> Result<()> {
        self.isolate_node(a)?;
        self.adj.remove(&a);
        Ok(())
    }

    pub(crate) fn check_node(&self, a: NodeId) -> Result<()> {
        if self.adj.contains_key(&a) {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound(a))
        }
    }

    fn neighbours_mut(&mut self, a: NodeId) -> Result<&mut Vec<NodeId>> {
        self.adj.get_mut(&a).ok_or(GraphError::NodeNotFound(a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_has_isolated_nodes() {
        let g = Graph::new(4);
        assert_eq!(g.number_of_nodes(), 4);
        assert_eq!(g.size(), 4);
        assert_eq!(g.number_of_edges(), 0);
        assert!(!g.has_edges());
        for v in 0..4 {
            assert!(g.adjacent_nodes(v).unwrap().is_empty());
        }
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut g = Graph::new(3);
        g.add_edge(0, 2).unwrap();
        assert!(g.are_connected(0, 2).unwrap());
        assert!(g.are_connected(2, 0).unwrap());
        assert!(!g.are_connected(0, 1).unwrap());
    }

    #[test]
    fn test_add_edge_is_idempotent() {
        let mut g = Graph::new(2);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 0).unwrap();
        assert_eq!(g.adjacent_nodes(0).unwrap().len(), 1);
        assert_eq!(g.adjacent_nodes(1).unwrap().len(), 1);
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut g = Graph::new(2);
        assert_eq!(g.add_edge(1, 1), Err(GraphError::SelfLoop(1)));
        assert!(g.adjacent_nodes(1).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_node_is_an_error() {
        let mut g = Graph::new(2);
        assert_eq!(g.add_edge(0, 5), Err(GraphError::NodeNotFound(5)));
        assert_eq!(g.are_connected(9, 0), Err(GraphError::NodeNotFound(9)));
        assert_eq!(g.adjacent_nodes(3), Err(GraphError::NodeNotFound(3)));
        assert_eq!(g.remove_node(2), Err(GraphError::NodeNotFound(2)));
        // A failed call must not create the node.
        assert_eq!(g.number_of_nodes(), 2);
        assert!(!g.contains_node(5));
    }

    #[test]
    fn test_add_node_appends_next_identifier() {
        let mut g = Graph::new(2);
        assert_eq!(g.add_node(), 2);
        assert_eq!(g.number_of_nodes(), 3);
        g.add_edge(2, 0).unwrap();
        assert!(g.are_connected(0, 2).unwrap());
    }

    #[test]
    fn test_remove_node_purges_back_references() {
        let mut g = Graph::from_edges(4, &[(0, 1), (1, 2), (1, 3), (2, 3)]).unwrap();
        g.remove_node(1).unwrap();
        assert_eq!(g.number_of_nodes(), 3);
        assert!(!g.contains_node(1));
        assert!(g.adjacent_nodes(0).unwrap().is_empty());
        assert_eq!(g.adjacent_nodes(2).unwrap(), &[3]);
        assert_eq!(g.adjacent_nodes(3).unwrap(), &[2]);
        assert_eq!(g.nodes().collect::<Vec<_>>(), vec![0, 2, 3]);
    }

    #[test]
    fn test_identifiers_not_reused_after_removal() {
        let mut g = Graph::new(3);
        g.remove_node(2).unwrap();
        assert_eq!(g.add_node(), 3);
        assert!(!g.contains_node(2));
    }

    #[test]
    fn test_isolate_node_keeps_node() {
        let mut g = Graph::from_edges(3, &[(0, 1), (0, 2), (1, 2)]).unwrap();
        g.isolate_node(0).unwrap();
        assert!(g.contains_node(0));
        assert_eq!(g.degree(0).unwrap(), 0);
        assert_eq!(g.adjacent_nodes(1).unwrap(), &[2]);
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn test_remove_edge() {
        let mut g = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        assert!(g.remove_edge(1, 0).unwrap());
        assert!(!g.remove_edge(1, 0).unwrap());
        assert!(!g.are_connected(0, 1).unwrap());
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(1, 2)]);
    }

    #[test]
    fn test_edges_lists_each_edge_once() {
        let g = Graph::from_edges(4, &[(3, 0), (0, 1), (2, 1)]).unwrap();
        let mut edges: Vec<_> = g.edges().collect();
        edges.sort_unstable();
        assert_eq!(edges, vec![(0, 1), (0, 3), (1, 2)]);
    }

    #[test]
    fn test_clone_is_independent() {
        let g = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let mut copy = g.clone();
        copy.remove_node(1).unwrap();
        assert_eq!(g.number_of_edges(), 2);
        assert_eq!(copy.number_of_edges(), 0);
    }
}
