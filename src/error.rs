use crate::cs::graph::NodeId;

/// Errors raised by graph construction and the algorithms built on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The identifier is not a node of the graph (never assigned, or removed).
    #[error("node {0} is not in the graph")]
    NodeNotFound(NodeId),

    /// Self-loops are not part of a simple undirected graph.
    #[error("self-loop on node {0} is not allowed")]
    SelfLoop(NodeId),

    /// The operation needs at least one edge to pick from.
    #[error("graph has no edges")]
    NoEdges,

    /// An exhaustive search was asked to enumerate more subsets than it can index.
    #[error("exhaustive search over {nodes} nodes exceeds the limit of {limit}")]
    TooLarge { nodes: usize, limit: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl GraphError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        GraphError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
