pub mod adjacency;
pub mod connectivity;
pub mod exhaustive_cover;
pub mod traversal;

pub use adjacency::{Graph, NodeId};
pub use connectivity::{has_cycle, is_connected};
pub use exhaustive_cover::{
    is_independent_set, is_vertex_cover, max_independent_set, minimum_vertex_cover,
};
pub use traversal::{
    bfs_path, bfs_predecessors, bfs_reachable, dfs_path, dfs_predecessors, dfs_reachable,
    path_to, Predecessors,
};
