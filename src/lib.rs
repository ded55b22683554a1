//! Small undirected graphs with traversal, cycle and connectivity checks, and
//! exact and approximate vertex cover and independent set solvers.

pub mod cs;
pub mod error;

pub use cs::{approx, combinatorial, graph, randomized};
pub use error::{GraphError, Result};
