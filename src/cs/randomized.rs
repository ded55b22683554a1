pub mod random_graph;

pub use random_graph::{random_graph, random_graph_thread_rng};
