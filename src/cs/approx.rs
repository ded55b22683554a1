pub mod vertex_cover;

pub use vertex_cover::{
    approx_highest_degree, approx_random_edge, approx_random_vertex, CoverHeuristic,
};
