pub mod approx;
pub mod combinatorial;
pub mod graph;
pub mod randomized;

// Re-export all modules
pub use approx::*;
pub use combinatorial::*;
pub use graph::*;
pub use randomized::*;
