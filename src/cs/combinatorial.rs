pub mod power_set;

pub use power_set::{power_set, PowerSet, MAX_SUBSET_ELEMENTS};
