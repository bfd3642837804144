//! Efficiency scoring of candidate paths and the shortest vs. most efficient
//! comparison built on top of both searches.

mod comparison;
mod efficiency;

pub use comparison::{PathComparison, compare_paths};
pub use efficiency::{
    DEFAULT_SPEED, EfficiencyInput, ScoredPath, calculate_efficiency, find_most_efficient_path,
    score_paths,
};
