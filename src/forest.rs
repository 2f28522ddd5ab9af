//! Bagging ensembles of decision trees.

mod random_forest_algorithm;


pub use random_forest_algorithm::{RandomForest, RandomForestBuilder};
