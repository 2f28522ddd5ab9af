//! Defines the decision tree learner and its inner representation.

mod builder;
mod criterion;
mod node;
mod decision_tree_algorithm;
mod decision_tree_classifier;


pub use builder::DecisionTreeBuilder;
pub use criterion::{Criterion, information_content};
pub use decision_tree_algorithm::DecisionTree;
pub use decision_tree_classifier::DecisionTreeClassifier;
