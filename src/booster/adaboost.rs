//! The AdaBoost algorithm.

mod adaboost_algorithm;


pub use adaboost_algorithm::AdaBoost;
