//! Provides the boosting framework and the boosting algorithm.

mod core;
mod adaboost;


pub use self::core::Booster;
pub use self::adaboost::AdaBoost;
