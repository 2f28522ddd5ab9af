//! The files in the `weak_learner/` directory define
//! the learner traits and the learners themselves.

/// Provides the `WeakLearner` and `Learner` traits.
pub mod core;

/// Defines the plurality (majority-class) learner.
pub mod plurality;

/// Defines the weighted resampling wrapper.
pub mod resampling;

/// Defines the decision tree.
pub mod decision_tree;


pub use self::core::{Learner, WeakLearner};

pub use self::plurality::{Plurality, PluralityClassifier};

pub use self::resampling::Resampling;

pub use self::decision_tree::{
    Criterion,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    information_content,
};
