//! Exports the standard boosting interfaces and algorithms.
//!
//! ```
//! use minilearn::prelude::*;
//! ```

pub use crate::error::Error;

pub use crate::sample::{
    Feature,
    Sample,
    SampleReader,
};

pub use crate::hypothesis::{
    Classifier,
    MajorityVote,
    WeightedMajority,
};

pub use crate::weak_learner::{
    Criterion,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Learner,
    Plurality,
    PluralityClassifier,
    Resampling,
    WeakLearner,
    information_content,
};

pub use crate::booster::{
    AdaBoost,
    Booster,
};

pub use crate::forest::{
    RandomForest,
    RandomForestBuilder,
};

pub use crate::common::evaluation::{
    error_ratio,
    grade,
};

pub use crate::common::utils::{
    weighted_mode,
    weighted_replicate,
    weighted_sample_with_replacement,
};
