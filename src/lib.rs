#![warn(missing_docs)]

//! A crate that provides supervised learning algorithms
//! for small, tabular classification problems.
//!
//! # What this crate provides
//!
//! This crate provides followings:
//! - A [`Sample`] type holding a column-major feature table
//!   and an interned categorical target,
//!   read from CSV by [`SampleReader`].
//! - Learners:
//!   the decision tree ([`DecisionTreeBuilder`]),
//!   the plurality learner ([`Plurality`]),
//!   and the random forest ([`RandomForestBuilder`]).
//! - Boosting:
//!   [`AdaBoost`] over any [`WeakLearner`],
//!   and the [`Resampling`] wrapper that lifts
//!   an unweighted [`Learner`] to the weighted protocol.
//! - Ensembles:
//!   the weighted vote [`WeightedMajority`]
//!   and the unweighted vote [`MajorityVote`].
//!
//! # Example
//!
//! ```no_run
//! use minilearn::prelude::*;
//!
//! // Read the training sample from the CSV file.
//! // We use the column named `class` as the label.
//! let sample = SampleReader::new()
//!     .file("/path/to/file.csv")
//!     .has_header(true)
//!     .target_feature("class")
//!     .read()
//!     .unwrap();
//!
//! // Train a depth-2 decision tree under the uniform distribution.
//! let tree = DecisionTreeBuilder::new(&sample)
//!     .max_depth(2)
//!     .build();
//! let f = tree.fit(&sample);
//!
//! // Get the predictions on the training set.
//! let predictions = f.predict_all(&sample).unwrap();
//! ```

pub mod error;
pub mod common;
pub mod sample;
pub mod hypothesis;
pub mod weak_learner;
pub mod booster;
pub mod forest;
pub mod prelude;


pub use error::Error;

pub use sample::{
    Feature,
    Sample,
    SampleReader,
};

pub use hypothesis::{
    Classifier,
    MajorityVote,
    WeightedMajority,
};

pub use weak_learner::{
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

pub use booster::{
    AdaBoost,
    Booster,
};

pub use forest::{
    RandomForest,
    RandomForestBuilder,
};

pub use common::evaluation::{
    error_ratio,
    grade,
};

pub use common::utils::{
    weighted_mode,
    weighted_replicate,
    weighted_sample_with_replacement,
};
