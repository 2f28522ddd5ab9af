//! Errors the classifiers can return.

use thiserror::Error;


/// The errors a fitted hypothesis can raise at prediction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The example to classify does not match the trained arity.
    #[error("invalid input: expected {expected} features, got {got}")]
    InvalidInput {
        /// The number of features the hypothesis was trained on.
        expected: usize,
        /// The number of features the example carries.
        got: usize,
    },

    /// An ensemble with no members was asked for a prediction.
    #[error("the ensemble has no hypotheses to vote")]
    EmptyEnsemble,

    /// A class name missing from the training sample.
    #[error("unknown class `{0}`")]
    UnknownClass(String),
}
