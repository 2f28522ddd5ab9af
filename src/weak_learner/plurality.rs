//! Provides the plurality learner,
//! the degenerate classifier the tree leaves reuse.

use serde::{Serialize, Deserialize};

use crate::{Classifier, Error, Sample, WeakLearner};
use crate::common::checker;
use crate::common::utils;


/// The plurality learner records the target label
/// with the largest total weight over the training sample
/// and predicts it for every example.
/// Ties keep the label encountered first.
pub struct Plurality;


impl Plurality {
    /// Construct a new instance of [`Plurality`].
    pub fn new() -> Self {
        Self
    }
}


impl Default for Plurality {
    fn default() -> Self {
        Self::new()
    }
}


impl WeakLearner for Plurality {
    type Hypothesis = PluralityClassifier;


    fn name(&self) -> &str {
        "Plurality"
    }


    fn produce(&self, sample: &Sample, dist: &[f64]) -> Self::Hypothesis {
        checker::check_sample(sample);
        checker::check_distribution(sample, dist);

        let target = sample.target();
        let labels = target.iter()
            .map(|y| *y as i64)
            .collect::<Vec<_>>();

        let label = utils::weighted_mode(&labels[..], dist)
            .expect("The sample has no examples");

        PluralityClassifier {
            label,
            n_feature: sample.shape().1,
        }
    }
}


/// The hypothesis [`Plurality`] returns.
/// Ignores the content of the example entirely,
/// apart from checking its arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluralityClassifier {
    pub(crate) label: i64,
    pub(crate) n_feature: usize,
}


impl Classifier for PluralityClassifier {
    fn predict(&self, x: &[f64]) -> Result<i64, Error> {
        if x.len() != self.n_feature {
            return Err(Error::InvalidInput {
                expected: self.n_feature,
                got: x.len(),
            });
        }

        Ok(self.label)
    }
}
