//! Provides the `WeakLearner` and `Learner` traits.

use crate::Classifier;
use crate::Sample;


/// A learner that trains under a distribution over the examples.
/// Boosting algorithms feed their current distribution
/// to `produce` on every round.
pub trait WeakLearner {
    /// The type the weak learner returns.
    type Hypothesis: Classifier;


    /// Returns the name of the weak learner.
    fn name(&self) -> &str {
        "Weak Learner"
    }


    /// Trains a hypothesis under the given distribution.
    /// `dist` must be a probability vector
    /// with one entry per example in `sample`.
    fn produce(&self, sample: &Sample, dist: &[f64]) -> Self::Hypothesis;
}


/// A learner that trains on the plain, unweighted sample.
/// Every [`WeakLearner`] is a `Learner`
/// through the uniform distribution.
pub trait Learner {
    /// The type the learner returns.
    type Hypothesis: Classifier;


    /// Returns the name of the learner.
    fn name(&self) -> &str {
        "Learner"
    }


    /// Trains a hypothesis on the given sample.
    fn fit(&self, sample: &Sample) -> Self::Hypothesis;
}


impl<W: WeakLearner> Learner for W {
    type Hypothesis = W::Hypothesis;


    fn name(&self) -> &str {
        WeakLearner::name(self)
    }


    fn fit(&self, sample: &Sample) -> Self::Hypothesis {
        let n_sample = sample.shape().0;
        let uni = 1f64 / n_sample as f64;
        let dist = vec![uni; n_sample];

        self.produce(sample, &dist[..])
    }
}
