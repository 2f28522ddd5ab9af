//! Adapts an unweighted [`Learner`] to the weighted protocol
//! by weighted resampling.

use rand::SeedableRng;
use rand::rngs::StdRng;

use std::cell::RefCell;

use crate::{Learner, Sample, WeakLearner};
use crate::common::checker;
use crate::common::utils;


/// `Resampling<L>` wraps an unweighted learner `L`
/// and trains it under a distribution:
/// `produce` draws a training multiset of the original size
/// by weighted replication over the example indices,
/// then calls the inner learner's ordinary `fit` on the copy.
/// This lets any unweighted learner run inside boosting unmodified.
///
/// The wrapper owns its random stream,
/// seeded at construction time for reproducibility.
pub struct Resampling<L> {
    base: L,
    rng: RefCell<StdRng>,
}


impl<L> Resampling<L> {
    /// Wrap `base` with a resampling stream seeded by `seed`.
    pub fn new(base: L, seed: u64) -> Self {
        Self {
            base,
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }


    /// Returns a reference to the wrapped learner.
    pub fn base(&self) -> &L {
        &self.base
    }
}


impl<L> WeakLearner for Resampling<L>
    where L: Learner,
{
    type Hypothesis = L::Hypothesis;


    fn name(&self) -> &str {
        "Resampling"
    }


    fn produce(&self, sample: &Sample, dist: &[f64]) -> Self::Hypothesis {
        checker::check_sample(sample);
        checker::check_distribution(sample, dist);

        let n_sample = sample.shape().0;
        let indices = (0..n_sample).collect::<Vec<_>>();

        let mut rng = self.rng.borrow_mut();
        let picked = utils::weighted_replicate(
            &indices[..], dist, n_sample, &mut *rng
        );

        self.base.fit(&sample.subsample(&picked[..]))
    }
}
