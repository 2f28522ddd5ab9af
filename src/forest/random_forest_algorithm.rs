//! This file defines the random forest learner,
//! a bagging ensemble over the decision tree learner.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::{Learner, Sample, WeakLearner};
use crate::common::checker;
use crate::hypothesis::MajorityVote;
use crate::weak_learner::{
    Criterion,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
};


/// A struct that builds [`RandomForest`].
///
/// # Example
///
/// ```no_run
/// use minilearn::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let forest = RandomForestBuilder::new(&sample)
///     .n_trees(100)
///     .seed(7)
///     .build();
///
/// let f = forest.fit(&sample);
/// ```
pub struct RandomForestBuilder {
    n_trees: usize,
    max_depth: usize,
    sample_size: usize,
    n_features: Option<usize>,
    criterion: Criterion,
    seed: u64,
}


impl RandomForestBuilder {
    /// Construct a new instance of `RandomForestBuilder`.
    /// By default the forest grows `100` unbounded trees,
    /// each trained on a bootstrap replicate of the full sample size
    /// over every feature, with the seed `42`.
    pub fn new(sample: &Sample) -> Self {
        Self {
            n_trees: 100,
            max_depth: usize::MAX,
            sample_size: sample.shape().0,
            n_features: None,
            criterion: Criterion::Entropy,
            seed: 42,
        }
    }


    /// Set the number of trees in the forest.
    pub fn n_trees(mut self, n_trees: usize) -> Self {
        self.n_trees = n_trees;
        self
    }


    /// Limit the depth of each tree.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }


    /// Set the size of the bootstrap replicate each tree trains on.
    pub fn sample_size(mut self, size: usize) -> Self {
        self.sample_size = size;
        self
    }


    /// Let each tree consider a random subset of the features
    /// of the given size, drawn without replacement.
    pub fn n_features(mut self, n_features: usize) -> Self {
        self.n_features = Some(n_features);
        self
    }


    /// Set the splitting criterion of each tree.
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }


    /// Set the seed of the random stream
    /// that drives the bootstrap and the feature subsets.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Build a [`RandomForest`] from the kept parameters.
    pub fn build(self) -> RandomForest {
        RandomForest {
            n_trees: self.n_trees,
            max_depth: self.max_depth,
            sample_size: self.sample_size,
            n_features: self.n_features,
            criterion: self.criterion,
            seed: self.seed,
        }
    }
}


/// The random forest learner.
/// `fit` grows `n_trees` decision trees in parallel,
/// each over its own bootstrap replicate of the training sample
/// (expressed as a distribution of replicate counts)
/// and, optionally, its own random subset of the features.
/// The returned hypothesis predicts by unweighted majority vote.
///
/// Tree `t` draws from a stream seeded by `seed + t`,
/// so a forest is reproducible given its seed
/// regardless of how the trees are scheduled.
pub struct RandomForest {
    n_trees: usize,
    max_depth: usize,
    sample_size: usize,
    n_features: Option<usize>,
    criterion: Criterion,
    seed: u64,
}


impl Learner for RandomForest {
    type Hypothesis = MajorityVote<DecisionTreeClassifier>;


    fn name(&self) -> &str {
        "Random Forest"
    }


    fn fit(&self, sample: &Sample) -> Self::Hypothesis {
        checker::check_sample(sample);

        let (n_sample, n_feature) = sample.shape();

        let hypotheses = (0..self.n_trees)
            .into_par_iter()
            .map(|t| {
                let mut rng = StdRng::seed_from_u64(
                    self.seed.wrapping_add(t as u64)
                );

                // Bootstrap replicate, kept as a distribution
                // of replicate counts.
                let mut counts = vec![0usize; n_sample];
                for _ in 0..self.sample_size {
                    counts[rng.gen_range(0..n_sample)] += 1;
                }
                let dist = counts.into_iter()
                    .map(|c| c as f64 / self.sample_size as f64)
                    .collect::<Vec<_>>();

                let features = match self.n_features {
                    Some(k) => {
                        let k = k.min(n_feature);
                        let mut subset = rand::seq::index::sample(
                            &mut rng, n_feature, k
                        ).into_vec();
                        subset.sort_unstable();
                        subset
                    },
                    None => (0..n_feature).collect::<Vec<_>>(),
                };

                let tree = DecisionTreeBuilder::new(sample)
                    .criterion(self.criterion)
                    .max_depth(self.max_depth)
                    .features(features)
                    .build();

                tree.produce(sample, &dist[..])
            })
            .collect::<Vec<_>>();

        MajorityVote::from_hypotheses(hypotheses)
    }
}
