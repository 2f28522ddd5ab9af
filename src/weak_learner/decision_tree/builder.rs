use crate::Sample;

use super::criterion::Criterion;
use super::decision_tree_algorithm::DecisionTree;


/// A struct that builds [`DecisionTree`].
/// `DecisionTreeBuilder` keeps the parameters of the tree
/// to be built and yields a learner once `build` is called.
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
/// let tree = DecisionTreeBuilder::new(&sample)
///     .max_depth(2)
///     .criterion(Criterion::Entropy)
///     .build();
/// ```
pub struct DecisionTreeBuilder<'a> {
    sample: &'a Sample,
    max_depth: usize,
    criterion: Criterion,
    features: Option<Vec<usize>>,
}


impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of `DecisionTreeBuilder`.
    /// By default, the tree is grown without a depth limit,
    /// splits by entropic impurity,
    /// and considers every feature at every node.
    pub fn new(sample: &'a Sample) -> Self {
        Self {
            sample,
            max_depth: usize::MAX,
            criterion: Criterion::Entropy,
            features: None,
        }
    }


    /// Limit the depth of the output tree.
    /// A tree of depth `0` is a single leaf.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }


    /// Set the splitting criterion.
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }


    /// Restrict the candidate features to the given column indices.
    pub fn features(mut self, features: Vec<usize>) -> Self {
        self.features = Some(features);
        self
    }


    /// Build a [`DecisionTree`] from the kept parameters.
    pub fn build(self) -> DecisionTree {
        let n_feature = self.sample.shape().1;
        let features = self.features
            .unwrap_or_else(|| (0..n_feature).collect());

        DecisionTree::from_components(
            self.criterion, self.max_depth, features,
        )
    }
}
