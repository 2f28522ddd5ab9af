//! Defines the decision tree learner.

use std::collections::BTreeMap;
use std::fmt;

use crate::{Sample, WeakLearner};
use crate::common::checker;

use super::criterion::{best_split, Criterion, SplitPlan};
use super::node::{BranchNode, Node, SplitRule};
use super::decision_tree_classifier::DecisionTreeClassifier;


/// The decision tree learner.
/// Given a sample and a distribution over its examples,
/// `produce` greedily grows a tree:
/// every node picks the feature whose split
/// maximizes the criterion's gain under the distribution,
/// and recursion stops at pure nodes, at the depth limit,
/// or when no candidate feature admits a split.
///
/// Numeric features split at a threshold and stay available
/// deeper in the tree;
/// categorical features branch once per observed code
/// and are removed below the split.
///
/// Use [`DecisionTreeBuilder`](super::DecisionTreeBuilder)
/// to construct this learner.
pub struct DecisionTree {
    criterion: Criterion,
    max_depth: usize,
    features: Vec<usize>,
}


impl DecisionTree {
    #[inline]
    pub(super) fn from_components(
        criterion: Criterion,
        max_depth: usize,
        features: Vec<usize>,
    ) -> Self
    {
        Self { criterion, max_depth, features, }
    }


    /// Grow a subtree over the examples listed in `indices`.
    fn grow(
        &self,
        sample: &Sample,
        dist: &[f64],
        indices: &[usize],
        features: &[usize],
        depth: usize,
    ) -> Node
    {
        let (label, loss) = plurality_and_loss(sample.target(), dist, indices);

        if loss <= 0f64 || depth == 0 || features.is_empty() {
            return Node::leaf(label);
        }

        let split = best_split(
            sample, dist, indices, features, self.criterion,
        );
        let (feature, plan) = match split {
            Some(found) => found,
            None => { return Node::leaf(label); },
        };

        let column = &sample.features()[feature];
        let rule = match plan {
            SplitPlan::Threshold(threshold) => {
                let (lhs, rhs): (Vec<usize>, Vec<usize>) = indices.iter()
                    .copied()
                    .partition(|&i| column[i] < threshold);

                if lhs.is_empty() || rhs.is_empty() {
                    return Node::leaf(label);
                }

                // Numeric features remain candidates below the split.
                let left = self.grow(sample, dist, &lhs, features, depth - 1);
                let right = self.grow(sample, dist, &rhs, features, depth - 1);

                SplitRule::Threshold {
                    threshold,
                    left: Box::new(left),
                    right: Box::new(right),
                }
            },
            SplitPlan::Category => {
                let mut groups: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
                for &i in indices {
                    groups.entry(column[i] as i64).or_default().push(i);
                }

                // A categorical feature is spent once split on.
                let rest = features.iter()
                    .copied()
                    .filter(|&f| f != feature)
                    .collect::<Vec<_>>();

                let arms = groups.into_iter()
                    .map(|(code, arm_indices)| {
                        let child = self.grow(
                            sample, dist, &arm_indices, &rest, depth - 1,
                        );
                        (code, child)
                    })
                    .collect::<BTreeMap<_, _>>();

                SplitRule::Category { arms }
            },
        };

        Node::Branch(BranchNode { feature, rule, fallback: label })
    }
}


impl WeakLearner for DecisionTree {
    type Hypothesis = DecisionTreeClassifier;


    fn name(&self) -> &str {
        "Decision Tree"
    }


    fn produce(&self, sample: &Sample, dist: &[f64]) -> Self::Hypothesis {
        checker::check_sample(sample);
        checker::check_distribution(sample, dist);

        let indices = (0..sample.shape().0)
            .filter(|&i| dist[i] > 0f64)
            .collect::<Vec<_>>();

        let root = self.grow(
            sample, dist, &indices, &self.features, self.max_depth,
        );

        DecisionTreeClassifier::from_root(root, sample.shape().1)
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------")?;
        writeln!(f, "# Decision Tree Learner")?;
        writeln!(f, "- Criterion: {}", self.criterion)?;
        if self.max_depth == usize::MAX {
            writeln!(f, "- Max depth: (unbounded)")?;
        } else {
            writeln!(f, "- Max depth: {}", self.max_depth)?;
        }
        writeln!(f, "- Features:  {}", self.features.len())?;
        write!(f, "----------")
    }
}


/// The label with the largest total weight over `indices`,
/// paired with the weight of the examples that label misclassifies.
/// Ties go to the lowest label.
fn plurality_and_loss(
    target: &[f64],
    dist: &[f64],
    indices: &[usize],
) -> (i64, f64)
{
    let mut map = BTreeMap::new();
    let mut total = 0f64;
    for &i in indices {
        *map.entry(target[i] as i64).or_insert(0f64) += dist[i];
        total += dist[i];
    }

    let mut label = 0i64;
    let mut best = f64::NEG_INFINITY;
    for (&y, &w) in map.iter() {
        if w > best {
            label = y;
            best = w;
        }
    }

    (label, (total - best).max(0f64))
}
