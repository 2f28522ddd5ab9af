//! The hypothesis returned by the decision tree learner.

use serde::{Serialize, Deserialize};

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::{Classifier, Error};

use super::node::Node;


/// Decision tree classifier.
/// An immutable tree of threshold and category splits,
/// produced by [`DecisionTree`](super::DecisionTree).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
    n_feature: usize,
}


impl DecisionTreeClassifier {
    #[inline]
    pub(super) fn from_root(root: Node, n_feature: usize) -> Self {
        Self { root, n_feature }
    }


    /// Write the tree to `path` in the Graphviz dot format.
    pub fn to_dot_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let mut f = File::create(path)?;

        f.write_all(b"graph DecisionTree {\n")?;
        let (statements, _) = self.root.to_dot_info(0);
        for statement in statements {
            f.write_all(statement.as_bytes())?;
        }
        f.write_all(b"}\n")?;

        Ok(())
    }
}


impl Classifier for DecisionTreeClassifier {
    fn predict(&self, x: &[f64]) -> Result<i64, Error> {
        if x.len() != self.n_feature {
            return Err(Error::InvalidInput {
                expected: self.n_feature,
                got: x.len(),
            });
        }

        Ok(self.root.classify(x))
    }
}
