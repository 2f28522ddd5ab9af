//! Defines the inner representation of the decision tree.

use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(super) enum Node {
    /// A node with children.
    Branch(BranchNode),

    /// A node with no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of the decision tree.
/// `fallback` is the weighted-plurality label of the training examples
/// that reached this node; prediction falls back to it
/// for category codes never seen during training
/// and for NaN attribute values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(super) struct BranchNode {
    pub(super) feature: usize,
    pub(super) rule: SplitRule,
    pub(super) fallback: i64,
}


/// How a branch node routes an example to a child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(super) enum SplitRule {
    /// Binary split of a numeric feature.
    /// Values strictly below the threshold go left.
    Threshold {
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },

    /// Multiway split of a categorical feature,
    /// one arm per code observed during training.
    Category {
        arms: BTreeMap<i64, Node>,
    },
}


/// Represents the leaf nodes of the decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(super) struct LeafNode {
    pub(super) label: i64,
}


impl Node {
    /// Construct a leaf that predicts `label`.
    #[inline]
    pub(super) fn leaf(label: i64) -> Self {
        Self::Leaf(LeafNode { label })
    }


    /// Walk from this node down to a leaf.
    /// The caller guarantees that `x` has the trained arity.
    pub(super) fn classify(&self, x: &[f64]) -> i64 {
        match self {
            Self::Leaf(leaf) => leaf.label,
            Self::Branch(node) => {
                let value = x[node.feature];
                if value.is_nan() {
                    return node.fallback;
                }
                match &node.rule {
                    SplitRule::Threshold { threshold, left, right } => {
                        if value < *threshold {
                            left.classify(x)
                        } else {
                            right.classify(x)
                        }
                    },
                    SplitRule::Category { arms } => {
                        match arms.get(&(value as i64)) {
                            Some(child) => child.classify(x),
                            None => node.fallback,
                        }
                    },
                }
            },
        }
    }


    /// Render this subtree as Graphviz statements.
    /// Returns the statements and the next unused node id.
    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Branch(node) => {
                match &node.rule {
                    SplitRule::Threshold { threshold, left, right } => {
                        let info = format!(
                            "\tnode_{id} [ label = \"x[{feat}] < {threshold:.2} ?\" ];\n",
                            feat = node.feature,
                        );

                        let (l_info, next_id) = left.to_dot_info(id + 1);
                        let (mut r_info, ret_id) = right.to_dot_info(next_id);

                        let mut statements = l_info;
                        statements.push(info);
                        statements.append(&mut r_info);

                        statements.push(format!(
                            "\tnode_{id} -- node_{l_id} [ label = \"Yes\" ];\n",
                            l_id = id + 1,
                        ));
                        statements.push(format!(
                            "\tnode_{id} -- node_{r_id} [ label = \"No\" ];\n",
                            r_id = next_id,
                        ));

                        (statements, ret_id)
                    },
                    SplitRule::Category { arms } => {
                        let info = format!(
                            "\tnode_{id} [ label = \"x[{feat}] = ?\" ];\n",
                            feat = node.feature,
                        );

                        let mut statements = vec![info];
                        let mut next_id = id + 1;
                        for (code, child) in arms {
                            let child_id = next_id;
                            let (mut child_info, ret_id) =
                                child.to_dot_info(child_id);
                            statements.append(&mut child_info);
                            statements.push(format!(
                                "\tnode_{id} -- node_{child_id} \
                                 [ label = \"{code}\" ];\n",
                            ));
                            next_id = ret_id;
                        }

                        (statements, next_id)
                    },
                }
            },
            Self::Leaf(leaf) => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box, ];\n",
                    label = leaf.label,
                );

                (vec![info], id + 1)
            },
        }
    }
}
