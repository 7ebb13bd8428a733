//! Defines the inner representation
//! of the C4.5 decision tree.
use tracing::warn;

use crate::{Row, Prediction};
use super::missing_value::{MissingValueStrategy, Route};


/// Enumeration of `DecisionNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A node that have two childrens.
    Decision(DecisionNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the decision nodes of the tree.
/// Each `DecisionNode` must have two childrens.
/// Rows with `attribute <= threshold` go left, the others go right.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionNode {
    pub(super) attribute: String,
    pub(super) threshold: f64,
    pub(super) left: Box<Node>,
    pub(super) right: Box<Node>,
    pub(super) n_samples: usize,
}


impl DecisionNode {
    /// Returns the name of the tested attribute.
    #[inline]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }


    /// Returns the threshold.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }


    /// Returns the child for `attribute <= threshold`.
    #[inline]
    pub fn left(&self) -> &Node {
        &self.left
    }


    /// Returns the child for `attribute > threshold`.
    #[inline]
    pub fn right(&self) -> &Node {
        &self.right
    }


    /// Returns the number of training rows that reached this node.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }
}


/// Represents the leaf nodes of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    pub(super) label: String,
    pub(super) n_samples: usize,
}


impl LeafNode {
    /// Returns the class label this leaf predicts.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }


    /// Returns the number of training rows that reached this leaf.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }
}


impl Node {
    /// Construct a leaf node.
    #[inline]
    pub(super) fn leaf(label: String, n_samples: usize) -> Self {
        Node::Leaf(LeafNode { label, n_samples })
    }


    /// Construct a decision node from its two children.
    #[inline]
    pub(super) fn decision(
        attribute: &str,
        threshold: f64,
        left: Node,
        right: Node,
        n_samples: usize,
    ) -> Self
    {
        Node::Decision(DecisionNode {
            attribute: attribute.to_string(),
            threshold,
            left: Box::new(left),
            right: Box::new(right),
            n_samples,
        })
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }


    /// Returns the number of training rows that reached this node.
    #[inline]
    pub fn n_samples(&self) -> usize {
        match self {
            Node::Decision(ref node) => node.n_samples,
            Node::Leaf(ref node) => node.n_samples,
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Node::Decision(ref node) => node.left.leaves() + node.right.leaves(),
            Node::Leaf(_) => 1_usize,
        }
    }


    /// Returns the depth of this sub-tree.
    /// A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Node::Decision(ref node) => {
                1 + node.left.depth().max(node.right.depth())
            },
            Node::Leaf(_) => 0_usize,
        }
    }


    /// Walk from this node to a leaf.
    /// A missing value on the path is routed by `missing_value`.
    pub(super) fn predict(
        &self,
        row: &Row,
        missing_value: &dyn MissingValueStrategy,
    ) -> Prediction
    {
        let mut node = self;
        loop {
            let branch = match node {
                Node::Leaf(ref leaf) => {
                    return Prediction::Class(leaf.label.clone());
                },
                Node::Decision(ref branch) => branch,
            };

            node = match row.get(&branch.attribute) {
                Some(value) if value <= branch.threshold => branch.left(),
                Some(_) => branch.right(),
                None => {
                    let route = missing_value.route(branch);
                    warn!(
                        attribute = branch.attribute.as_str(),
                        ?route,
                        "missing value during prediction"
                    );
                    match route {
                        Route::Left => branch.left(),
                        Route::Right => branch.right(),
                        Route::Abstain => return Prediction::NoClassFound,
                    }
                },
            };
        }
    }
}
