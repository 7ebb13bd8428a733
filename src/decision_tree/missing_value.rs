//! Routing of rows whose tested attribute is missing at prediction time.
use std::fmt;

use super::node::DecisionNode;


/// The direction a [`MissingValueStrategy`] chooses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Follow the `<= threshold` child.
    Left,
    /// Follow the `> threshold` child.
    Right,
    /// Stop; the prediction becomes
    /// [`Prediction::NoClassFound`](crate::Prediction::NoClassFound).
    Abstain,
}


/// Decides where a row goes when the value tested by
/// a decision node is missing.
///
/// Implement this trait to plug another policy into
/// [`C45Builder::missing_value`](crate::C45Builder::missing_value)
/// or [`C45Classifier::with_missing_value`](crate::C45Classifier::with_missing_value).
pub trait MissingValueStrategy: fmt::Debug + Send + Sync {
    /// Returns the route taken at `node`.
    fn route(&self, node: &DecisionNode) -> Route;
}


/// Always follows the left child.
/// This is the default strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultLeft;


impl MissingValueStrategy for DefaultLeft {
    #[inline]
    fn route(&self, _node: &DecisionNode) -> Route {
        Route::Left
    }
}


/// Follows the child that received more training rows.
/// Ties go left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LargerBranch;


impl MissingValueStrategy for LargerBranch {
    #[inline]
    fn route(&self, node: &DecisionNode) -> Route {
        if node.right().n_samples() > node.left().n_samples() {
            Route::Right
        } else {
            Route::Left
        }
    }
}
