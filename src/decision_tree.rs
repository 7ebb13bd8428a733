//! The C4.5 decision tree: learner, classifier, and printer.

/// Defines the C4.5 learner.
pub mod c45;
/// Defines the builder and configuration of `C45`.
pub mod builder;
/// Defines the classifier produced by `C45`.
pub mod c45_classifier;
/// Defines how a prediction proceeds on a missing value.
pub mod missing_value;
/// Renders a tree as indented text or as a dot file.
pub mod printer;

/// Defines the inner representations of `C45Classifier`.
mod node;
mod criterion;


pub use c45::{C45, NO_LABEL};
pub use builder::{C45Builder, C45Config};
pub use c45_classifier::C45Classifier;
pub use missing_value::{
    MissingValueStrategy,
    Route,
    DefaultLeft,
    LargerBranch,
};
pub use printer::TreePrinter;
pub use node::{Node, DecisionNode, LeafNode};
