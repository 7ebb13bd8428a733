//! Exports the decision tree learner, its classifier, and the sample types.
//!
pub use crate::decision_tree::{
    // Learner
    C45,
    C45Builder,
    C45Config,
    NO_LABEL,


    // Model
    C45Classifier,
    Node,
    TreePrinter,


    // Prediction with missing values
    MissingValueStrategy,
    Route,
    DefaultLeft,
    LargerBranch,
};


pub use crate::hypothesis::{
    Classifier,
    Prediction,
};


pub use crate::sample::{
    Row,
    Sample,
};


pub use crate::error::TreeError;
