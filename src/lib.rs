#![warn(missing_docs)]

//!
//! A crate that provides a C4.5-style decision tree learner.
//!
//! The learner grows a binary tree over numerically encoded rows.
//! Each internal node tests a single attribute against a threshold
//! chosen by maximizing the **gain ratio**,
//! the information gain normalized by the split information.
//!
//! Missing values are represented by `NaN` (or by an absent attribute).
//! During training, rows with a missing value for the split attribute
//! are dropped from both children.
//! During prediction, they are routed by a [`MissingValueStrategy`].
//!
//! # Example
//! ```
//! use minic45::prelude::*;
//!
//! let rows = vec![
//!     Row::from([("age", 30.0), ("risk", 0.0)]),
//!     Row::from([("age", 45.0), ("risk", 1.0)]),
//!     Row::from([("age", 50.0), ("risk", 1.0)]),
//! ];
//! let sample = Sample::from_rows(rows);
//!
//! let c45 = C45Builder::new()
//!     .build()
//!     .unwrap();
//! let f = c45.fit(&sample, &["age"], "risk").unwrap();
//!
//! let row = Row::from([("age", 60.0)]);
//! assert_eq!(f.predict(&row), Prediction::Class("1".into()));
//! ```

pub mod error;
pub mod sample;
pub mod hypothesis;
pub mod decision_tree;
pub mod prelude;


pub use error::TreeError;

pub use sample::{Row, Sample};

pub use hypothesis::{Classifier, Prediction};

pub use decision_tree::{
    C45,
    NO_LABEL,
    C45Builder,
    C45Classifier,
    C45Config,
    DecisionNode,
    LeafNode,
    Node,
    TreePrinter,
    MissingValueStrategy,
    Route,
    DefaultLeft,
    LargerBranch,
};
