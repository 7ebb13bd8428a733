//! Defines the C4.5 decision tree classifier.
use std::fmt;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::sync::Arc;

use crate::{Classifier, Prediction, Row};

use super::node::*;
use super::missing_value::MissingValueStrategy;
use super::printer::TreePrinter;


/// Decision tree classifier produced by [`C45`](crate::C45).
/// This struct is a wrapper of the root [`Node`]
/// and of the strategy applied to missing values.
///
/// The tree is immutable, so a `C45Classifier` can be shared
/// between threads without synchronization.
#[derive(Debug, Clone)]
pub struct C45Classifier {
    root: Node,
    missing_value: Arc<dyn MissingValueStrategy>,
}


impl C45Classifier {
    #[inline]
    pub(super) fn new(
        root: Node,
        missing_value: Arc<dyn MissingValueStrategy>,
    ) -> Self
    {
        Self { root, missing_value }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns `true` if the tree is a single leaf,
    /// i.e., no informative split was found.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.root.is_leaf()
    }


    /// Returns the depth of the tree.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }


    /// Returns the strategy applied to missing values.
    #[inline]
    pub fn missing_value(&self) -> &dyn MissingValueStrategy {
        self.missing_value.as_ref()
    }


    /// Replace the strategy applied to missing values.
    /// The tree itself is unchanged.
    #[inline]
    pub fn with_missing_value<M>(mut self, strategy: M) -> Self
        where M: MissingValueStrategy + 'static
    {
        self.missing_value = Arc::new(strategy);
        self
    }


    /// Print the tree to the standard output.
    pub fn print(&self) {
        print!("{}", TreePrinter::new().render(&self.root));
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(TreePrinter::new().to_dot(&self.root).as_bytes())?;

        Ok(())
    }
}


impl Classifier for C45Classifier {
    #[inline]
    fn predict(&self, row: &Row) -> Prediction {
        self.root.predict(row, self.missing_value.as_ref())
    }
}


impl fmt::Display for C45Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TreePrinter::new().render(&self.root))
    }
}
