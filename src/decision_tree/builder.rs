use std::sync::Arc;

use serde::{Serialize, Deserialize};

use crate::TreeError;
use super::c45::C45;
use super::missing_value::{MissingValueStrategy, DefaultLeft};


/// Parameters for growing a tree.
///
/// # Defaults
///
/// | Parameter               | Default |
/// |-------------------------|---------|
/// | `allow_attribute_reuse` | `false` |
/// | `max_depth`             | `None`  |
///
/// Missing fields take their default when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct C45Config {
    /// If `false`, an attribute used by a decision node is
    /// not tested again anywhere below that node.
    /// If `true`, the depth is bounded only by the number of rows.
    pub allow_attribute_reuse: bool,


    /// Maximal depth of the tree. `None` means unlimited.
    pub max_depth: Option<usize>,
}


impl Default for C45Config {
    fn default() -> Self {
        Self {
            allow_attribute_reuse: false,
            max_depth: None,
        }
    }
}


/// A struct that builds [`C45`].
/// `C45Builder` keeps parameters for growing trees.
///
/// # Example
///
/// ```
/// use minic45::prelude::*;
///
/// let c45 = C45Builder::new()
///     .allow_attribute_reuse(true)
///     .max_depth(4)
///     .missing_value(LargerBranch)
///     .build()
///     .unwrap();
/// assert_eq!(c45.config().max_depth, Some(4));
/// ```
#[derive(Debug, Clone)]
pub struct C45Builder {
    config: C45Config,
    missing_value: Arc<dyn MissingValueStrategy>,
}


impl C45Builder {
    /// Construct a new instance of [`C45Builder`]
    /// with [`C45Config::default`] and the [`DefaultLeft`] strategy.
    pub fn new() -> Self {
        Self {
            config: C45Config::default(),
            missing_value: Arc::new(DefaultLeft),
        }
    }


    /// Replace every parameter by `config`.
    #[inline]
    pub fn config(mut self, config: C45Config) -> Self {
        self.config = config;
        self
    }


    /// Allow an attribute to be tested again below
    /// the node that used it.
    /// Default is `false`.
    ///
    /// Without reuse the tree is at most as deep as the number of
    /// attributes. With reuse the depth, and the recursion depth of
    /// [`C45::fit`], is bounded only by the number of rows,
    /// so consider setting [`C45Builder::max_depth`] on large samples.
    #[inline]
    pub fn allow_attribute_reuse(mut self, flag: bool) -> Self {
        self.config.allow_attribute_reuse = flag;
        self
    }


    /// Specify the maximal depth of the tree.
    /// By default the depth is not limited.
    /// This also bounds the recursion depth of [`C45::fit`].
    #[inline]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = Some(depth);
        self
    }


    /// Set the strategy applied to missing values at prediction time.
    /// Default is [`DefaultLeft`].
    #[inline]
    pub fn missing_value<M>(mut self, strategy: M) -> Self
        where M: MissingValueStrategy + 'static
    {
        self.missing_value = Arc::new(strategy);
        self
    }


    /// Build a [`C45`].
    /// This method consumes `self`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidMaxDepth`] if `max_depth` is zero.
    pub fn build(self) -> Result<C45, TreeError> {
        if let Some(max_depth) = self.config.max_depth {
            if max_depth == 0 {
                return Err(TreeError::InvalidMaxDepth { max_depth });
            }
        }

        Ok(C45::from_components(self.config, self.missing_value))
    }
}


impl Default for C45Builder {
    fn default() -> Self {
        Self::new()
    }
}
