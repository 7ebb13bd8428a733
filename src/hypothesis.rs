//! The core library for `Hypothesis` traits.

pub(crate) mod hypothesis_traits;
pub(crate) mod prediction;


pub use hypothesis_traits::Classifier;
pub use prediction::Prediction;
