use rayon::prelude::*;
use tracing::{debug, instrument};

use std::sync::Arc;

use crate::{Row, Sample, Prediction, TreeError};

use super::{
    node::*,
    criterion::*,
    builder::C45Config,
    missing_value::MissingValueStrategy,
    c45_classifier::C45Classifier,
};


/// The label of a leaf that no row with a target value reached.
pub const NO_LABEL: &str = "N/A";


/// Grows a [`C45Classifier`] from a [`Sample`].
/// Construct it with [`C45Builder`](crate::C45Builder).
///
/// # Example
///
/// ```
/// use minic45::prelude::*;
///
/// let sample = Sample::from_rows(vec![
///     Row::from([("age", 30.0), ("risk", 0.0)]),
///     Row::from([("age", 45.0), ("risk", 1.0)]),
///     Row::from([("age", 50.0), ("risk", 1.0)]),
/// ]);
///
/// let c45 = C45Builder::new().build().unwrap();
/// let f = c45.fit(&sample, &["age"], "risk").unwrap();
///
/// match f.root() {
///     Node::Decision(node) => {
///         assert_eq!(node.attribute(), "age");
///         assert_eq!(node.threshold(), 37.5);
///     },
///     Node::Leaf(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct C45 {
    config: C45Config,
    missing_value: Arc<dyn MissingValueStrategy>,
}


impl C45 {
    #[inline]
    pub(super) fn from_components(
        config: C45Config,
        missing_value: Arc<dyn MissingValueStrategy>,
    ) -> Self
    {
        Self { config, missing_value }
    }


    /// Returns the parameters of this learner.
    #[inline]
    pub fn config(&self) -> &C45Config {
        &self.config
    }


    /// Grow a tree over the rows of `sample`,
    /// splitting on `attributes` to predict `target`.
    ///
    /// Attributes or targets absent from a row
    /// are treated as missing values in that row.
    ///
    /// # Errors
    ///
    /// | Variant                           | When                         |
    /// |-----------------------------------|------------------------------|
    /// | [`TreeError::TargetInAttributes`] | `target` is in `attributes`  |
    /// | [`TreeError::EmptySample`]        | `sample` has no rows         |
    #[instrument(skip_all, fields(n_sample = sample.len(), target = target))]
    pub fn fit<S>(
        &self,
        sample: &Sample,
        attributes: &[S],
        target: &str,
    ) -> Result<C45Classifier, TreeError>
        where S: AsRef<str>,
    {
        let attributes = attributes.iter()
            .map(|attr| attr.as_ref())
            .collect::<Vec<_>>();

        if attributes.contains(&target) {
            return Err(TreeError::TargetInAttributes {
                target: target.to_string(),
            });
        }
        if sample.is_empty() {
            return Err(TreeError::EmptySample);
        }


        let rows = sample.rows().iter().collect::<Vec<&Row>>();
        let root = self.grow(rows, &attributes[..], target, 0);

        debug!(
            depth = root.depth(),
            leaves = root.leaves(),
            "decision tree grown"
        );

        Ok(C45Classifier::new(root, Arc::clone(&self.missing_value)))
    }


    /// Recursively grow the sub-tree for `rows`.
    fn grow(
        &self,
        rows: Vec<&Row>,
        attributes: &[&str],
        target: &str,
        depth: usize,
    ) -> Node
    {
        let n_sample = rows.len();
        let counts = ClassCounts::from_rows(&rows[..], target);


        // If every labeled row has the same class, construct a leaf node.
        if let Some(class) = counts.pure_class() {
            return Node::leaf(Prediction::label_of(class), n_sample);
        }


        let as_leaf = |reason: &str| {
            let label = counts.majority()
                .map_or_else(|| NO_LABEL.to_string(), Prediction::label_of);
            debug!(depth, n_sample, label = label.as_str(), reason, "leaf");
            Node::leaf(label, n_sample)
        };

        if counts.total() == 0 {
            return as_leaf("no target value");
        }
        if attributes.is_empty() {
            return as_leaf("no attribute left");
        }
        if self.config.max_depth.is_some_and(|max| depth >= max) {
            return as_leaf("max depth reached");
        }


        // Find the pair of attribute and threshold
        // with the greatest gain ratio.
        let Some((attribute, split)) = best_attribute(&rows[..], attributes, target)
            .filter(|(_, split)| split.gain_ratio > 0.0)
        else {
            return as_leaf("no positive gain ratio");
        };


        // Split the rows for left/right childrens.
        // Rows with a missing value go to neither side.
        let mut lrows = Vec::new();
        let mut rrows = Vec::new();
        for row in rows {
            match row.get(attribute) {
                Some(value) if value <= split.threshold => lrows.push(row),
                Some(_) => rrows.push(row),
                None => {},
            }
        }


        // If the split has no meaning, construct a leaf node.
        if lrows.is_empty() || rrows.is_empty() {
            return as_leaf("empty side");
        }

        debug!(
            depth,
            attribute,
            threshold = split.threshold,
            gain_ratio = split.gain_ratio,
            n_left = lrows.len(),
            n_right = rrows.len(),
            "split"
        );


        let remaining = if self.config.allow_attribute_reuse {
            attributes.to_vec()
        } else {
            attributes.iter()
                .copied()
                .filter(|&attr| attr != attribute)
                .collect::<Vec<_>>()
        };


        // Grow the tree.
        let ltree = self.grow(lrows, &remaining[..], target, depth + 1);
        let rtree = self.grow(rrows, &remaining[..], target, depth + 1);

        Node::decision(attribute, split.threshold, ltree, rtree, n_sample)
    }
}


/// Searches every attribute in parallel and returns the one
/// with the strictly greatest gain ratio.
/// Ties go to the attribute listed first.
fn best_attribute<'a>(
    rows: &[&Row],
    attributes: &[&'a str],
    target: &str,
) -> Option<(&'a str, Split)>
{
    let splits = attributes.par_iter()
        .map(|&attr| best_split(rows, attr, target).map(|split| (attr, split)))
        .collect::<Vec<_>>();

    splits.into_iter()
        .flatten()
        .fold(None::<(&'a str, Split)>, |best, (attr, split)| {
            match best {
                Some((_, b)) if split.gain_ratio <= b.gain_ratio => best,
                _ => Some((attr, split)),
            }
        })
}
