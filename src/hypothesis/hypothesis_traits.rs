use rayon::prelude::*;

use crate::{Row, Sample};
use super::prediction::Prediction;


/// A trait that defines the behavor of classifier.
/// You only need to implement `predict` method.
pub trait Classifier {
    /// Predicts the class label of `row`.
    /// Implementations must not fail on missing values;
    /// they return [`Prediction::NoClassFound`] instead.
    fn predict(&self, row: &Row) -> Prediction;


    /// Predicts the class labels of every row in `sample`.
    /// Rows are classified in parallel;
    /// the result is in row order.
    fn predict_all(&self, sample: &Sample) -> Vec<Prediction>
        where Self: Sync,
    {
        sample.rows()
            .par_iter()
            .map(|row| self.predict(row))
            .collect::<Vec<_>>()
    }


    /// Returns the fraction of rows whose prediction equals
    /// the value of `target`.
    /// Rows with a missing target are not counted.
    /// Returns `None` if no row has a target value.
    fn accuracy(&self, sample: &Sample, target: &str) -> Option<f64>
        where Self: Sync,
    {
        let predictions = self.predict_all(sample);

        let (n_correct, n_labeled) = sample.rows()
            .iter()
            .zip(predictions)
            .filter_map(|(row, p)| row.get(target).map(|y| (y, p)))
            .fold((0_usize, 0_usize), |(correct, total), (y, p)| {
                let hit = p.label() == Some(Prediction::label_of(y).as_str());
                (correct + usize::from(hit), total + 1)
            });

        if n_labeled == 0 { return None; }
        Some(n_correct as f64 / n_labeled as f64)
    }
}
