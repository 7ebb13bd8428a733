//! Entropy, split information, and gain ratio,
//! together with the best-threshold search over a single attribute.

use crate::Row;


/// Class counts over the rows that have a target value.
/// Classes are kept in order of first appearance,
/// which makes [`ClassCounts::majority`] deterministic.
#[derive(Debug, Clone, Default)]
pub(super) struct ClassCounts {
    counts: Vec<(f64, usize)>,
    total: usize,
}


impl ClassCounts {
    #[inline]
    pub(super) fn new() -> Self {
        Self::default()
    }


    /// Count the target values of `rows`.
    /// Rows with a missing target are ignored.
    pub(super) fn from_rows(rows: &[&Row], target: &str) -> Self {
        let mut counts = Self::new();
        rows.iter()
            .filter_map(|row| row.get(target))
            .for_each(|y| counts.add(y));
        counts
    }


    #[inline]
    pub(super) fn add(&mut self, y: f64) {
        match self.counts.iter_mut().find(|(class, _)| *class == y) {
            Some((_, count)) => { *count += 1; },
            None => { self.counts.push((y, 1)); },
        }
        self.total += 1;
    }


    #[inline]
    pub(super) fn remove(&mut self, y: f64) {
        if let Some((_, count)) = self.counts.iter_mut()
            .find(|(class, count)| *class == y && *count > 0)
        {
            *count -= 1;
            self.total -= 1;
        }
    }


    /// Number of rows with a target value.
    #[inline]
    pub(super) fn total(&self) -> usize {
        self.total
    }


    /// Returns the class if every counted row has the same one.
    pub(super) fn pure_class(&self) -> Option<f64> {
        let mut classes = self.counts.iter()
            .filter(|(_, count)| *count > 0);
        let (class, _) = classes.next()?;
        match classes.next() {
            Some(_) => None,
            None => Some(*class),
        }
    }


    /// Returns the most frequent class.
    /// Ties go to the class that appeared first.
    pub(super) fn majority(&self) -> Option<f64> {
        let mut best: Option<(f64, usize)> = None;
        for &(class, count) in self.counts.iter() {
            if count == 0 { continue; }
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((class, count));
            }
        }
        best.map(|(class, _)| class)
    }


    /// Base-2 Shannon entropy of the class distribution.
    /// An empty distribution has zero entropy.
    pub(super) fn entropy(&self) -> f64 {
        if self.total == 0 { return 0.0; }

        let total = self.total as f64;
        self.counts.iter()
            .filter(|(_, count)| *count > 0)
            .map(|&(_, count)| {
                let p = count as f64 / total;
                -p * p.log2()
            })
            .sum::<f64>()
    }
}


/// Split information of a binary partition.
/// `n_total` may exceed `n_left + n_right`
/// when some rows have a missing value.
#[inline]
pub(super) fn split_information(
    n_left: usize,
    n_right: usize,
    n_total: usize,
) -> f64
{
    if n_total == 0 { return 0.0; }

    let total = n_total as f64;
    [n_left, n_right].into_iter()
        .filter(|&n| n > 0)
        .map(|n| {
            let p = n as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
}


/// Information gain normalized by split information.
/// Defined as `0` if the split information is `0`.
#[inline]
pub(super) fn gain_ratio(info_gain: f64, split_info: f64) -> f64 {
    if split_info == 0.0 { 0.0 } else { info_gain / split_info }
}


/// Midpoint of two consecutive distinct values `a < b`.
/// Falls back to `a` when the midpoint is not in `[a, b)`,
/// which happens for infinite values.
#[inline]
fn midpoint(a: f64, b: f64) -> f64 {
    let t = (a + b) / 2.0;
    if t >= a && t < b { t } else { a }
}


/// The best threshold found for one attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Split {
    pub(super) threshold: f64,
    pub(super) gain_ratio: f64,
}


/// Returns the threshold on `attribute` with the greatest gain ratio.
///
/// Candidate thresholds are the midpoints of consecutive distinct values.
/// Rows with a missing `attribute` belong to neither side,
/// but they still count in the denominators.
/// Returns `None` if `attribute` is missing in every row
/// or if no threshold leaves both sides non-empty.
pub(super) fn best_split(
    rows: &[&Row],
    attribute: &str,
    target: &str,
) -> Option<Split>
{
    let mut present = rows.iter()
        .filter_map(|row| {
            row.get(attribute).map(|x| (x, row.get(target)))
        })
        .collect::<Vec<_>>();
    if present.is_empty() { return None; }

    present.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut values = present.iter()
        .map(|(x, _)| *x)
        .collect::<Vec<_>>();
    values.dedup();


    let n_total = rows.len();
    let parent_entropy = ClassCounts::from_rows(rows, target).entropy();


    // Every present row starts on the right side
    // and moves to the left as the threshold grows.
    let mut left = ClassCounts::new();
    let mut right = ClassCounts::new();
    present.iter()
        .filter_map(|(_, y)| *y)
        .for_each(|y| right.add(y));


    let mut best: Option<Split> = None;
    let mut n_left = 0_usize;
    for pair in values.windows(2) {
        let threshold = midpoint(pair[0], pair[1]);

        while n_left < present.len() && present[n_left].0 <= threshold {
            if let Some(y) = present[n_left].1 {
                left.add(y);
                right.remove(y);
            }
            n_left += 1;
        }
        let n_right = present.len() - n_left;

        if n_left == 0 || n_right == 0 { continue; }

        let lp = n_left as f64 / n_total as f64;
        let rp = n_right as f64 / n_total as f64;
        let info_gain = parent_entropy
            - lp * left.entropy()
            - rp * right.entropy();
        let split_info = split_information(n_left, n_right, n_total);
        let ratio = gain_ratio(info_gain, split_info);

        if best.map_or(true, |b| ratio > b.gain_ratio) {
            best = Some(Split { threshold, gain_ratio: ratio });
        }
    }

    best
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rows(pairs: &[(f64, f64)]) -> Vec<Row> {
        pairs.iter()
            .map(|&(x, y)| Row::from([("x", x), ("y", y)]))
            .collect()
    }

    #[test]
    fn entropy_of_balanced_binary_is_one() {
        let mut counts = ClassCounts::new();
        [0.0, 1.0, 0.0, 1.0].into_iter().for_each(|y| counts.add(y));
        assert_relative_eq!(counts.entropy(), 1.0);
    }

    #[test]
    fn entropy_of_pure_or_empty_is_zero() {
        let mut counts = ClassCounts::new();
        assert_eq!(counts.entropy(), 0.0);
        counts.add(3.0);
        counts.add(3.0);
        assert_eq!(counts.entropy(), 0.0);
        assert_eq!(counts.pure_class(), Some(3.0));
    }

    #[test]
    fn majority_tie_goes_to_first_seen() {
        let mut counts = ClassCounts::new();
        [2.0, 1.0, 1.0, 2.0].into_iter().for_each(|y| counts.add(y));
        assert_eq!(counts.majority(), Some(2.0));
        counts.add(1.0);
        assert_eq!(counts.majority(), Some(1.0));
    }

    #[test]
    fn removed_classes_do_not_count() {
        let mut counts = ClassCounts::new();
        counts.add(0.0);
        counts.add(1.0);
        counts.remove(0.0);
        assert_eq!(counts.total(), 1);
        assert_eq!(counts.pure_class(), Some(1.0));
        assert_eq!(counts.majority(), Some(1.0));
    }

    #[test]
    fn split_information_uses_full_count() {
        assert_relative_eq!(split_information(2, 2, 4), 1.0);
        // A quarter of the rows is missing.
        let expected = -2.0 * (0.375_f64 * 0.375_f64.log2());
        assert_relative_eq!(split_information(3, 3, 8), expected);
        assert_eq!(split_information(0, 4, 4), 0.0);
    }

    #[test]
    fn gain_ratio_guards_zero_split_info() {
        assert_eq!(gain_ratio(0.5, 0.0), 0.0);
        assert_relative_eq!(gain_ratio(0.5, 0.25), 2.0);
    }

    #[test]
    fn best_split_on_midpoint() {
        let data = rows(&[(30.0, 0.0), (45.0, 1.0), (50.0, 1.0)]);
        let refs = data.iter().collect::<Vec<_>>();
        let split = best_split(&refs, "x", "y").unwrap();
        assert_relative_eq!(split.threshold, 37.5);

        // gain = H(1/3, 2/3), split info is the same quantity.
        assert_relative_eq!(split.gain_ratio, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn best_split_none_for_all_missing_or_constant() {
        let data = rows(&[(f64::NAN, 0.0), (f64::NAN, 1.0)]);
        let refs = data.iter().collect::<Vec<_>>();
        assert_eq!(best_split(&refs, "x", "y"), None);

        let data = rows(&[(1.0, 0.0), (1.0, 1.0)]);
        let refs = data.iter().collect::<Vec<_>>();
        assert_eq!(best_split(&refs, "x", "y"), None);
    }

    #[test]
    fn best_split_reports_non_positive_ratio() {
        let data = rows(&[(1.0, 0.0), (1.0, 1.0), (2.0, 0.0), (2.0, 1.0)]);
        let refs = data.iter().collect::<Vec<_>>();
        let split = best_split(&refs, "x", "y").unwrap();
        assert_relative_eq!(split.threshold, 1.5);
        assert!(split.gain_ratio.abs() < 1e-12);

        // Unlabeled rows weigh on both sides but not on the parent entropy.
        let mut data = data;
        for x in [1.0, 2.0] {
            for _ in 0..10 {
                data.push(Row::from([("x", x)]));
            }
        }
        for _ in 0..6 {
            data.push(Row::from([("y", 0.0)]));
        }
        let refs = data.iter().collect::<Vec<_>>();
        let split = best_split(&refs, "x", "y").unwrap();
        assert!(split.gain_ratio < 0.0);
    }

    #[test]
    fn midpoint_stays_below_the_upper_value() {
        assert_eq!(midpoint(1.0, 2.0), 1.5);
        assert_eq!(midpoint(1.0, f64::INFINITY), 1.0);
        assert_eq!(midpoint(f64::NEG_INFINITY, f64::INFINITY), f64::NEG_INFINITY);
        assert_eq!(midpoint(f64::MAX / 2.0 * 1.5, f64::MAX), f64::MAX / 2.0 * 1.5);
    }

    #[test]
    fn best_split_on_infinite_values() {
        let data = rows(&[(f64::NEG_INFINITY, 0.0), (f64::INFINITY, 1.0)]);
        let refs = data.iter().collect::<Vec<_>>();
        let split = best_split(&refs, "x", "y").unwrap();
        assert_eq!(split.threshold, f64::NEG_INFINITY);
        assert_relative_eq!(split.gain_ratio, 1.0);

        let data = rows(&[(3.0, 0.0), (f64::INFINITY, 1.0)]);
        let refs = data.iter().collect::<Vec<_>>();
        let split = best_split(&refs, "x", "y").unwrap();
        assert_eq!(split.threshold, 3.0);
    }

    #[test]
    fn best_split_ignores_missing_attribute_rows() {
        let data = rows(&[
            (1.0, 0.0),
            (f64::NAN, 0.0),
            (2.0, 1.0),
            (f64::NAN, 1.0),
        ]);
        let refs = data.iter().collect::<Vec<_>>();
        let split = best_split(&refs, "x", "y").unwrap();
        assert_relative_eq!(split.threshold, 1.5);

        // gain = 1 - 1/4 * 0 - 1/4 * 0, split info = -2 * 1/4 * log2(1/4)
        assert_relative_eq!(split.gain_ratio, 1.0, epsilon = 1e-12);
    }
}
