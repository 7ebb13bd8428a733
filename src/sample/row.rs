use std::collections::HashMap;


/// A single observation.
/// Each attribute name maps to a numeric value.
/// A value is **missing** if the attribute is absent or its value is `NaN`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: HashMap<String, f64>,
}


impl Row {
    /// Construct an empty row.
    #[inline]
    pub fn new() -> Self {
        Self { values: HashMap::new() }
    }


    /// Set the value of the attribute `name`.
    /// Pass `f64::NAN` to mark the value as missing.
    #[inline]
    pub fn insert<S: Into<String>>(&mut self, name: S, value: f64) {
        self.values.insert(name.into(), value);
    }


    /// Builder-style version of [`Row::insert`].
    #[inline]
    pub fn with<S: Into<String>>(mut self, name: S, value: f64) -> Self {
        self.insert(name, value);
        self
    }


    /// Returns the value of `name`,
    /// or `None` if the value is missing.
    #[inline]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name)
            .copied()
            .filter(|value| !value.is_nan())
    }


    /// Returns `true` if the value of `name` is missing.
    #[inline]
    pub fn is_missing(&self, name: &str) -> bool {
        self.get(name).is_none()
    }


    /// Returns the attribute names stored in this row.
    /// The order is unspecified.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|name| name.as_str())
    }


    /// Returns the number of attributes stored in this row,
    /// including the missing ones set to `NaN`.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if no attribute is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}


impl<S> FromIterator<(S, f64)> for Row
    where S: Into<String>
{
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = (S, f64)>
    {
        let values = iter.into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect();
        Self { values }
    }
}


impl<const N: usize> From<[(&str, f64); N]> for Row {
    #[inline]
    fn from(pairs: [(&str, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}
