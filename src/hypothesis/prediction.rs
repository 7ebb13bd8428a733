use std::fmt;


/// The output of a [`Classifier`](crate::Classifier).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Prediction {
    /// The class label stored in the reached leaf.
    Class(String),


    /// The traversal could not reach a leaf,
    /// e.g., because the missing-value strategy abstained.
    NoClassFound,
}


impl Prediction {
    /// Returns the label, or `None` for [`Prediction::NoClassFound`].
    #[inline]
    pub fn label(&self) -> Option<&str> {
        match self {
            Prediction::Class(label) => Some(label.as_str()),
            Prediction::NoClassFound => None,
        }
    }


    /// Returns `true` if a class was found.
    #[inline]
    pub fn is_class(&self) -> bool {
        matches!(self, Prediction::Class(_))
    }


    /// Returns the label string of a numeric class value.
    /// Labels use the shortest decimal form, so `1.0` becomes `"1"`.
    #[inline]
    pub fn label_of(value: f64) -> String {
        format!("{value}")
    }
}


impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::Class(label) => write!(f, "{label}"),
            Prediction::NoClassFound => write!(f, "NoClassFound"),
        }
    }
}
