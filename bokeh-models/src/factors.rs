use serde::{Deserialize, Serialize};

/// A homogeneous sequence of categorical factors.
///
/// Factors may be nested one or two levels deep, e.g. `("2017", "Q1")`.
/// Serializes as a JSON array of strings or of string arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Factors {
    Single(Vec<String>),
    Nested(Vec<(String, String)>),
    DoubleNested(Vec<(String, String, String)>),
}

impl Factors {
    pub fn len(&self) -> usize {
        match self {
            Factors::Single(f) => f.len(),
            Factors::Nested(f) => f.len(),
            Factors::DoubleNested(f) => f.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Human readable rendering of the factors from index `start` on
    pub fn describe_from(&self, start: usize) -> Vec<String> {
        match self {
            Factors::Single(f) => f.iter().skip(start).cloned().collect(),
            Factors::Nested(f) => f
                .iter()
                .skip(start)
                .map(|(a, b)| format!("({a}, {b})"))
                .collect(),
            Factors::DoubleNested(f) => f
                .iter()
                .skip(start)
                .map(|(a, b, c)| format!("({a}, {b}, {c})"))
                .collect(),
        }
    }
}

impl Default for Factors {
    fn default() -> Self {
        Factors::Single(Vec::new())
    }
}

impl From<Vec<String>> for Factors {
    fn from(value: Vec<String>) -> Self {
        Factors::Single(value)
    }
}

impl From<Vec<&str>> for Factors {
    fn from(value: Vec<&str>) -> Self {
        Factors::Single(value.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Factors {
    fn from(value: [&str; N]) -> Self {
        Factors::Single(value.into_iter().map(String::from).collect())
    }
}

impl From<Vec<(String, String)>> for Factors {
    fn from(value: Vec<(String, String)>) -> Self {
        Factors::Nested(value)
    }
}

impl From<Vec<(&str, &str)>> for Factors {
    fn from(value: Vec<(&str, &str)>) -> Self {
        Factors::Nested(
            value
                .into_iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        )
    }
}

impl From<Vec<(String, String, String)>> for Factors {
    fn from(value: Vec<(String, String, String)>) -> Self {
        Factors::DoubleNested(value)
    }
}

impl From<Vec<(&str, &str, &str)>> for Factors {
    fn from(value: Vec<(&str, &str, &str)>) -> Self {
        Factors::DoubleNested(
            value
                .into_iter()
                .map(|(a, b, c)| (a.to_string(), b.to_string(), c.to_string()))
                .collect(),
        )
    }
}
