//! Expressions compute a new column client-side from existing columns

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    Stack(Stack),
    CumSum(CumSum),
}

/// Row-wise sum of `fields`, in the order given
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stack {
    #[serde(default)]
    pub fields: Vec<String>,
}

impl Stack {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// Running sum down a single column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumSum {
    pub field: String,
    /// When true the output starts at zero and omits the final total
    #[serde(default)]
    pub include_zero: bool,
}

impl CumSum {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            include_zero: false,
        }
    }

    pub fn include_zero(mut self, include_zero: bool) -> Self {
        self.include_zero = include_zero;
        self
    }
}

impl From<Stack> for Expression {
    fn from(value: Stack) -> Self {
        Expression::Stack(value)
    }
}

impl From<CumSum> for Expression {
    fn from(value: CumSum) -> Self {
        Expression::CumSum(value)
    }
}
