use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Color used for values that cannot be mapped
pub const DEFAULT_NAN_COLOR: &str = "gray";

/// A validated CSS color.
///
/// The original string is preserved as given, so `"Red"` serializes as `"Red"`
/// and `"#f00"` as `"#f00"`. Validation accepts anything a browser would:
/// named colors, hex with 3, 4, 6, or 8 digits, and the functional
/// `rgb()`/`rgba()`/`hsl()` notations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

fn validate(s: &str) -> Result<(), ModelError> {
    csscolorparser::parse(s).map_err(|e| ModelError::InvalidColor {
        color: s.to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}

impl Color {
    pub fn parse(s: &str) -> Result<Self, ModelError> {
        validate(s)?;
        Ok(Self(s.to_string()))
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("rgb({r}, {g}, {b})"))
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Result<Self, ModelError> {
        if !(0.0..=1.0).contains(&a) {
            return Err(ModelError::InvalidAlpha(a));
        }
        Ok(Self(format!("rgba({r}, {g}, {b}, {a})")))
    }

    pub fn nan_default() -> Self {
        Self(DEFAULT_NAN_COLOR.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Color {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)?;
        Ok(Self(value))
    }
}

impl TryFrom<&str> for Color {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
