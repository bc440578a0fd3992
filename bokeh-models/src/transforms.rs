//! Coordinate transforms applied to a column before rendering

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::error::{invalid_enum_value, ModelError};
use crate::ranges::Range;

/// Adds a fixed offset to column values
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dodge {
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub range: Option<Range>,
}

impl Dodge {
    pub fn new(value: f64) -> Self {
        Self { value, range: None }
    }

    pub fn range(mut self, range: impl Into<Range>) -> Self {
        self.range = Some(range.into());
        self
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Distribution {
    #[default]
    Uniform,
    Normal,
}

impl Distribution {
    pub fn parse(s: &str) -> Result<Self, ModelError> {
        Self::from_str(s).map_err(|_| invalid_enum_value::<Self>("distribution", s))
    }
}

/// Adds random noise drawn from a uniform or normal distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jitter {
    #[serde(default)]
    pub mean: f64,
    #[serde(default = "default_jitter_width")]
    pub width: f64,
    #[serde(default)]
    pub distribution: Distribution,
    #[serde(default)]
    pub range: Option<Range>,
}

fn default_jitter_width() -> f64 {
    1.0
}

impl Default for Jitter {
    fn default() -> Self {
        Self {
            mean: 0.0,
            width: default_jitter_width(),
            distribution: Distribution::Uniform,
            range: None,
        }
    }
}

impl Jitter {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    pub fn mean(mut self, mean: f64) -> Self {
        self.mean = mean;
        self
    }

    pub fn distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }

    pub fn range(mut self, range: impl Into<Range>) -> Self {
        self.range = Some(range.into());
        self
    }
}

/// A user supplied client-side transform.
///
/// `func` transforms a single value and `v_func` a whole column; both are
/// opaque source text evaluated by the client, with `args` in scope.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomJsTransform {
    #[serde(default)]
    pub args: IndexMap<String, serde_json::Value>,
    #[serde(default)]
    pub func: String,
    #[serde(default)]
    pub v_func: String,
}

impl CustomJsTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    pub fn func(mut self, func: impl Into<String>) -> Self {
        self.func = func.into();
        self
    }

    pub fn v_func(mut self, v_func: impl Into<String>) -> Self {
        self.v_func = v_func.into();
        self
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StepMode {
    Before,
    #[default]
    After,
    Center,
}

impl StepMode {
    pub fn parse(s: &str) -> Result<Self, ModelError> {
        Self::from_str(s).map_err(|_| invalid_enum_value::<Self>("step mode", s))
    }
}

fn default_clip() -> bool {
    true
}

/// Wire form shared by both interpolators, validated before use
#[derive(Deserialize)]
struct InterpolatorFields {
    x: Vec<f64>,
    y: Vec<f64>,
    #[serde(default = "default_clip")]
    clip: bool,
    #[serde(default)]
    mode: StepMode,
}

fn check_points(x: &[f64], y: &[f64]) -> Result<(), ModelError> {
    if x.len() != y.len() {
        return Err(ModelError::InterpolatorLengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    Ok(())
}

/// Piecewise linear interpolation through the control points `(x, y)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearInterpolator {
    x: Vec<f64>,
    y: Vec<f64>,
    clip: bool,
}

impl LinearInterpolator {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, ModelError> {
        check_points(&x, &y)?;
        Ok(Self { x, y, clip: true })
    }

    /// When false, values outside the control points map to NaN instead of the edge value
    pub fn clip(mut self, clip: bool) -> Self {
        self.clip = clip;
        self
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn is_clipped(&self) -> bool {
        self.clip
    }
}

impl<'de> Deserialize<'de> for LinearInterpolator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = InterpolatorFields::deserialize(deserializer)?;
        Self::new(fields.x, fields.y)
            .map(|interp| interp.clip(fields.clip))
            .map_err(serde::de::Error::custom)
    }
}

/// Step-wise interpolation through the control points `(x, y)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepInterpolator {
    x: Vec<f64>,
    y: Vec<f64>,
    clip: bool,
    mode: StepMode,
}

impl StepInterpolator {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, ModelError> {
        check_points(&x, &y)?;
        Ok(Self {
            x,
            y,
            clip: true,
            mode: StepMode::default(),
        })
    }

    pub fn clip(mut self, clip: bool) -> Self {
        self.clip = clip;
        self
    }

    pub fn mode(mut self, mode: StepMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn is_clipped(&self) -> bool {
        self.clip
    }

    pub fn step_mode(&self) -> StepMode {
        self.mode
    }
}

impl<'de> Deserialize<'de> for StepInterpolator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = InterpolatorFields::deserialize(deserializer)?;
        Self::new(fields.x, fields.y)
            .map(|interp| interp.clip(fields.clip).mode(fields.mode))
            .map_err(serde::de::Error::custom)
    }
}
