//! Color and marker mappers.
//!
//! Mappers only describe how the client should map column values; the
//! interpolation itself happens in the renderer.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};
use tracing::warn;

use crate::color::Color;
use crate::error::{invalid_enum_value, ModelError};
use crate::factors::Factors;

/// Maps categorical factors to palette colors by position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalColorMapper {
    pub palette: Vec<Color>,
    #[serde(default = "Color::nan_default")]
    pub nan_color: Color,
    pub factors: Factors,
    /// Start slice index applied to multi-level factors
    #[serde(default)]
    pub start: i64,
    /// End slice index applied to multi-level factors
    #[serde(default)]
    pub end: Option<i64>,
}

impl CategoricalColorMapper {
    /// A palette shorter than `factors` is accepted; the mismatch is logged
    /// once the configured mapper is converted into a `Transform`.
    pub fn new(palette: impl IntoIterator<Item = Color>, factors: impl Into<Factors>) -> Self {
        Self {
            palette: palette.into_iter().collect(),
            nan_color: Color::nan_default(),
            factors: factors.into(),
            start: 0,
            end: None,
        }
    }

    pub fn start(mut self, start: i64) -> Self {
        self.start = start;
        self
    }

    pub fn end(mut self, end: Option<i64>) -> Self {
        self.end = end;
        self
    }

    pub fn nan_color(mut self, nan_color: Color) -> Self {
        self.nan_color = nan_color;
        self
    }

    /// Warns about factors past the end of the palette, returning whether any exist
    pub fn check_palette_length(&self) -> bool {
        let short = self.palette.len() < self.factors.len();
        if short {
            warn!(
                "Palette length does not match number of factors. \
                 {:?} will be assigned to `nan_color` {}",
                self.factors.describe_from(self.palette.len()),
                self.nan_color
            );
        }
        short
    }
}

/// Maps a numeric interval onto a palette.
///
/// Shared by the linear and log mappers, which differ only in how the client
/// spaces the palette across `[low, high]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuousColorMapper {
    pub palette: Vec<Color>,
    #[serde(default = "Color::nan_default")]
    pub nan_color: Color,
    /// Values below `low` are clamped to it. `None` means the client uses the data minimum.
    #[serde(default)]
    pub low: Option<f64>,
    /// Values above `high` are clamped to it. `None` means the client uses the data maximum.
    #[serde(default)]
    pub high: Option<f64>,
    /// Color for values below `low`, otherwise the first palette color
    #[serde(default)]
    pub low_color: Option<Color>,
    /// Color for values above `high`, otherwise the last palette color
    #[serde(default)]
    pub high_color: Option<Color>,
}

impl ContinuousColorMapper {
    pub fn new(palette: impl IntoIterator<Item = Color>) -> Self {
        Self {
            palette: palette.into_iter().collect(),
            nan_color: Color::nan_default(),
            low: None,
            high: None,
            low_color: None,
            high_color: None,
        }
    }

    pub fn low(mut self, low: impl Into<Option<f64>>) -> Self {
        self.low = low.into();
        self
    }

    pub fn high(mut self, high: impl Into<Option<f64>>) -> Self {
        self.high = high.into();
        self
    }

    pub fn low_color(mut self, low_color: Option<Color>) -> Self {
        self.low_color = low_color;
        self
    }

    pub fn high_color(mut self, high_color: Option<Color>) -> Self {
        self.high_color = high_color;
        self
    }

    pub fn nan_color(mut self, nan_color: Color) -> Self {
        self.nan_color = nan_color;
        self
    }
}

#[derive(
    Debug,
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
pub enum MarkerType {
    Asterisk,
    Circle,
    CircleCross,
    CircleX,
    Cross,
    Dash,
    Diamond,
    DiamondCross,
    Hex,
    InvertedTriangle,
    Square,
    SquareCross,
    SquareX,
    Triangle,
    X,
}

impl MarkerType {
    pub fn parse(s: &str) -> Result<Self, ModelError> {
        Self::from_str(s).map_err(|_| invalid_enum_value::<Self>("marker", s))
    }
}

fn default_marker() -> MarkerType {
    MarkerType::Circle
}

/// Maps categorical factors to marker shapes by position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalMarkerMapper {
    pub markers: Vec<MarkerType>,
    pub factors: Factors,
    #[serde(default)]
    pub start: i64,
    #[serde(default)]
    pub end: Option<i64>,
    /// Marker used for factors without a corresponding entry in `markers`
    #[serde(default = "default_marker")]
    pub default_value: MarkerType,
}

impl CategoricalMarkerMapper {
    pub fn new(
        markers: impl IntoIterator<Item = MarkerType>,
        factors: impl Into<Factors>,
    ) -> Self {
        Self {
            markers: markers.into_iter().collect(),
            factors: factors.into(),
            start: 0,
            end: None,
            default_value: default_marker(),
        }
    }

    pub fn start(mut self, start: i64) -> Self {
        self.start = start;
        self
    }

    pub fn end(mut self, end: Option<i64>) -> Self {
        self.end = end;
        self
    }

    pub fn default_value(mut self, marker: MarkerType) -> Self {
        self.default_value = marker;
        self
    }

    /// Warns about factors past the end of the marker list, returning whether any exist
    pub fn check_marker_length(&self) -> bool {
        let short = self.markers.len() < self.factors.len();
        if short {
            warn!(
                "Marker list length does not match number of factors. \
                 {:?} will be assigned to `default_value` {}",
                self.factors.describe_from(self.markers.len()),
                self.default_value
            );
        }
        short
    }
}
