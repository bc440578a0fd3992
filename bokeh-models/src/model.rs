use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::mappers::{CategoricalColorMapper, CategoricalMarkerMapper, ContinuousColorMapper};
use crate::transforms::{CustomJsTransform, Dodge, Jitter, LinearInterpolator, StepInterpolator};

/// Any client-side transform that can be attached to a field.
///
/// Serializes as the wrapped model's properties plus a `"type"` tag naming
/// the model, e.g. `{"type": "Dodge", "value": 0.5, "range": null}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Transform {
    Dodge(Dodge),
    Jitter(Jitter),
    #[serde(rename = "CustomJSTransform")]
    CustomJs(CustomJsTransform),
    LinearInterpolator(LinearInterpolator),
    StepInterpolator(StepInterpolator),
    CategoricalColorMapper(CategoricalColorMapper),
    LinearColorMapper(ContinuousColorMapper),
    LogColorMapper(ContinuousColorMapper),
    CategoricalMarkerMapper(CategoricalMarkerMapper),
}

impl Transform {
    pub fn linear_color_mapper(mapper: ContinuousColorMapper) -> Self {
        Transform::LinearColorMapper(mapper)
    }

    pub fn log_color_mapper(mapper: ContinuousColorMapper) -> Self {
        if let Some(low) = mapper.low {
            if low <= 0.0 {
                warn!("Log color mapper low bound must be positive, got {low}");
            }
        }
        Transform::LogColorMapper(mapper)
    }

    /// Name of the wrapped model, matching the serialized `"type"` tag
    pub fn type_name(&self) -> &'static str {
        match self {
            Transform::Dodge(_) => "Dodge",
            Transform::Jitter(_) => "Jitter",
            Transform::CustomJs(_) => "CustomJSTransform",
            Transform::LinearInterpolator(_) => "LinearInterpolator",
            Transform::StepInterpolator(_) => "StepInterpolator",
            Transform::CategoricalColorMapper(_) => "CategoricalColorMapper",
            Transform::LinearColorMapper(_) => "LinearColorMapper",
            Transform::LogColorMapper(_) => "LogColorMapper",
            Transform::CategoricalMarkerMapper(_) => "CategoricalMarkerMapper",
        }
    }
}

impl From<Dodge> for Transform {
    fn from(value: Dodge) -> Self {
        Transform::Dodge(value)
    }
}

impl From<Jitter> for Transform {
    fn from(value: Jitter) -> Self {
        Transform::Jitter(value)
    }
}

impl From<CustomJsTransform> for Transform {
    fn from(value: CustomJsTransform) -> Self {
        Transform::CustomJs(value)
    }
}

impl From<LinearInterpolator> for Transform {
    fn from(value: LinearInterpolator) -> Self {
        Transform::LinearInterpolator(value)
    }
}

impl From<StepInterpolator> for Transform {
    fn from(value: StepInterpolator) -> Self {
        Transform::StepInterpolator(value)
    }
}

impl From<CategoricalColorMapper> for Transform {
    fn from(value: CategoricalColorMapper) -> Self {
        value.check_palette_length();
        Transform::CategoricalColorMapper(value)
    }
}

impl From<CategoricalMarkerMapper> for Transform {
    fn from(value: CategoricalMarkerMapper) -> Self {
        value.check_marker_length();
        Transform::CategoricalMarkerMapper(value)
    }
}
