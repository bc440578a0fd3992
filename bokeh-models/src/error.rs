use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid color `{color}`: {reason}")]
    InvalidColor { color: String, reason: String },

    #[error("Alpha value must be within [0, 1], got {0}")]
    InvalidAlpha(f32),

    #[error("Invalid {kind} value `{value}`, expected one of: {expected}")]
    InvalidEnumValue {
        kind: &'static str,
        value: String,
        expected: String,
    },

    #[error("Unknown palette: `{0}`")]
    UnknownPalette(String),

    #[error("Palette {name} is available in sizes {min}..={max}, requested {requested}")]
    PaletteSizeOutOfRange {
        name: String,
        requested: usize,
        min: usize,
        max: usize,
    },

    #[error("Requested {requested} colors from a palette of {available}")]
    PaletteTooShort { requested: usize, available: usize },

    #[error("Interpolator x ({x_len}) and y ({y_len}) lengths must match")]
    InterpolatorLengthMismatch { x_len: usize, y_len: usize },

    #[error("JSON error: `{0}`")]
    JsonError(#[from] serde_json::Error),
}

/// Maps a strum parse failure onto [`ModelError::InvalidEnumValue`] listing the variant names
pub(crate) fn invalid_enum_value<T: strum::VariantNames>(
    kind: &'static str,
    value: &str,
) -> ModelError {
    ModelError::InvalidEnumValue {
        kind,
        value: value.to_string(),
        expected: T::VARIANTS.join(", "),
    }
}
