//! Helpers that build a [`DataSpec`] applying a client-side transform or
//! expression to a data column.

use bokeh_models::color::Color;
use bokeh_models::expressions::{CumSum, Stack};
use bokeh_models::factors::Factors;
use bokeh_models::mappers::{
    CategoricalColorMapper, CategoricalMarkerMapper, ContinuousColorMapper, MarkerType,
};
use bokeh_models::model::Transform;
use bokeh_models::ranges::Range;
use bokeh_models::transforms::{Distribution, Dodge, Jitter};

use crate::dataspec::DataSpec;

/// Optional [`jitter`] parameters
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JitterOptions {
    /// Offset added to the random values
    pub mean: f64,
    pub distribution: Distribution,
    /// Range used to compute synthetic coordinates, e.g. a `FactorRange`
    /// when the column is categorical
    pub range: Option<Range>,
}

/// Optional [`factor_cmap`] parameters
#[derive(Debug, Clone, PartialEq)]
pub struct FactorCmapOptions {
    /// Start slice index applied when factors have multiple levels
    pub start: i64,
    /// End slice index applied when factors have multiple levels
    pub end: Option<i64>,
    /// Color used when a value cannot be mapped
    pub nan_color: Color,
}

impl Default for FactorCmapOptions {
    fn default() -> Self {
        Self {
            start: 0,
            end: None,
            nan_color: Color::nan_default(),
        }
    }
}

/// Optional [`linear_cmap`] and [`log_cmap`] parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMapperOptions {
    /// Color for data below `low`. When `None` such values take the first palette color.
    pub low_color: Option<Color>,
    /// Color for data above `high`. When `None` such values take the last palette color.
    pub high_color: Option<Color>,
    pub nan_color: Color,
}

impl Default for ColorMapperOptions {
    fn default() -> Self {
        Self {
            low_color: None,
            high_color: None,
            nan_color: Color::nan_default(),
        }
    }
}

/// Optional [`factor_mark`] parameters
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FactorMarkOptions {
    pub start: i64,
    pub end: Option<i64>,
}

/// Apply a fixed offset to a column with a [`Dodge`] transform.
///
/// `range` is needed when the column is categorical, so the offset can be
/// computed in synthetic coordinates.
pub fn dodge(field_name: impl Into<String>, value: f64, range: Option<Range>) -> DataSpec {
    DataSpec::field(field_name, Some(Dodge { value, range }.into()))
}

/// Apply random noise of the given `width` to a column with a [`Jitter`] transform
pub fn jitter(field_name: impl Into<String>, width: f64, options: JitterOptions) -> DataSpec {
    let JitterOptions {
        mean,
        distribution,
        range,
    } = options;
    let jitter = Jitter {
        mean,
        width,
        distribution,
        range,
    };
    DataSpec::field(field_name, Some(jitter.into()))
}

/// Color a categorical column with a [`CategoricalColorMapper`].
///
/// A palette shorter than `factors` is accepted, the extra factors map to
/// `nan_color`.
pub fn factor_cmap(
    field_name: impl Into<String>,
    palette: impl IntoIterator<Item = Color>,
    factors: impl Into<Factors>,
    options: FactorCmapOptions,
) -> DataSpec {
    let mapper = CategoricalColorMapper::new(palette, factors)
        .start(options.start)
        .end(options.end)
        .nan_color(options.nan_color);
    DataSpec::field(field_name, Some(mapper.into()))
}

fn continuous_mapper(
    palette: impl IntoIterator<Item = Color>,
    low: f64,
    high: f64,
    options: ColorMapperOptions,
) -> ContinuousColorMapper {
    ContinuousColorMapper::new(palette)
        .low(low)
        .high(high)
        .low_color(options.low_color)
        .high_color(options.high_color)
        .nan_color(options.nan_color)
}

/// Color a numeric column with a linear color mapper over `[low, high]`
pub fn linear_cmap(
    field_name: impl Into<String>,
    palette: impl IntoIterator<Item = Color>,
    low: f64,
    high: f64,
    options: ColorMapperOptions,
) -> DataSpec {
    let mapper = continuous_mapper(palette, low, high, options);
    DataSpec::field(field_name, Some(Transform::linear_color_mapper(mapper)))
}

/// Color a numeric column with a log color mapper over `[low, high]`
pub fn log_cmap(
    field_name: impl Into<String>,
    palette: impl IntoIterator<Item = Color>,
    low: f64,
    high: f64,
    options: ColorMapperOptions,
) -> DataSpec {
    let mapper = continuous_mapper(palette, low, high, options);
    DataSpec::field(field_name, Some(Transform::log_color_mapper(mapper)))
}

/// Sum several columns row-wise with a [`Stack`] expression.
///
/// ```
/// use bokeh_transform::stack;
///
/// // the top of each bar sits at sales + marketing
/// let top = stack(["sales", "marketing"]);
/// assert_eq!(
///     top.to_json().unwrap(),
///     r#"{"expr":{"type":"Stack","fields":["sales","marketing"]}}"#
/// );
/// ```
pub fn stack<I, S>(fields: I) -> DataSpec
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    DataSpec::expr(Stack::new(fields))
}

/// Running sum of a column with a [`CumSum`] expression
pub fn cumsum(field_name: impl Into<String>, include_zero: bool) -> DataSpec {
    DataSpec::expr(CumSum::new(field_name).include_zero(include_zero))
}

/// Choose marker shapes for a categorical column with a [`CategoricalMarkerMapper`]
pub fn factor_mark(
    field_name: impl Into<String>,
    markers: impl IntoIterator<Item = MarkerType>,
    factors: impl Into<Factors>,
    options: FactorMarkOptions,
) -> DataSpec {
    let mapper = CategoricalMarkerMapper::new(markers, factors)
        .start(options.start)
        .end(options.end);
    DataSpec::field(field_name, Some(mapper.into()))
}

/// Apply an arbitrary client-side transform to a column
pub fn transform(field_name: impl Into<String>, transform: impl Into<Transform>) -> DataSpec {
    DataSpec::field(field_name, Some(transform.into()))
}
