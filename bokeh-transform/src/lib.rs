//! Helpers for applying client-side transformations to data fields and
//! computing client-side expressions over data columns.
//!
//! Each helper returns a [`DataSpec`] that serializes to the JSON consumed by
//! the browser-side renderer; the models themselves live in `bokeh_models`.

pub mod dataspec;
pub mod transform;

pub use bokeh_models as models;
pub use dataspec::DataSpec;
pub use transform::{
    cumsum, dodge, factor_cmap, factor_mark, jitter, linear_cmap, log_cmap, stack, transform,
    ColorMapperOptions, FactorCmapOptions, FactorMarkOptions, JitterOptions,
};
