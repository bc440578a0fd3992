//! Named color palettes and palette utilities

use crate::color::Color;
use crate::error::ModelError;

pub type Palette = Vec<Color>;

const CATEGORY20: [&str; 20] = [
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
    "#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7",
    "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

// Greys are not prefixes of one another, each size is its own ramp (dark to light)
const GREYS: [&[&str]; 7] = [
    &["#636363", "#bdbdbd", "#f0f0f0"],
    &["#525252", "#969696", "#cccccc", "#f7f7f7"],
    &["#252525", "#636363", "#969696", "#cccccc", "#f7f7f7"],
    &["#252525", "#636363", "#969696", "#bdbdbd", "#d9d9d9", "#f7f7f7"],
    &["#252525", "#525252", "#737373", "#969696", "#bdbdbd", "#d9d9d9", "#f7f7f7"],
    &["#252525", "#525252", "#737373", "#969696", "#bdbdbd", "#d9d9d9", "#f0f0f0", "#ffffff"],
    &[
        "#000000", "#252525", "#525252", "#737373", "#969696", "#bdbdbd", "#d9d9d9", "#f0f0f0",
        "#ffffff",
    ],
];

/// Parse a sequence of CSS color strings into a palette
pub fn parse_palette<I, S>(colors: I) -> Result<Palette, ModelError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    colors.into_iter().map(|c| Color::parse(c.as_ref())).collect()
}

fn check_size(name: &str, n: usize, min: usize, max: usize) -> Result<(), ModelError> {
    if n < min || n > max {
        return Err(ModelError::PaletteSizeOutOfRange {
            name: name.to_string(),
            requested: n,
            min,
            max,
        });
    }
    Ok(())
}

/// D3 Category10, available in sizes 3 through 10
pub fn category10(n: usize) -> Result<Palette, ModelError> {
    check_size("Category10", n, 3, CATEGORY10.len())?;
    parse_palette(&CATEGORY10[..n])
}

/// D3 Category20, available in sizes 3 through 20
pub fn category20(n: usize) -> Result<Palette, ModelError> {
    check_size("Category20", n, 3, CATEGORY20.len())?;
    parse_palette(&CATEGORY20[..n])
}

/// ColorBrewer Greys, available in sizes 3 through 9
pub fn greys(n: usize) -> Result<Palette, ModelError> {
    check_size("Greys", n, 3, 9)?;
    parse_palette(GREYS[n - 3])
}

/// Look up a palette by name.
///
/// Names take the form `<family>_<size>` (`"Category10_5"`) or just the family
/// name, which returns the largest size available.
pub fn palette_by_name(name: &str) -> Result<Palette, ModelError> {
    let (family, size) = match name.rsplit_once('_') {
        Some((family, size)) => {
            let size = size
                .parse::<usize>()
                .map_err(|_| ModelError::UnknownPalette(name.to_string()))?;
            (family, Some(size))
        }
        None => (name, None),
    };

    match family {
        "Category10" => category10(size.unwrap_or(CATEGORY10.len())),
        "Category20" => category20(size.unwrap_or(CATEGORY20.len())),
        "Greys" => greys(size.unwrap_or(9)),
        _ => Err(ModelError::UnknownPalette(name.to_string())),
    }
}

/// Select `n` evenly spaced colors from `palette`, always including the first
/// and (for `n > 1`) the last color.
pub fn linear_palette(palette: &[Color], n: usize) -> Result<Palette, ModelError> {
    if n > palette.len() {
        return Err(ModelError::PaletteTooShort {
            requested: n,
            available: palette.len(),
        });
    }
    let last = palette.len().saturating_sub(1);
    Ok((0..n)
        .map(|i| {
            let idx = if n == 1 { 0 } else { i * last / (n - 1) };
            palette[idx].clone()
        })
        .collect())
}
