pub mod color;
pub mod error;
pub mod expressions;
pub mod factors;
pub mod mappers;
pub mod model;
pub mod palettes;
pub mod ranges;
pub mod transforms;

#[cfg(test)]
mod test_utils;
