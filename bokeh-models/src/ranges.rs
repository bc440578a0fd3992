use serde::{Deserialize, Serialize};

use crate::factors::Factors;

/// Ranges used by coordinate transforms to compute synthetic coordinates,
/// e.g. a [`FactorRange`] when the column holds categorical data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Range {
    Range1d(Range1d),
    DataRange1d(DataRange1d),
    FactorRange(FactorRange),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Range1d {
    pub start: f64,
    pub end: f64,
}

impl Range1d {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

impl Default for Range1d {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 1.0,
        }
    }
}

/// A range whose bounds are computed client-side from the data unless pinned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRange1d {
    pub start: Option<f64>,
    pub end: Option<f64>,
    #[serde(default = "default_data_range_padding")]
    pub range_padding: f64,
}

fn default_data_range_padding() -> f64 {
    0.1
}

impl Default for DataRange1d {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            range_padding: default_data_range_padding(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorRange {
    pub factors: Factors,
    #[serde(default)]
    pub factor_padding: f64,
    #[serde(default = "default_subgroup_padding")]
    pub subgroup_padding: f64,
    #[serde(default = "default_group_padding")]
    pub group_padding: f64,
    #[serde(default)]
    pub range_padding: f64,
}

fn default_subgroup_padding() -> f64 {
    0.8
}

fn default_group_padding() -> f64 {
    1.4
}

impl FactorRange {
    pub fn new(factors: impl Into<Factors>) -> Self {
        Self {
            factors: factors.into(),
            factor_padding: 0.0,
            subgroup_padding: default_subgroup_padding(),
            group_padding: default_group_padding(),
            range_padding: 0.0,
        }
    }

    pub fn factor_padding(mut self, padding: f64) -> Self {
        self.factor_padding = padding;
        self
    }

    pub fn range_padding(mut self, padding: f64) -> Self {
        self.range_padding = padding;
        self
    }
}

impl From<Range1d> for Range {
    fn from(value: Range1d) -> Self {
        Range::Range1d(value)
    }
}

impl From<DataRange1d> for Range {
    fn from(value: DataRange1d) -> Self {
        Range::DataRange1d(value)
    }
}

impl From<FactorRange> for Range {
    fn from(value: FactorRange) -> Self {
        Range::FactorRange(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_factor_range_json() -> Result<(), serde_json::Error> {
        let range = Range::from(FactorRange::new(["a", "b"]).range_padding(0.1));
        assert_eq!(
            serde_json::to_value(&range)?,
            json!({
                "type": "FactorRange",
                "factors": ["a", "b"],
                "factor_padding": 0.0,
                "subgroup_padding": 0.8,
                "group_padding": 1.4,
                "range_padding": 0.1,
            })
        );
        Ok(())
    }

    #[test]
    fn test_deserialize_applies_defaults() -> Result<(), serde_json::Error> {
        let range: Range = serde_json::from_value(json!({
            "type": "DataRange1d",
            "start": 2.0,
            "end": null,
        }))?;
        assert_eq!(
            range,
            Range::DataRange1d(DataRange1d {
                start: Some(2.0),
                ..Default::default()
            })
        );
        Ok(())
    }
}
