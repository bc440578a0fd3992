use bokeh_models::color::Color;
use bokeh_models::error::ModelError;
use bokeh_models::expressions::{CumSum, Expression};
use bokeh_models::factors::Factors;
use bokeh_models::mappers::MarkerType;
use bokeh_models::model::Transform;
use bokeh_models::palettes::{category10, greys, parse_palette};
use bokeh_models::ranges::{FactorRange, Range, Range1d};
use bokeh_models::transforms::{CustomJsTransform, Distribution, LinearInterpolator};
use bokeh_transform::{
    cumsum, dodge, factor_cmap, factor_mark, jitter, linear_cmap, log_cmap, stack, transform,
    ColorMapperOptions, DataSpec, FactorCmapOptions, FactorMarkOptions, JitterOptions,
};
use float_cmp::assert_approx_eq;
use serde_json::json;

mod utils;
use utils::capture_warnings;

#[test]
fn test_dodge() {
    let spec = dodge("x", -0.25, None);
    assert_eq!(spec.field_name(), Some("x"));
    match spec.transform() {
        Some(Transform::Dodge(d)) => {
            assert_approx_eq!(f64, d.value, -0.25);
            assert!(d.range.is_none());
        }
        other => panic!("Expected Dodge, got {other:?}"),
    }
}

#[test]
fn test_dodge_with_factor_range() -> Result<(), ModelError> {
    let range = Range::from(FactorRange::new(["2015", "2016", "2017"]));
    let spec = dodge("year", 0.25, Some(range.clone()));
    assert_eq!(
        serde_json::to_value(&spec)?,
        json!({
            "field": "year",
            "transform": {
                "type": "Dodge",
                "value": 0.25,
                "range": serde_json::to_value(&range)?,
            }
        })
    );
    Ok(())
}

#[test]
fn test_jitter_defaults() -> Result<(), ModelError> {
    let spec = jitter("day", 0.6, JitterOptions::default());
    assert_eq!(
        serde_json::to_value(&spec)?,
        json!({
            "field": "day",
            "transform": {
                "type": "Jitter",
                "mean": 0.0,
                "width": 0.6,
                "distribution": "uniform",
                "range": null,
            }
        })
    );
    Ok(())
}

#[test]
fn test_jitter_options_pass_through() {
    let range = Range::from(Range1d::new(0.0, 10.0));
    let spec = jitter(
        "day",
        2.0,
        JitterOptions {
            mean: 1.5,
            distribution: Distribution::Normal,
            range: Some(range.clone()),
        },
    );
    match spec.transform() {
        Some(Transform::Jitter(j)) => {
            assert_approx_eq!(f64, j.width, 2.0);
            assert_approx_eq!(f64, j.mean, 1.5);
            assert_eq!(j.distribution, Distribution::Normal);
            assert_eq!(j.range.as_ref(), Some(&range));
        }
        other => panic!("Expected Jitter, got {other:?}"),
    }
}

#[test]
fn test_factor_cmap_defaults() -> Result<(), ModelError> {
    let palette = category10(3)?;
    let spec = factor_cmap(
        "fruit",
        palette.clone(),
        ["apple", "pear", "fig"],
        FactorCmapOptions::default(),
    );
    assert_eq!(spec.field_name(), Some("fruit"));
    match spec.transform() {
        Some(Transform::CategoricalColorMapper(m)) => {
            assert_eq!(m.palette, palette);
            assert_eq!(m.factors, Factors::from(["apple", "pear", "fig"]));
            assert_eq!(m.start, 0);
            assert_eq!(m.end, None);
            assert_eq!(m.nan_color.as_str(), "gray");
        }
        other => panic!("Expected CategoricalColorMapper, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_factor_cmap_nested_factors_with_slice() -> Result<(), ModelError> {
    let factors = vec![("east", "a"), ("east", "b"), ("west", "a")];
    let spec = factor_cmap(
        "region",
        parse_palette(["red", "blue"])?,
        factors,
        FactorCmapOptions {
            start: 1,
            end: Some(2),
            nan_color: Color::parse("#000")?,
        },
    );
    let value = serde_json::to_value(&spec)?;
    assert_eq!(value["transform"]["type"], json!("CategoricalColorMapper"));
    assert_eq!(value["transform"]["factors"], json!([["east", "a"], ["east", "b"], ["west", "a"]]));
    assert_eq!(value["transform"]["start"], json!(1));
    assert_eq!(value["transform"]["end"], json!(2));
    assert_eq!(value["transform"]["nan_color"], json!("#000"));
    Ok(())
}

#[test]
fn test_factor_cmap_short_palette_warning_names_nan_color() -> Result<(), ModelError> {
    let (spec, logs) = capture_warnings(|| -> Result<DataSpec, ModelError> {
        Ok(factor_cmap(
            "k",
            parse_palette(["red"])?,
            ["a", "b", "c"],
            FactorCmapOptions {
                nan_color: Color::parse("black")?,
                ..Default::default()
            },
        ))
    });
    let spec = spec?;

    assert_eq!(serde_json::to_value(&spec)?["transform"]["nan_color"], json!("black"));
    assert!(logs.contains("WARN"), "expected a warning, got: {logs}");
    assert!(logs.contains(r#"["b", "c"] will be assigned to `nan_color` black"#), "{logs}");
    Ok(())
}

#[test]
fn test_factor_cmap_full_palette_is_silent() -> Result<(), ModelError> {
    let palette = category10(3)?;
    let (_, logs) = capture_warnings(|| {
        factor_cmap("k", palette, ["a", "b", "c"], FactorCmapOptions::default())
    });
    assert!(logs.is_empty(), "unexpected output: {logs}");
    Ok(())
}

#[test]
fn test_factor_mark_short_marker_list_warns() {
    let (_, logs) = capture_warnings(|| {
        factor_mark("k", [MarkerType::Hex], ["a", "b"], FactorMarkOptions::default())
    });
    assert!(logs.contains(r#"["b"] will be assigned to `default_value` circle"#), "{logs}");
}

#[test]
fn test_log_cmap_non_positive_low_warns() -> Result<(), ModelError> {
    let palette = greys(3)?;
    let (spec, logs) = capture_warnings(|| {
        log_cmap("v", palette, 0.0, 10.0, ColorMapperOptions::default())
    });
    assert_eq!(spec.transform().map(Transform::type_name), Some("LogColorMapper"));
    assert!(logs.contains("low bound must be positive"), "{logs}");
    Ok(())
}

#[test]
fn test_linear_cmap_leaves_unset_colors_absent() -> Result<(), ModelError> {
    let palette = greys(5)?;
    let options = ColorMapperOptions::default();
    let spec = linear_cmap("temp", palette.clone(), -10.0, 40.0, options);
    assert_eq!(spec.field_name(), Some("temp"));
    match spec.transform() {
        Some(Transform::LinearColorMapper(m)) => {
            assert_eq!(m.palette, palette);
            assert_eq!(m.low, Some(-10.0));
            assert_eq!(m.high, Some(40.0));
            assert!(m.low_color.is_none());
            assert!(m.high_color.is_none());
            assert_eq!(m.nan_color.as_str(), "gray");
        }
        other => panic!("Expected LinearColorMapper, got {other:?}"),
    }

    let value = serde_json::to_value(&spec)?;
    assert_eq!(value["transform"]["high_color"], json!(null));
    assert_eq!(value["transform"]["low_color"], json!(null));
    Ok(())
}

#[test]
fn test_log_cmap_options_pass_through() -> Result<(), ModelError> {
    let options = ColorMapperOptions {
        low_color: Some(Color::parse("white")?),
        high_color: Some(Color::rgb(255, 0, 0)),
        nan_color: Color::parse("transparent")?,
    };
    let spec = log_cmap("population", greys(9)?, 1.0, 1e6, options);
    match spec.transform() {
        Some(Transform::LogColorMapper(m)) => {
            assert_eq!(m.low, Some(1.0));
            assert_eq!(m.high, Some(1e6));
            assert_eq!(m.low_color.as_ref().map(Color::as_str), Some("white"));
            assert_eq!(m.high_color.as_ref().map(Color::as_str), Some("rgb(255, 0, 0)"));
            assert_eq!(m.nan_color.as_str(), "transparent");
        }
        other => panic!("Expected LogColorMapper, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_stack_keeps_columns_in_order() -> Result<(), ModelError> {
    let spec = stack(["sales", "marketing", "support"]);
    assert!(spec.field_name().is_none());
    match spec.expression() {
        Some(Expression::Stack(s)) => {
            assert_eq!(s.fields, vec!["sales", "marketing", "support"]);
        }
        other => panic!("Expected Stack, got {other:?}"),
    }
    assert_eq!(
        serde_json::to_value(&spec)?,
        json!({"expr": {"type": "Stack", "fields": ["sales", "marketing", "support"]}})
    );
    Ok(())
}

#[test]
fn test_stack_accepts_owned_names_and_empty() {
    let names: Vec<String> = vec!["b".to_string(), "a".to_string()];
    match stack(names).expression() {
        Some(Expression::Stack(s)) => assert_eq!(s.fields, vec!["b", "a"]),
        other => panic!("Expected Stack, got {other:?}"),
    }

    match stack(Vec::<String>::new()).expression() {
        Some(Expression::Stack(s)) => assert!(s.fields.is_empty()),
        other => panic!("Expected Stack, got {other:?}"),
    }
}

#[test]
fn test_cumsum() {
    let spec = cumsum("visits", true);
    assert_eq!(
        spec.expression(),
        Some(&Expression::CumSum(CumSum::new("visits").include_zero(true)))
    );
}

#[test]
fn test_factor_mark() -> Result<(), ModelError> {
    let spec = factor_mark(
        "species",
        [MarkerType::Circle, MarkerType::Triangle, MarkerType::Square],
        ["adelie", "gentoo", "chinstrap"],
        FactorMarkOptions::default(),
    );
    let value = serde_json::to_value(&spec)?;
    assert_eq!(value["field"], json!("species"));
    assert_eq!(value["transform"]["type"], json!("CategoricalMarkerMapper"));
    assert_eq!(value["transform"]["markers"], json!(["circle", "triangle", "square"]));
    assert_eq!(value["transform"]["default_value"], json!("circle"));
    Ok(())
}

#[test]
fn test_transform_accepts_any_transform() -> Result<(), ModelError> {
    let interp = LinearInterpolator::new(vec![0.0, 10.0], vec![0.0, 100.0])?;
    let spec = transform("score", interp.clone());
    assert_eq!(spec.field_name(), Some("score"));
    assert_eq!(spec.transform(), Some(&Transform::LinearInterpolator(interp)));

    let custom = CustomJsTransform::new().func("return x * 2");
    let spec = transform("score", custom.clone());
    assert_eq!(spec.transform(), Some(&Transform::CustomJs(custom)));
    Ok(())
}

#[test]
fn test_helpers_match_generic_transform() {
    let via_helper = jitter("x", 0.3, JitterOptions::default());
    let via_transform = transform("x", bokeh_models::transforms::Jitter::new(0.3));
    assert_eq!(via_helper, via_transform);
}

#[test]
fn test_json_roundtrip_preserves_spec() -> Result<(), ModelError> {
    let factors = ["a", "b", "c", "d"];
    let spec = factor_cmap("k", category10(4)?, factors, FactorCmapOptions::default());
    let parsed = DataSpec::from_json(&spec.to_json_pretty()?)?;
    assert_eq!(parsed, spec);
    Ok(())
}
