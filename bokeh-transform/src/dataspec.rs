use bokeh_models::error::ModelError;
use bokeh_models::expressions::Expression;
use bokeh_models::model::Transform;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Associates a column, a fixed value, or a computed expression with the
/// property of a glyph.
///
/// Serialized forms:
///
/// * `{"field": "x", "transform": {...}}`
/// * `{"expr": {...}}`
/// * `{"value": 1.5, "transform": {...}}`
///
/// `transform` is omitted when there is none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataSpec {
    Field {
        field: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        transform: Option<Transform>,
    },
    Expr {
        expr: Expression,
    },
    Value {
        value: serde_json::Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        transform: Option<Transform>,
    },
}

// The variant is chosen by key rather than by trial, so a bad transform or
// expression reports its own error instead of "no variant matched".
impl<'de> Deserialize<'de> for DataSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;

        let transform = match map.get("transform") {
            Some(serde_json::Value::Null) | None => None,
            Some(t) => Some(Transform::deserialize(t).map_err(D::Error::custom)?),
        };

        if let Some(field) = map.get("field") {
            let field = String::deserialize(field).map_err(D::Error::custom)?;
            Ok(DataSpec::Field { field, transform })
        } else if let Some(expr) = map.get("expr") {
            let expr = Expression::deserialize(expr).map_err(D::Error::custom)?;
            Ok(DataSpec::Expr { expr })
        } else if let Some(value) = map.get("value") {
            Ok(DataSpec::Value {
                value: value.clone(),
                transform,
            })
        } else {
            Err(D::Error::custom(
                "DataSpec requires one of `field`, `expr`, or `value`",
            ))
        }
    }
}

impl DataSpec {
    pub fn field(name: impl Into<String>, transform: Option<Transform>) -> Self {
        let field = name.into();
        debug!(
            field = %field,
            transform = transform.as_ref().map(Transform::type_name),
            "field DataSpec"
        );
        DataSpec::Field { field, transform }
    }

    pub fn expr(expression: impl Into<Expression>) -> Self {
        let expr = expression.into();
        debug!(?expr, "expr DataSpec");
        DataSpec::Expr { expr }
    }

    pub fn value(value: impl Into<serde_json::Value>, transform: Option<Transform>) -> Self {
        DataSpec::Value {
            value: value.into(),
            transform,
        }
    }

    /// Column name, for field specs
    pub fn field_name(&self) -> Option<&str> {
        match self {
            DataSpec::Field { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn transform(&self) -> Option<&Transform> {
        match self {
            DataSpec::Field { transform, .. } | DataSpec::Value { transform, .. } => {
                transform.as_ref()
            }
            DataSpec::Expr { .. } => None,
        }
    }

    pub fn expression(&self) -> Option<&Expression> {
        match self {
            DataSpec::Expr { expr } => Some(expr),
            _ => None,
        }
    }

    pub fn fixed_value(&self) -> Option<&serde_json::Value> {
        match self {
            DataSpec::Value { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a spec, re-validating every color and enumeration it carries
    pub fn from_json(s: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(s)?)
    }
}

impl From<&str> for DataSpec {
    fn from(value: &str) -> Self {
        DataSpec::field(value, None)
    }
}

impl From<String> for DataSpec {
    fn from(value: String) -> Self {
        DataSpec::field(value, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bokeh_models::expressions::Stack;
    use bokeh_models::transforms::Dodge;
    use serde_json::json;

    #[test]
    fn test_field_without_transform_omits_key() -> Result<(), ModelError> {
        let spec = DataSpec::from("x");
        assert_eq!(spec.to_json()?, r#"{"field":"x"}"#);
        assert_eq!(spec.field_name(), Some("x"));
        assert!(spec.transform().is_none());
        Ok(())
    }

    #[test]
    fn test_value_spec() -> Result<(), ModelError> {
        let spec = DataSpec::value(2.5, Some(Dodge::new(1.0).into()));
        assert_eq!(spec.fixed_value(), Some(&json!(2.5)));
        assert_eq!(spec.field_name(), None);
        assert_eq!(
            serde_json::to_value(&spec)?,
            json!({"value": 2.5, "transform": {"type": "Dodge", "value": 1.0, "range": null}})
        );
        Ok(())
    }

    #[test]
    fn test_from_json_picks_variant() -> Result<(), ModelError> {
        let field =
            DataSpec::from_json(r#"{"field": "y", "transform": {"type": "Dodge", "value": 0.2}}"#)?;
        assert_eq!(field, DataSpec::field("y", Some(Dodge::new(0.2).into())));

        let expr = DataSpec::from_json(r#"{"expr": {"type": "Stack", "fields": ["a", "b"]}}"#)?;
        assert_eq!(expr, DataSpec::expr(Stack::new(["a", "b"])));
        assert!(expr.transform().is_none());

        let value = DataSpec::from_json(r#"{"value": "red"}"#)?;
        assert_eq!(value.fixed_value(), Some(&json!("red")));
        Ok(())
    }

    #[test]
    fn test_from_json_reports_inner_error() {
        let err = DataSpec::from_json(r#"{"field": "y", "transform": {"type": "Nope"}}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("unknown variant `Nope`"), "{err}");

        let err = DataSpec::from_json(
            r#"{"field": "y", "transform": {"type": "LinearColorMapper", "palette": ["blurple"]}}"#,
        )
        .unwrap_err()
        .to_string();
        assert!(err.contains("blurple"), "{err}");

        let err = DataSpec::from_json(r#"{"expr": {"type": "Stack", "fields": "a"}}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("invalid type"), "{err}");

        let err = DataSpec::from_json(r#"{"column": "y"}"#).unwrap_err().to_string();
        assert!(err.contains("requires one of"), "{err}");

        assert!(DataSpec::from_json("[]").is_err());
    }

    #[test]
    fn test_from_json_null_transform() -> Result<(), ModelError> {
        let spec = DataSpec::from_json(r#"{"field": "y", "transform": null}"#)?;
        assert_eq!(spec, DataSpec::from("y"));
        Ok(())
    }
}
