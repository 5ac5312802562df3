//! Framework-level defaults applied when a render option is left unset.
//!
//! # Design
//! - `IconTheme::default()` carries the built-in defaults (24px, `currentColor`,
//!   stroke width 2, outline).
//! - JSON documents overlay the defaults field by field; unknown fields are
//!   rejected so typos do not silently fall back.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{GlyphError, GlyphResult};

/// Default rendered width/height in pixels.
pub const DEFAULT_SIZE: u32 = 24;
/// Default stroke colour; inherits the surrounding text colour.
pub const DEFAULT_COLOR: &str = "currentColor";
/// Default SVG stroke width.
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;
/// Default class prefix for the base class tokens.
pub const DEFAULT_CLASS_PREFIX: &str = "glyph";
/// Largest accepted icon size.
pub const MAX_SIZE: u32 = 4096;

/// Fill mode for rendered icons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconVariant {
    /// Stroked shapes with no fill.
    #[default]
    Outline,
    /// Shapes filled with the icon colour.
    Solid,
}

/// Defaults applied by the renderer when an option is unset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconTheme {
    /// Width and height in pixels.
    pub size: u32,
    /// Stroke colour (and fill colour for solid icons).
    pub color: String,
    /// SVG stroke width on the 24x24 grid.
    pub stroke_width: f32,
    /// Fill mode.
    pub variant: IconVariant,
    /// Prefix for the base class tokens; empty disables them.
    pub class_prefix: String,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            color: DEFAULT_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            variant: IconVariant::Outline,
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
        }
    }
}

impl IconTheme {
    /// Parse a JSON theme document and overlay it onto the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError::ThemeDocument`] for malformed JSON and the errors of
    /// [`IconTheme::from_json`] otherwise.
    pub fn from_json_str(document: &str) -> GlyphResult<Self> {
        let value: Value = serde_json::from_str(document)
            .map_err(|source| GlyphError::ThemeDocument { source })?;
        Self::from_json(&value)
    }

    /// Overlay a JSON object onto the defaults.
    ///
    /// Both `snake_case` and `camelCase` spellings are accepted for the
    /// two-word fields.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError::UnknownThemeField`] for unrecognised keys and
    /// [`GlyphError::InvalidThemeField`] for values of the wrong type or range.
    pub fn from_json(value: &Value) -> GlyphResult<Self> {
        let map = value.as_object().ok_or_else(|| GlyphError::InvalidThemeField {
            field: "theme",
            value: Some(value.to_string()),
            reason: "must be an object",
        })?;

        let mut theme = Self::default();
        for (key, field) in map {
            match key.as_str() {
                "size" => theme.size = parse_size(field)?,
                "color" => theme.color = parse_string(field, "color")?,
                "stroke_width" | "strokeWidth" => theme.stroke_width = parse_stroke_width(field)?,
                "variant" => theme.variant = parse_variant(field)?,
                "class_prefix" | "classPrefix" => {
                    theme.class_prefix = parse_string(field, "class_prefix")?;
                }
                other => {
                    return Err(GlyphError::UnknownThemeField {
                        field: other.to_string(),
                    });
                }
            }
        }

        theme.validate()?;
        debug!(
            size = theme.size,
            stroke_width = f64::from(theme.stroke_width),
            "theme overlay applied"
        );
        Ok(theme)
    }

    /// Check every field against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError::InvalidThemeField`] naming the first offending field.
    pub fn validate(&self) -> GlyphResult<()> {
        if !(1..=MAX_SIZE).contains(&self.size) {
            return Err(invalid("size", self.size, "must be between 1 and 4096"));
        }
        if !is_safe_color(&self.color) {
            return Err(invalid(
                "color",
                &self.color,
                "must be a non-empty colour without quotes or angle brackets",
            ));
        }
        if !self.stroke_width.is_finite()
            || self.stroke_width <= 0.0
            || self.stroke_width > 24.0
        {
            return Err(invalid(
                "stroke_width",
                self.stroke_width,
                "must be greater than 0 and at most 24",
            ));
        }
        if !self
            .class_prefix
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
        {
            return Err(invalid(
                "class_prefix",
                &self.class_prefix,
                "must contain only lowercase letters, digits, and dashes",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, value: impl ToString, reason: &'static str) -> GlyphError {
    GlyphError::InvalidThemeField {
        field,
        value: Some(value.to_string()),
        reason,
    }
}

fn is_safe_color(color: &str) -> bool {
    !color.trim().is_empty() && !color.contains(['"', '<', '>'])
}

fn parse_size(value: &Value) -> GlyphResult<u32> {
    value
        .as_u64()
        .and_then(|raw| u32::try_from(raw).ok())
        .ok_or_else(|| invalid("size", value, "must be a positive integer"))
}

#[allow(clippy::cast_possible_truncation)]
fn parse_stroke_width(value: &Value) -> GlyphResult<f32> {
    value
        .as_f64()
        .map(|raw| raw as f32)
        .ok_or_else(|| invalid("stroke_width", value, "must be a number"))
}

fn parse_variant(value: &Value) -> GlyphResult<IconVariant> {
    match value.as_str() {
        Some("outline") => Ok(IconVariant::Outline),
        Some("solid") => Ok(IconVariant::Solid),
        _ => Err(invalid("variant", value, "must be 'outline' or 'solid'")),
    }
}

fn parse_string(value: &Value, field: &'static str) -> GlyphResult<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid(field, value, "must be a string"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_framework_constants() {
        let theme = IconTheme::default();
        assert_eq!(theme.size, 24);
        assert_eq!(theme.color, "currentColor");
        assert!((theme.stroke_width - 2.0).abs() < f32::EPSILON);
        assert_eq!(theme.variant, IconVariant::Outline);
        assert!(theme.validate().is_ok());
    }

    #[test]
    fn overlay_keeps_unset_fields() {
        let theme = IconTheme::from_json(&json!({"size": 16, "strokeWidth": 1.5}))
            .expect("overlay should parse");
        assert_eq!(theme.size, 16);
        assert!((theme.stroke_width - 1.5).abs() < f32::EPSILON);
        assert_eq!(theme.color, DEFAULT_COLOR);
        assert_eq!(theme.class_prefix, DEFAULT_CLASS_PREFIX);
    }

    #[test]
    fn overlay_rejects_unknown_fields() {
        let err = IconTheme::from_json(&json!({"sise": 16})).expect_err("typo should fail");
        assert!(matches!(err, GlyphError::UnknownThemeField { ref field } if field == "sise"));
    }

    #[test]
    fn overlay_rejects_invalid_values() {
        for (doc, expected) in [
            (json!({"size": 0}), "size"),
            (json!({"size": "big"}), "size"),
            (json!({"stroke_width": -1}), "stroke_width"),
            (json!({"color": "\"><script>"}), "color"),
            (json!({"variant": "duotone"}), "variant"),
            (json!({"class_prefix": "Glyph"}), "class_prefix"),
            (json!([1, 2]), "theme"),
        ] {
            match IconTheme::from_json(&doc) {
                Err(GlyphError::InvalidThemeField { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected invalid {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn malformed_documents_surface_parse_errors() {
        let err = IconTheme::from_json_str("{size: 3").expect_err("not json");
        assert!(matches!(err, GlyphError::ThemeDocument { .. }));
    }

    #[test]
    fn serde_round_trip_uses_lowercase_variants() {
        let theme = IconTheme {
            variant: IconVariant::Solid,
            ..IconTheme::default()
        };
        let value = serde_json::to_value(&theme).expect("serialize");
        assert_eq!(value["variant"], "solid");
        let back: IconTheme = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, theme);
    }
}
