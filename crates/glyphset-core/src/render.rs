//! The single rendering routine shared by every icon.
//!
//! # Design
//! - `render` is a pure function of (definition, options, theme); the output is a
//!   framework-neutral `SvgElement` tree that adapters convert or serialise.
//! - Unset options fall back to the theme; passthrough attributes come last and
//!   override recognised attributes in place, except `class` which merges.
//! - Absolute stroke width divides by the scale factor so the on-screen line
//!   thickness stays at `stroke_width` pixels.

use std::borrow::Cow;

use tracing::{trace, warn};

use crate::catalog::{IconDefinition, VIEWBOX_SIZE};
use crate::theme::{IconTheme, IconVariant};

/// SVG namespace attached to every root element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Attribute value as produced by the renderer.
pub type AttrText = Cow<'static, str>;

/// Caller-facing render configuration. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderOptions {
    /// Width and height in pixels.
    pub size: Option<u32>,
    /// Stroke colour (and fill colour for solid icons).
    pub color: Option<AttrText>,
    /// SVG stroke width on the 24x24 grid.
    pub stroke_width: Option<f32>,
    /// Keep the on-screen stroke thickness constant across sizes.
    pub absolute_stroke_width: bool,
    /// Extra class tokens appended after the base classes.
    pub class: Option<AttrText>,
    /// Fill mode override.
    pub variant: Option<IconVariant>,
    /// Accessible name; also switches the icon from decorative to `role="img"`.
    pub title: Option<AttrText>,
    /// Unrecognised attributes forwarded to the root element.
    pub passthrough: Vec<(&'static str, AttrText)>,
}

impl RenderOptions {
    /// Options with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pixel size.
    #[must_use]
    pub const fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the colour.
    #[must_use]
    pub fn color(mut self, color: impl Into<AttrText>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the stroke width.
    #[must_use]
    pub const fn stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = Some(stroke_width);
        self
    }

    /// Toggle absolute stroke width.
    #[must_use]
    pub const fn absolute_stroke_width(mut self, absolute: bool) -> Self {
        self.absolute_stroke_width = absolute;
        self
    }

    /// Set extra class tokens.
    #[must_use]
    pub fn class(mut self, class: impl Into<AttrText>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Override the fill mode.
    #[must_use]
    pub const fn variant(mut self, variant: IconVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Set the accessible title.
    #[must_use]
    pub fn title(mut self, title: impl Into<AttrText>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Forward an extra attribute to the root element.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<AttrText>) -> Self {
        self.passthrough.push((name, value.into()));
        self
    }
}

/// A rendered SVG element with ordered attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgElement {
    /// Element name.
    pub tag: &'static str,
    /// Attributes in output order.
    pub attributes: Vec<(&'static str, AttrText)>,
    /// Text content, used by `<title>`.
    pub text: Option<AttrText>,
    /// Child elements in document order.
    pub children: Vec<SvgElement>,
}

impl SvgElement {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Value of the named attribute, if set.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_ref())
    }

    /// Tokens of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attribute("class")
            .into_iter()
            .flat_map(str::split_whitespace)
    }

    /// On-screen stroke thickness in pixels: `stroke-width` scaled by `width / 24`.
    #[must_use]
    pub fn rendered_stroke_px(&self) -> Option<f32> {
        let stroke = self.attribute("stroke-width")?.parse::<f32>().ok()?;
        let width = self.attribute("width")?.parse::<f32>().ok()?;
        Some(stroke * width / viewbox_f32())
    }

    /// Set or replace an attribute, keeping its original position.
    fn set(&mut self, name: &'static str, value: impl Into<AttrText>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Serialise the element and its children as SVG markup.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            push_escaped(out, value);
            out.push('"');
        }
        if self.children.is_empty() && self.text.is_none() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(text) = &self.text {
            push_escaped(out, text);
        }
        for child in &self.children {
            child.write_markup(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

fn push_escaped(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
const fn viewbox_f32() -> f32 {
    VIEWBOX_SIZE as f32
}

/// Format a number for an SVG attribute.
///
/// Uses the shortest decimal that reads back as the same `f32`, never an
/// exponent, so tiny absolute stroke widths keep their precision.
#[must_use]
pub fn format_number(value: f32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Effective `stroke-width` attribute for the given options.
#[must_use]
pub fn effective_stroke_width(stroke_width: f32, size: u32, absolute: bool) -> f32 {
    if !absolute {
        return stroke_width;
    }
    if size == 0 {
        warn!("absolute stroke width requested for a zero-sized icon; using the unscaled width");
        return stroke_width;
    }
    #[allow(clippy::cast_precision_loss)]
    let size = size as f32;
    stroke_width * viewbox_f32() / size
}

/// Merge class tokens: split on whitespace, drop empties, keep the first of each.
#[must_use]
pub fn merge_classes<'a>(sources: impl IntoIterator<Item = &'a str>) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for token in sources.into_iter().flat_map(str::split_whitespace) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens.join(" ")
}

/// Render `definition` with `options`, falling back to `theme` for unset fields.
#[must_use]
pub fn render(
    definition: &IconDefinition,
    options: &RenderOptions,
    theme: &IconTheme,
) -> SvgElement {
    let size = options.size.unwrap_or(theme.size);
    let color: AttrText = options
        .color
        .clone()
        .unwrap_or_else(|| Cow::Owned(theme.color.clone()));
    let stroke_width = effective_stroke_width(
        options.stroke_width.unwrap_or(theme.stroke_width),
        size,
        options.absolute_stroke_width,
    );
    let variant = options.variant.unwrap_or(theme.variant);
    let fill = match variant {
        IconVariant::Outline => Cow::Borrowed("none"),
        IconVariant::Solid => color.clone(),
    };
    trace!(icon = definition.id(), size, "rendering icon");

    let mut root = SvgElement::new("svg");
    root.set("xmlns", SVG_NAMESPACE);
    root.set("width", size.to_string());
    root.set("height", size.to_string());
    root.set("viewBox", "0 0 24 24");
    root.set("fill", fill);
    root.set("stroke", color);
    root.set("stroke-width", format_number(stroke_width));
    root.set("stroke-linecap", "round");
    root.set("stroke-linejoin", "round");

    let base = if theme.class_prefix.is_empty() {
        String::new()
    } else {
        format!("{prefix} {prefix}-{id}", prefix = theme.class_prefix, id = definition.id())
    };
    let mut class_sources = vec![base.as_str(), options.class.as_deref().unwrap_or_default()];
    class_sources.extend(
        options
            .passthrough
            .iter()
            .filter(|(name, _)| *name == "class")
            .map(|(_, value)| value.as_ref()),
    );
    let classes = merge_classes(class_sources);
    if !classes.is_empty() {
        root.set("class", classes);
    }

    match &options.title {
        Some(title) => {
            root.set("role", "img");
            root.set("aria-label", title.clone());
            let mut title_node = SvgElement::new("title");
            title_node.text = Some(title.clone());
            root.children.push(title_node);
        }
        None => root.set("aria-hidden", "true"),
    }

    for (name, value) in options.passthrough.iter().filter(|(name, _)| *name != "class") {
        root.set(*name, value.clone());
    }

    root.children.extend(definition.nodes.iter().map(|node| {
        let mut element = SvgElement::new(node.tag());
        for (name, value) in node.attributes() {
            element.set(name, value);
        }
        element
    }));
    root
}

/// Render against [`IconTheme::default`].
#[must_use]
pub fn render_default(definition: &IconDefinition, options: &RenderOptions) -> SvgElement {
    render(definition, options, &IconTheme::default())
}
