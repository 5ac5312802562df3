use std::borrow::Cow;

use glyphset_core::{AttrText, IconName, IconTheme, IconVariant, RenderOptions, render};
use yew::prelude::*;

use crate::context::use_icon_theme;
use crate::convert::svg_to_html;

/// Props shared by every named icon component.
#[derive(Properties, PartialEq)]
pub struct GlyphProps {
    /// Width and height in pixels; theme default when unset.
    #[prop_or_default]
    pub size: Option<u32>,
    /// Stroke colour; `currentColor` when unset.
    #[prop_or_default]
    pub color: Option<AttrValue>,
    /// SVG stroke width on the 24x24 grid.
    #[prop_or_default]
    pub stroke_width: Option<f32>,
    /// Keep the on-screen stroke thickness constant across sizes.
    #[prop_or_default]
    pub absolute_stroke_width: bool,
    /// Extra CSS classes.
    #[prop_or_default]
    pub class: Classes,
    /// Outline or solid rendering.
    #[prop_or_default]
    pub variant: Option<IconVariant>,
    /// Optional accessible title.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Extra attributes forwarded to the `<svg>` element.
    #[prop_or_default]
    pub attrs: Vec<(&'static str, AttrValue)>,
}

/// Props for the generic [`Icon`] component.
#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// Catalog entry to draw.
    pub name: IconName,
    /// Width and height in pixels; theme default when unset.
    #[prop_or_default]
    pub size: Option<u32>,
    /// Stroke colour; `currentColor` when unset.
    #[prop_or_default]
    pub color: Option<AttrValue>,
    /// SVG stroke width on the 24x24 grid.
    #[prop_or_default]
    pub stroke_width: Option<f32>,
    /// Keep the on-screen stroke thickness constant across sizes.
    #[prop_or_default]
    pub absolute_stroke_width: bool,
    /// Extra CSS classes.
    #[prop_or_default]
    pub class: Classes,
    /// Outline or solid rendering.
    #[prop_or_default]
    pub variant: Option<IconVariant>,
    /// Optional accessible title.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Extra attributes forwarded to the `<svg>` element.
    #[prop_or_default]
    pub attrs: Vec<(&'static str, AttrValue)>,
}

fn text(value: &AttrValue) -> AttrText {
    Cow::Owned(value.to_string())
}

macro_rules! render_options {
    ($props:expr) => {{
        let props = $props;
        let class = props.class.to_string();
        RenderOptions {
            size: props.size,
            color: props.color.as_ref().map(text),
            stroke_width: props.stroke_width,
            absolute_stroke_width: props.absolute_stroke_width,
            class: (!class.is_empty()).then(|| Cow::Owned(class)),
            variant: props.variant,
            title: props.title.as_ref().map(text),
            passthrough: props
                .attrs
                .iter()
                .map(|(name, value)| (*name, text(value)))
                .collect(),
        }
    }};
}

impl GlyphProps {
    /// Render options equivalent to these props.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        render_options!(self)
    }
}

impl IconProps {
    /// Render options equivalent to these props.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        render_options!(self)
    }
}

pub(super) fn icon_view(name: IconName, options: &RenderOptions, theme: &IconTheme) -> Html {
    svg_to_html(&render(name.definition(), options, theme))
}

/// Draws any catalog icon chosen by `name`.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let theme = use_icon_theme();
    icon_view(props.name, &props.render_options(), &theme)
}
