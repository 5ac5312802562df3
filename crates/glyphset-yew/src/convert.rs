//! Conversion from the framework-neutral `SvgElement` tree to Yew nodes.

use std::borrow::Cow;

use glyphset_core::{AttrText, SvgElement};
use yew::virtual_dom::{AttrValue, VTag, VText};
use yew::Html;

/// Build a Yew node tree mirroring `element` attribute for attribute.
#[must_use]
pub fn svg_to_html(element: &SvgElement) -> Html {
    let mut tag = VTag::new(element.tag);
    for (name, value) in &element.attributes {
        tag.add_attribute(*name, attr_value(value));
    }
    if let Some(text) = &element.text {
        tag.add_child(VText::new(attr_value(text)).into());
    }
    for child in &element.children {
        tag.add_child(svg_to_html(child));
    }
    tag.into()
}

fn attr_value(text: &AttrText) -> AttrValue {
    match text {
        Cow::Borrowed(value) => AttrValue::from(*value),
        Cow::Owned(value) => AttrValue::from(value.clone()),
    }
}
