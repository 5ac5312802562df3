use std::collections::HashSet;
use std::error::Error;

use glyphset_core::{IconName, RenderOptions, render_default};
use glyphset_test_support::{attr, class_tokens, count_elements, element_attrs};
use glyphset_yew::{
    GlyphProps, Icon, IconProps, IconTheme, IconThemeProvider, IconZoom, NAMED_ICONS,
};
use yew::prelude::*;
use yew::ServerRenderer;

type TestResult = Result<(), Box<dyn Error>>;

fn glyph_props() -> GlyphProps {
    GlyphProps {
        size: None,
        color: None,
        stroke_width: None,
        absolute_stroke_width: false,
        class: Classes::new(),
        variant: None,
        title: None,
        attrs: Vec::new(),
    }
}

async fn render_zoom(build: fn() -> GlyphProps) -> String {
    ServerRenderer::<IconZoom>::with_props(build)
        .hydratable(false)
        .render()
        .await
}

#[tokio::test]
async fn named_component_uses_theme_defaults() {
    let markup = render_zoom(glyph_props).await;
    assert_eq!(attr(&markup, "svg", "width").as_deref(), Some("24"));
    assert_eq!(attr(&markup, "svg", "height").as_deref(), Some("24"));
    assert_eq!(attr(&markup, "svg", "stroke").as_deref(), Some("currentColor"));
    assert_eq!(attr(&markup, "svg", "stroke-width").as_deref(), Some("2"));
    assert_eq!(attr(&markup, "svg", "aria-hidden").as_deref(), Some("true"));
    assert_eq!(count_elements(&markup, "circle"), 1);
    assert_eq!(count_elements(&markup, "path"), 1);
}

#[tokio::test]
async fn zoom_scenario_sets_size_colour_and_stroke() {
    let markup = render_zoom(|| GlyphProps {
        size: Some(32),
        color: Some(AttrValue::from("#ff0000")),
        stroke_width: Some(1.5),
        ..glyph_props()
    })
    .await;
    assert_eq!(attr(&markup, "svg", "width").as_deref(), Some("32"));
    assert_eq!(attr(&markup, "svg", "height").as_deref(), Some("32"));
    assert_eq!(attr(&markup, "svg", "stroke").as_deref(), Some("#ff0000"));
    assert_eq!(attr(&markup, "svg", "stroke-width").as_deref(), Some("1.5"));
}

#[tokio::test]
async fn class_and_passthrough_reach_the_root() {
    let markup = render_zoom(|| GlyphProps {
        class: classes!("toolbar-icon", "muted"),
        attrs: vec![("data-testid", AttrValue::from("zoom-button"))],
        ..glyph_props()
    })
    .await;
    assert_eq!(
        class_tokens(&markup, "svg"),
        vec!["glyph", "glyph-zoom", "toolbar-icon", "muted"]
    );
    assert_eq!(
        attr(&markup, "svg", "data-testid").as_deref(),
        Some("zoom-button")
    );
}

#[tokio::test]
async fn generic_icon_matches_core_renderer() -> TestResult {
    let markup = ServerRenderer::<Icon>::with_props(|| IconProps {
        name: IconName::Atm2,
        size: Some(48),
        color: None,
        stroke_width: None,
        absolute_stroke_width: true,
        class: Classes::new(),
        variant: None,
        title: Some(AttrValue::from("Cash machine")),
        attrs: Vec::new(),
    })
    .hydratable(false)
    .render()
    .await;

    let expected = render_default(
        IconName::Atm2.definition(),
        &RenderOptions::new()
            .size(48)
            .absolute_stroke_width(true)
            .title("Cash machine"),
    )
    .to_markup();

    let ours = element_attrs(&markup, "svg").ok_or("svg missing from ssr output")?;
    let theirs = element_attrs(&expected, "svg").ok_or("svg missing from core output")?;
    assert_eq!(
        ours.into_iter().collect::<HashSet<_>>(),
        theirs.into_iter().collect::<HashSet<_>>()
    );
    assert_eq!(attr(&markup, "svg", "stroke-width").as_deref(), Some("1"));
    assert!(markup.contains("<title>Cash machine</title>"));
    Ok(())
}

#[function_component(ThemedZoom)]
fn themed_zoom() -> Html {
    let theme = IconTheme {
        size: 40,
        color: "teal".to_string(),
        class_prefix: "ui-icon".to_string(),
        ..IconTheme::default()
    };
    html! {
        <IconThemeProvider theme={theme}>
            <IconZoom />
        </IconThemeProvider>
    }
}

#[tokio::test]
async fn provider_theme_overrides_defaults() {
    let markup = ServerRenderer::<ThemedZoom>::new()
        .hydratable(false)
        .render()
        .await;
    assert_eq!(attr(&markup, "svg", "width").as_deref(), Some("40"));
    assert_eq!(attr(&markup, "svg", "stroke").as_deref(), Some("teal"));
    assert_eq!(
        class_tokens(&markup, "svg"),
        vec!["ui-icon", "ui-icon-zoom"]
    );
}

#[test]
fn every_catalog_entry_has_exactly_one_named_component() {
    assert_eq!(NAMED_ICONS.len(), IconName::ALL.len());
    let unique: HashSet<_> = NAMED_ICONS.iter().collect();
    assert_eq!(unique.len(), NAMED_ICONS.len());
    for name in IconName::ALL {
        assert!(unique.contains(name), "{name} has no named component");
    }
}

#[tokio::test]
async fn absolute_stroke_holds_at_large_sizes() {
    let markup = render_zoom(|| GlyphProps {
        size: Some(4096),
        absolute_stroke_width: true,
        ..glyph_props()
    })
    .await;
    assert_eq!(attr(&markup, "svg", "width").as_deref(), Some("4096"));
    assert_eq!(
        attr(&markup, "svg", "stroke-width").as_deref(),
        Some("0.01171875")
    );
}
