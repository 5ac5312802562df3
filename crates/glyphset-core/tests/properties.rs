use glyphset_core::{
    CATALOG, IconName, IconTheme, RenderOptions, lookup, render, render_default, validate_catalog,
};
use glyphset_test_support::{attr, class_tokens, count_elements};

const SIZES: [u32; 6] = [12, 16, 24, 32, 48, 100];
const LARGE_SIZES: [u32; 4] = [4096, 100_000, 1_000_000, 10_000_000];

#[test]
fn default_render_uses_framework_size_and_colour() {
    for definition in CATALOG {
        let svg = render_default(definition, &RenderOptions::new());
        assert_eq!(svg.tag, "svg");
        assert_eq!(svg.attribute("width"), Some("24"), "{}", definition.id());
        assert_eq!(svg.attribute("height"), Some("24"), "{}", definition.id());
        assert_eq!(svg.attribute("stroke"), Some("currentColor"));
        assert_eq!(svg.attribute("fill"), Some("none"));
        assert_eq!(svg.attribute("stroke-width"), Some("2"));
        assert_eq!(svg.attribute("viewBox"), Some("0 0 24 24"));
        assert_eq!(svg.children.len(), definition.nodes.len());
    }
}

#[test]
fn size_sets_width_and_height() {
    for definition in CATALOG {
        for size in SIZES {
            let svg = render_default(definition, &RenderOptions::new().size(size));
            let expected = size.to_string();
            assert_eq!(svg.attribute("width"), Some(expected.as_str()));
            assert_eq!(svg.attribute("height"), Some(expected.as_str()));
        }
    }
}

#[test]
fn absolute_stroke_width_keeps_rendered_thickness_constant() {
    for definition in CATALOG {
        for size in SIZES {
            let absolute = render_default(
                definition,
                &RenderOptions::new().size(size).absolute_stroke_width(true),
            );
            let px = absolute.rendered_stroke_px().expect("stroke and width are numeric");
            assert!((px - 2.0).abs() < 1e-3, "{} at {size}: {px}", definition.id());

            let scaled = render_default(definition, &RenderOptions::new().size(size));
            let px = scaled.rendered_stroke_px().expect("stroke and width are numeric");
            #[allow(clippy::cast_precision_loss)]
            let expected = 2.0 * size as f32 / 24.0;
            assert!((px - expected).abs() < 1e-3, "{} at {size}: {px}", definition.id());
        }
    }
}

#[test]
fn absolute_stroke_width_survives_very_large_sizes() {
    let zoom = IconName::Zoom.definition();
    for size in LARGE_SIZES {
        for stroke in [2.0_f32, 0.5, 3.25] {
            let svg = render_default(
                zoom,
                &RenderOptions::new()
                    .size(size)
                    .stroke_width(stroke)
                    .absolute_stroke_width(true),
            );
            let attribute = svg.attribute("stroke-width").expect("stroke width is set");
            assert!(!attribute.contains('e'), "{attribute} at {size}");
            assert_ne!(attribute, "0", "stroke vanished at {size}");
            let px = svg.rendered_stroke_px().expect("stroke and width are numeric");
            assert!((px - stroke).abs() < 1e-4, "{stroke} at {size}: {px}");
        }
    }
}

#[test]
fn class_is_appended_to_base_classes() {
    for name in IconName::ALL {
        let svg = render_default(name.definition(), &RenderOptions::new().class("x"));
        let classes: Vec<&str> = svg.classes().collect();
        let own = format!("glyph-{}", name.id());
        assert_eq!(classes, vec!["glyph", own.as_str(), "x"]);
    }
}

#[test]
fn name_mapping_is_unique_and_total() {
    validate_catalog().expect("catalog validates");
    for name in IconName::ALL {
        let definition = lookup(name.id()).expect("every id resolves");
        assert_eq!(definition.name, *name);
        assert!(std::ptr::eq(definition, name.definition()));
    }
}

#[test]
fn zoom_scenario() {
    let options = RenderOptions::new()
        .size(32)
        .color("#ff0000")
        .stroke_width(1.5);
    let markup = render_default(IconName::Zoom.definition(), &options).to_markup();
    assert_eq!(attr(&markup, "svg", "width").as_deref(), Some("32"));
    assert_eq!(attr(&markup, "svg", "height").as_deref(), Some("32"));
    assert_eq!(attr(&markup, "svg", "stroke").as_deref(), Some("#ff0000"));
    assert_eq!(attr(&markup, "svg", "stroke-width").as_deref(), Some("1.5"));
    assert_eq!(class_tokens(&markup, "svg"), vec!["glyph", "glyph-zoom"]);
    assert_eq!(count_elements(&markup, "circle"), 1);
}

#[test]
fn theme_fills_unset_options_only() {
    let theme = IconTheme::from_json_str(r#"{"size": 20, "color": "slategray", "strokeWidth": 1}"#)
        .expect("theme parses");
    let themed = render(IconName::Atm2.definition(), &RenderOptions::new(), &theme);
    assert_eq!(themed.attribute("width"), Some("20"));
    assert_eq!(themed.attribute("stroke"), Some("slategray"));
    assert_eq!(themed.attribute("stroke-width"), Some("1"));

    let explicit = render(
        IconName::Atm2.definition(),
        &RenderOptions::new().size(64).color("black"),
        &theme,
    );
    assert_eq!(explicit.attribute("width"), Some("64"));
    assert_eq!(explicit.attribute("stroke"), Some("black"));
    assert_eq!(explicit.attribute("stroke-width"), Some("1"));
}
