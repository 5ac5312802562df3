#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Print glyphset icons as raw SVG or as an HTML contact sheet.
//!
//! # Design
//! - Renders through `glyphset_core::render`, the same routine the components use.
//! - Selected icons are resolved by identifier up front so a typo fails the run
//!   before anything is printed.
//! - A theme document may replace the built-in defaults; flags override both.
//!
//! Failure modes are unknown icon identifiers, an unreadable theme file, or an
//! invalid theme document.

use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glyphset_core::{CATALOG, IconDefinition, IconTheme, RenderOptions, lookup, render};
use glyphset_telemetry::{LogFormat, LoggingConfig, init_logging};
use tracing::info;

/// Output layouts supported by the gallery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `<svg>` element per line.
    #[default]
    Svg,
    /// A standalone HTML page with a captioned tile per icon.
    Html,
}

/// Command-line arguments for the gallery tool.
#[derive(Debug, Parser)]
#[command(name = "glyphset-gallery", version, about)]
pub struct GalleryArgs {
    /// Icon identifier to include; repeat for several. Defaults to the whole catalog.
    #[arg(long = "icon", value_name = "ID")]
    pub icons: Vec<String>,
    /// Width and height in pixels.
    #[arg(long)]
    pub size: Option<u32>,
    /// Stroke colour.
    #[arg(long)]
    pub color: Option<String>,
    /// Stroke width on the 24x24 grid.
    #[arg(long)]
    pub stroke_width: Option<f32>,
    /// Keep on-screen stroke thickness constant across sizes.
    #[arg(long)]
    pub absolute_stroke_width: bool,
    /// Extra CSS classes for every icon.
    #[arg(long)]
    pub class: Option<String>,
    /// JSON theme document overriding the built-in defaults.
    #[arg(long, value_name = "FILE", env = "GLYPHSET_THEME")]
    pub theme: Option<PathBuf>,
    /// Output layout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,
    /// Log output format; inferred from the build profile when omitted.
    #[arg(long, value_enum, env = "GLYPHSET_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,
}

impl GalleryArgs {
    /// Render options built from the flags.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        let mut options = RenderOptions::new().absolute_stroke_width(self.absolute_stroke_width);
        options.size = self.size;
        options.stroke_width = self.stroke_width;
        options.color = self.color.clone().map(Into::into);
        options.class = self.class.clone().map(Into::into);
        options
    }
}

/// Parse the process arguments, install logging, and print the gallery.
///
/// # Errors
///
/// Returns an error when logging cannot be installed, the theme cannot be
/// loaded, an icon identifier is unknown, or stdout cannot be written.
pub fn run() -> Result<()> {
    let args = GalleryArgs::parse();
    init_logging(&LoggingConfig::with_format(args.log_format))?;

    let theme = load_theme(args.theme.as_deref())?;
    let output = build_output(&args, &theme)?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("failed to write gallery to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

/// Load a theme document, or the defaults when no path is given.
///
/// # Errors
///
/// Returns an error when the file cannot be read or fails validation.
pub fn load_theme(path: Option<&Path>) -> Result<IconTheme> {
    let Some(path) = path else {
        return Ok(IconTheme::default());
    };
    let document = fs::read_to_string(path)
        .with_context(|| format!("failed to read theme file {}", path.display()))?;
    let theme = IconTheme::from_json_str(&document)
        .with_context(|| format!("invalid theme file {}", path.display()))?;
    info!(path = %path.display(), "loaded theme");
    Ok(theme)
}

/// Resolve the requested identifiers; an empty request selects the whole catalog.
///
/// # Errors
///
/// Returns an error naming the first unknown identifier.
pub fn select_icons(ids: &[String]) -> Result<Vec<&'static IconDefinition>> {
    if ids.is_empty() {
        return Ok(CATALOG.iter().collect());
    }
    ids.iter()
        .map(|id| lookup(id).with_context(|| format!("cannot include icon '{id}'")))
        .collect()
}

/// Render the selected icons in the requested layout.
///
/// # Errors
///
/// Returns an error when an icon identifier is unknown.
pub fn build_output(args: &GalleryArgs, theme: &IconTheme) -> Result<String> {
    let icons = select_icons(&args.icons)?;
    let options = args.render_options();
    info!(count = icons.len(), format = ?args.format, "rendering gallery");

    let mut out = String::new();
    match args.format {
        OutputFormat::Svg => {
            for definition in icons {
                out.push_str(&render(definition, &options, theme).to_markup());
                out.push('\n');
            }
        }
        OutputFormat::Html => {
            out.push_str(
                "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
                 <title>glyphset gallery</title>\n<style>\n\
                 body{font-family:sans-serif;display:flex;flex-wrap:wrap;gap:16px;padding:16px}\n\
                 figure{margin:0;width:96px;text-align:center}\n\
                 figcaption{font-size:11px;margin-top:6px;word-break:break-all}\n\
                 </style>\n</head>\n<body>\n",
            );
            for definition in icons {
                let svg = render(definition, &options, theme).to_markup();
                out.push_str(&format!(
                    "<figure>{svg}<figcaption>{id}</figcaption></figure>\n",
                    id = definition.id()
                ));
            }
            out.push_str("</body>\n</html>\n");
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphset_test_support::{attr, count_elements};

    fn parse(argv: &[&str]) -> GalleryArgs {
        let mut full = vec!["glyphset-gallery"];
        full.extend_from_slice(argv);
        GalleryArgs::try_parse_from(full).expect("arguments parse")
    }

    #[test]
    fn svg_output_honours_flags() {
        let args = parse(&[
            "--icon",
            "zoom",
            "--size",
            "32",
            "--color",
            "#ff0000",
            "--stroke-width",
            "1.5",
        ]);
        let out = build_output(&args, &IconTheme::default()).expect("renders");
        assert_eq!(out.lines().count(), 1);
        assert_eq!(attr(&out, "svg", "width").as_deref(), Some("32"));
        assert_eq!(attr(&out, "svg", "stroke").as_deref(), Some("#ff0000"));
        assert_eq!(attr(&out, "svg", "stroke-width").as_deref(), Some("1.5"));
    }

    #[test]
    fn html_output_covers_the_catalog() {
        let args = parse(&["--format", "html"]);
        let out = build_output(&args, &IconTheme::default()).expect("renders");
        assert!(out.starts_with("<!doctype html>"));
        assert_eq!(count_elements(&out, "svg"), CATALOG.len());
        assert_eq!(count_elements(&out, "figcaption"), CATALOG.len());
        assert!(out.contains("<figcaption>atm2</figcaption></figure>\n<figure>"));
        assert!(out.ends_with("</figure>\n</body>\n</html>\n"));
    }

    #[test]
    fn unknown_icons_fail_before_rendering() {
        let args = parse(&["--icon", "zoom", "--icon", "nope"]);
        let err = build_output(&args, &IconTheme::default()).expect_err("unknown id");
        assert!(format!("{err:#}").contains("nope"));
    }

    #[test]
    fn missing_theme_file_is_reported() {
        assert_eq!(load_theme(None).expect("defaults"), IconTheme::default());
        let err = load_theme(Some(Path::new("/definitely/missing/theme.json")))
            .expect_err("missing file");
        assert!(format!("{err:#}").contains("failed to read theme file"));
    }

    #[test]
    fn log_format_flag_rejects_typos() {
        assert_eq!(parse(&["--log-format", "json"]).log_format, Some(LogFormat::Json));
        assert_eq!(parse(&[]).log_format, None);
        let err = GalleryArgs::try_parse_from(["glyphset-gallery", "--log-format", "jsn"])
            .expect_err("unknown log format");
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn absolute_flag_normalises_stroke() {
        let args = parse(&["--icon", "x", "--size", "48", "--absolute-stroke-width"]);
        let out = build_output(&args, &IconTheme::default()).expect("renders");
        assert_eq!(attr(&out, "svg", "stroke-width").as_deref(), Some("1"));
    }
}
