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
#![allow(clippy::module_name_repetitions)]

//! Static icon catalog plus the one rendering routine every icon shares.
//!
//! Layout: `catalog/` (names, shape data, lookups), `render.rs` (options,
//! `SvgElement`, markup), `theme.rs` (framework defaults), `error.rs`.

pub mod catalog;
pub mod error;
pub mod render;
pub mod theme;

pub use catalog::{CATALOG, IconDefinition, IconName, IconNode, VIEWBOX_SIZE, lookup, validate_catalog};
pub use error::{GlyphError, GlyphResult};
pub use render::{AttrText, RenderOptions, SvgElement, render, render_default};
pub use theme::{IconTheme, IconVariant};
