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
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::derive_partial_eq_without_eq)]
//! Yew icon components backed by the glyphset catalog.
//!
//! Every component, the generic [`Icon`] as well as the named ones such as
//! [`IconZoom`], feeds its props through `glyphset_core::render`, so markup stays
//! identical across the two entry points.

mod context;
mod convert;
mod icon;
mod named;

pub use context::{IconThemeProvider, IconThemeProviderProps, use_icon_theme};
pub use convert::svg_to_html;
pub use glyphset_core::{IconName, IconTheme, IconVariant};
pub use icon::{GlyphProps, Icon, IconProps};
pub use named::*;
