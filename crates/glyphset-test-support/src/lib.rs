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

//! Shared test helpers used across glyphset suites.
//! Layout: markup.rs (attribute and element inspection of rendered SVG strings).

pub mod markup;

pub use markup::{attr, class_tokens, count_elements, element_attrs};
