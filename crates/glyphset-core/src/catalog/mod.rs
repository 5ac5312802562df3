//! Static icon catalog: names, shape primitives, and lookups.
//!
//! # Design
//! - The catalog is a single table generated from one list in `icons.rs`, so the
//!   enum, the identifier strings, and the shape data cannot drift apart.
//! - Shapes keep their coordinates as authored attribute text; nothing here is
//!   computed at runtime.
//! - String lookups go through a lazily built index; the enum path never fails.

use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{GlyphError, GlyphResult};

/// Width and height of the grid every icon is authored on.
pub const VIEWBOX_SIZE: u32 = 24;

/// A single SVG shape primitive belonging to an icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconNode {
    /// `<path d=..>`.
    Path {
        /// Path data.
        d: &'static str,
    },
    /// `<circle>`.
    Circle {
        /// Centre x.
        cx: &'static str,
        /// Centre y.
        cy: &'static str,
        /// Radius.
        r: &'static str,
    },
    /// `<rect>`, optionally rounded.
    Rect {
        /// Left edge.
        x: &'static str,
        /// Top edge.
        y: &'static str,
        /// Width.
        width: &'static str,
        /// Height.
        height: &'static str,
        /// Corner radius.
        rx: Option<&'static str>,
    },
    /// `<line>`.
    Line {
        /// Start x.
        x1: &'static str,
        /// Start y.
        y1: &'static str,
        /// End x.
        x2: &'static str,
        /// End y.
        y2: &'static str,
    },
    /// `<polyline points=..>`.
    Polyline {
        /// Point list.
        points: &'static str,
    },
    /// `<polygon points=..>`.
    Polygon {
        /// Point list.
        points: &'static str,
    },
    /// `<ellipse>`.
    Ellipse {
        /// Centre x.
        cx: &'static str,
        /// Centre y.
        cy: &'static str,
        /// Horizontal radius.
        rx: &'static str,
        /// Vertical radius.
        ry: &'static str,
    },
}

impl IconNode {
    /// SVG element name for this primitive.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Path { .. } => "path",
            Self::Circle { .. } => "circle",
            Self::Rect { .. } => "rect",
            Self::Line { .. } => "line",
            Self::Polyline { .. } => "polyline",
            Self::Polygon { .. } => "polygon",
            Self::Ellipse { .. } => "ellipse",
        }
    }

    /// Attributes of the primitive in document order.
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, &'static str)> {
        match *self {
            Self::Path { d } => vec![("d", d)],
            Self::Circle { cx, cy, r } => vec![("cx", cx), ("cy", cy), ("r", r)],
            Self::Rect {
                x,
                y,
                width,
                height,
                rx,
            } => {
                let mut attrs = vec![("x", x), ("y", y), ("width", width), ("height", height)];
                if let Some(rx) = rx {
                    attrs.push(("rx", rx));
                }
                attrs
            }
            Self::Line { x1, y1, x2, y2 } => {
                vec![("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)]
            }
            Self::Polyline { points } | Self::Polygon { points } => vec![("points", points)],
            Self::Ellipse { cx, cy, rx, ry } => {
                vec![("cx", cx), ("cy", cy), ("rx", rx), ("ry", ry)]
            }
        }
    }
}

/// `<path d=..>`.
#[must_use]
pub const fn path(d: &'static str) -> IconNode {
    IconNode::Path { d }
}

/// `<circle>` centred on (`cx`, `cy`).
#[must_use]
pub const fn circle(cx: &'static str, cy: &'static str, r: &'static str) -> IconNode {
    IconNode::Circle { cx, cy, r }
}

/// Square-cornered `<rect>`.
#[must_use]
pub const fn rect(
    x: &'static str,
    y: &'static str,
    width: &'static str,
    height: &'static str,
) -> IconNode {
    IconNode::Rect {
        x,
        y,
        width,
        height,
        rx: None,
    }
}

/// `<rect>` with rounded corners.
#[must_use]
pub const fn rounded_rect(
    x: &'static str,
    y: &'static str,
    width: &'static str,
    height: &'static str,
    rx: &'static str,
) -> IconNode {
    IconNode::Rect {
        x,
        y,
        width,
        height,
        rx: Some(rx),
    }
}

/// `<line>` from (`x1`, `y1`) to (`x2`, `y2`).
#[must_use]
pub const fn line(
    x1: &'static str,
    y1: &'static str,
    x2: &'static str,
    y2: &'static str,
) -> IconNode {
    IconNode::Line { x1, y1, x2, y2 }
}

/// Open `<polyline>`.
#[must_use]
pub const fn polyline(points: &'static str) -> IconNode {
    IconNode::Polyline { points }
}

/// Closed `<polygon>`.
#[must_use]
pub const fn polygon(points: &'static str) -> IconNode {
    IconNode::Polygon { points }
}

/// `<ellipse>` centred on (`cx`, `cy`).
#[must_use]
pub const fn ellipse(
    cx: &'static str,
    cy: &'static str,
    rx: &'static str,
    ry: &'static str,
) -> IconNode {
    IconNode::Ellipse { cx, cy, rx, ry }
}

/// An immutable pairing of an icon name with its shape data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconDefinition {
    /// Catalog name.
    pub name: IconName,
    /// Shape primitives drawn in order.
    pub nodes: &'static [IconNode],
}

impl IconDefinition {
    /// Kebab-case identifier of the icon.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.name.id()
    }
}

macro_rules! icon_catalog {
    ($($variant:ident => $id:literal [$($node:expr),+ $(,)?];)+) => {
        /// Every icon shipped in the catalog.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum IconName {
            $(
                #[doc = concat!("The `", $id, "` icon.")]
                $variant,
            )+
        }

        impl IconName {
            /// All icons in catalog order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Kebab-case identifier used for lookups and class names.
            #[must_use]
            pub const fn id(self) -> &'static str {
                match self {
                    $(Self::$variant => $id,)+
                }
            }
        }

        /// Static catalog table, indexed in [`IconName::ALL`] order.
        pub static CATALOG: &[IconDefinition] = &[
            $(IconDefinition {
                name: IconName::$variant,
                nodes: &[$($node),+],
            },)+
        ];
    };
}

mod icons;

pub use icons::{CATALOG, IconName};

impl IconName {
    /// Shape data bound to this name.
    #[must_use]
    pub fn definition(self) -> &'static IconDefinition {
        &CATALOG[self as usize]
    }
}

impl Display for IconName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for IconName {
    type Err = GlyphError;

    fn from_str(value: &str) -> GlyphResult<Self> {
        lookup(value).map(|definition| definition.name)
    }
}

static INDEX: Lazy<HashMap<&'static str, IconName>> =
    Lazy::new(|| IconName::ALL.iter().map(|name| (name.id(), *name)).collect());

/// Resolve an identifier such as `"zoom"` to its definition.
///
/// # Errors
///
/// Returns [`GlyphError::UnknownIcon`] when no icon uses the identifier.
pub fn lookup(id: &str) -> GlyphResult<&'static IconDefinition> {
    INDEX.get(id).map(|name| name.definition()).ok_or_else(|| {
        debug!(icon = id, "icon lookup failed");
        GlyphError::UnknownIcon {
            name: id.to_string(),
        }
    })
}

/// Check that the name-to-definition mapping is unique and total.
///
/// # Errors
///
/// Returns the first violation found: a slot holding the wrong icon, an icon
/// without shapes, or a repeated identifier.
pub fn validate_catalog() -> GlyphResult<()> {
    if CATALOG.len() != IconName::ALL.len() {
        return Err(GlyphError::CatalogOrder {
            index: CATALOG.len().min(IconName::ALL.len()),
            name: "<missing>",
        });
    }

    let mut seen = HashSet::with_capacity(CATALOG.len());
    for (index, (definition, name)) in CATALOG.iter().zip(IconName::ALL).enumerate() {
        if definition.name != *name || *name as usize != index {
            return Err(GlyphError::CatalogOrder {
                index,
                name: definition.id(),
            });
        }
        if definition.nodes.is_empty() {
            return Err(GlyphError::EmptyIcon {
                name: definition.id(),
            });
        }
        if !seen.insert(definition.id()) {
            return Err(GlyphError::DuplicateIcon {
                name: definition.id(),
            });
        }
    }
    Ok(())
}
