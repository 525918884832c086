//! # Plume Icons
//!
//! Icon definitions and the builder that resizes them.
//!
//! An icon is path data plus the edge length it was authored at. Building
//! an icon parses that path and scales it to the requested size, producing
//! a [`plume_core::Drawable`] for whatever vector surface the host has.
//!
//! ## Usage
//!
//! ```rust
//! use plume_icons::{icons, to_svg, IconBuilder};
//!
//! let plus = IconBuilder::new(&icons::PLUS).size(24.0).build().unwrap();
//! let svg = to_svg(&plus);
//! assert!(svg.contains(r#"width="24""#));
//! ```

mod builder;
mod error;
pub mod icons;
mod svg;

pub use builder::{default_fill, IconBuilder, IconOptions, DEFAULT_SIZE};
pub use error::IconError;
pub use svg::{to_svg, SvgSurface};

/// A path authored inside a `reference_size` square
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconDef {
    pub name: &'static str,
    pub path: &'static str,
    pub reference_size: f64,
}

impl IconDef {
    /// Builder for this icon with default options
    pub fn builder(&self) -> IconBuilder<'_> {
        IconBuilder::new(self)
    }
}

/// Look up a built-in icon by name
pub fn lookup(name: &str) -> Result<&'static IconDef, IconError> {
    icons::find(name).ok_or_else(|| IconError::UnknownIcon(name.to_string()))
}
