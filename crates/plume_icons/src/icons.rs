//! Built-in icon definitions
//!
//! Each icon is path data authored inside a square of `reference_size`.

use crate::IconDef;

/// plus
pub const PLUS: IconDef = IconDef {
    name: "plus",
    path: "M4 6v4h2V6h4V4H6V0H4v4H0v2h4z",
    reference_size: 10.0,
};

/// Every built-in icon
pub const ALL: &[IconDef] = &[PLUS];

/// Find a built-in icon by name, ignoring case
pub fn find(name: &str) -> Option<&'static IconDef> {
    ALL.iter().find(|icon| icon.name.eq_ignore_ascii_case(name))
}
