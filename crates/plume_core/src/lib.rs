//! Plume Core
//!
//! Parsing and scaling for the compact SVG path grammar used by icon
//! definitions, plus the drawable description handed to a vector surface.
//!
//! - **Path model**: typed commands (`a s t v z q m h l c`, either case)
//!   with their numeric arguments
//! - **Scaling**: uniform or per-axis resizing from a reference size
//! - **Drawables**: `{width, height, fill, path}` for an external canvas
//!
//! # Example
//!
//! ```rust
//! use plume_core::{Path, ScaleFactor};
//!
//! let path = Path::parse("M4 6v4h2V6h4V4H6V0H4v4H0v2h4z").unwrap();
//! let factor = ScaleFactor::ratio(50.0, 10.0).unwrap();
//! let scaled = path.scaled(factor);
//!
//! assert_eq!(scaled.commands()[0].args(), &[20.0, 30.0]);
//! assert_eq!(scaled.len(), path.len());
//! ```

pub mod color;
pub mod draw;
pub mod error;
mod parser;
pub mod path;
pub mod scale;

pub use color::Color;
pub use draw::{DrawSurface, Drawable, RecordingSurface, SurfaceCommand};
pub use error::{ColorError, PathError};
pub use path::{Args, CommandKind, ParseMode, Path, PathCommand};
pub use scale::{scale, scale_with, ScaleFactor};
