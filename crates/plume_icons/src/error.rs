//! Icon error types

use plume_core::PathError;
use thiserror::Error;

/// Errors that can occur when building an icon
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IconError {
    /// No built-in icon has this name
    #[error("unknown icon '{0}'")]
    UnknownIcon(String),

    /// The icon path could not be parsed or the requested size is invalid
    #[error(transparent)]
    Path(#[from] PathError),
}
