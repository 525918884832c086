//! Plume error types

use thiserror::Error;

/// Errors that can occur when parsing or scaling path data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A letter that is not one of `a s t v z q m h l c`
    #[error("unknown path command '{letter}' at offset {offset}")]
    UnknownCommand { letter: char, offset: usize },

    /// A character that cannot start a number, a command or a separator
    #[error("malformed path data at offset {offset}: unexpected '{found}'")]
    Malformed { offset: usize, found: char },

    /// A number that appears before any command letter
    #[error("numeric argument at offset {offset} has no command")]
    MissingCommand { offset: usize },

    /// A number too large to represent as a finite `f64`
    #[error("number at offset {offset} is out of range")]
    NumberOutOfRange { offset: usize },

    /// Scaling pushed an argument of command `command` past `f64::MAX`
    #[error("scaled argument of command {command} is out of range")]
    ScaledOutOfRange { command: usize },

    /// Scale factor that is zero, negative or not finite
    #[error("scale factor must be finite and positive, got {0}")]
    InvalidScale(f64),

    /// Requested or reference size that is zero, negative or not finite
    #[error("size must be finite and positive, got {0}")]
    InvalidSize(f64),
}

/// Error returned when a color string cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color '{0}'")]
pub struct ColorError(pub String);
