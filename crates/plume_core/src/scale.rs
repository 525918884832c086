//! Path scaling
//!
//! Resizes a path authored at a reference size to a requested size by
//! multiplying its numeric arguments.
//!
//! # Example
//!
//! ```rust
//! use plume_core::scale;
//!
//! let scaled = scale("M4 6v4h2z", 5.0).unwrap();
//! assert_eq!(scaled, "M20 30 v20 h10 z");
//! ```

use tracing::debug;

use crate::error::PathError;
use crate::path::{CommandKind, ParseMode, Path, PathCommand};

/// Finite, positive multiplier applied to path arguments
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Validate a raw factor
    pub fn new(factor: f64) -> Result<Self, PathError> {
        if factor.is_finite() && factor > 0.0 {
            Ok(Self(factor))
        } else {
            Err(PathError::InvalidScale(factor))
        }
    }

    /// Factor that takes `reference` to `requested`
    pub fn ratio(requested: f64, reference: f64) -> Result<Self, PathError> {
        for size in [requested, reference] {
            if !(size.is_finite() && size > 0.0) {
                return Err(PathError::InvalidSize(size));
            }
        }
        Self::new(requested / reference)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ScaleFactor {
    type Error = PathError;

    fn try_from(factor: f64) -> Result<Self, Self::Error> {
        Self::new(factor)
    }
}

/// Scale every numeric argument in `path` by `factor`
///
/// The output keeps command letters and argument order; arguments are
/// re-emitted separated by single spaces.
pub fn scale(path: &str, factor: f64) -> Result<String, PathError> {
    scale_with(path, factor, ParseMode::Strict)
}

/// [`scale`] with an explicit [`ParseMode`]
pub fn scale_with(path: &str, factor: f64, mode: ParseMode) -> Result<String, PathError> {
    let factor = ScaleFactor::new(factor)?;
    let scaled = Path::parse_with(path, mode)?
        .scaled(factor)
        .ensure_finite()?;
    debug!(commands = scaled.len(), factor = factor.get(), "scaled path");
    Ok(scaled.to_string())
}

/// Which dimension an argument measures
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
    /// Angles and flags
    Unitless,
}

fn axis_of(kind: CommandKind, index: usize) -> Axis {
    match kind {
        CommandKind::HorizontalTo => Axis::X,
        CommandKind::VerticalTo => Axis::Y,
        // rx ry rotation large-arc sweep x y
        CommandKind::ArcTo => match index % 7 {
            0 | 5 => Axis::X,
            1 | 6 => Axis::Y,
            _ => Axis::Unitless,
        },
        _ if index % 2 == 0 => Axis::X,
        _ => Axis::Y,
    }
}

impl Path {
    /// Multiply every argument by `factor`
    pub fn scaled(&self, factor: ScaleFactor) -> Path {
        let f = factor.get();
        self.map_commands(|command| command.map_args(|_, value| value * f))
    }

    /// Scale x coordinates by `sx` and y coordinates by `sy`
    ///
    /// Arc rotation and flag arguments are left as they are.
    pub fn scaled_xy(&self, sx: ScaleFactor, sy: ScaleFactor) -> Path {
        let (sx, sy) = (sx.get(), sy.get());
        self.map_commands(|command: &PathCommand| {
            command.map_args(|i, value| match axis_of(command.kind, i) {
                Axis::X => value * sx,
                Axis::Y => value * sy,
                Axis::Unitless => value,
            })
        })
    }

    /// Fail if any argument is infinite, which happens when scaling
    /// overflows `f64::MAX`
    pub fn ensure_finite(self) -> Result<Path, PathError> {
        match self
            .commands()
            .iter()
            .position(|command| command.args().iter().any(|v| !v.is_finite()))
        {
            Some(command) => Err(PathError::ScaledOutOfRange { command }),
            None => Ok(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_factor_validation() {
        assert!(ScaleFactor::new(0.5).is_ok());
        assert_eq!(ScaleFactor::new(0.0), Err(PathError::InvalidScale(0.0)));
        assert_eq!(ScaleFactor::new(-2.0), Err(PathError::InvalidScale(-2.0)));
        assert!(ScaleFactor::new(f64::NAN).is_err());
        assert!(ScaleFactor::new(f64::INFINITY).is_err());
        assert!(ScaleFactor::try_from(3.0).is_ok());
    }

    #[test]
    fn test_ratio() {
        assert_eq!(ScaleFactor::ratio(50.0, 10.0).unwrap().get(), 5.0);
        assert_eq!(
            ScaleFactor::ratio(10.0, 0.0),
            Err(PathError::InvalidSize(0.0))
        );
        assert_eq!(
            ScaleFactor::ratio(-10.0, -10.0),
            Err(PathError::InvalidSize(-10.0))
        );
    }

    #[test]
    fn test_scale_zero_rejected_before_parsing() {
        // Even malformed input reports the factor first
        assert_eq!(scale("?", 0.0), Err(PathError::InvalidScale(0.0)));
    }

    #[test]
    fn test_overflow_rejected() {
        assert_eq!(
            scale("M1e308 1", 10.0),
            Err(PathError::ScaledOutOfRange { command: 0 })
        );
        assert_eq!(
            scale("M1 1 h-1e308", 2.0),
            Err(PathError::ScaledOutOfRange { command: 1 })
        );
        assert_eq!(scale("M1e308 1", 1.0).unwrap(), format!("M{} 1", 1e308));
    }

    #[test]
    fn test_commas_not_preserved() {
        assert_eq!(scale("M1,2 L3,4", 2.0).unwrap(), "M2 4 L6 8");
    }

    #[test]
    fn test_close_round_trips() {
        assert_eq!(scale("z", 7.0).unwrap(), "z");
        assert_eq!(scale("Z", 0.25).unwrap(), "Z");
    }

    #[test]
    fn test_lenient_scale_drops_unknown() {
        assert_eq!(
            scale_with("M1 2 X L3 4", 2.0, ParseMode::Lenient).unwrap(),
            "M2 4 L6 8"
        );
        assert!(scale("M1 2 X L3 4", 2.0).is_err());
    }

    #[test]
    fn test_scaled_xy_lines() {
        let path = Path::parse("M4 6h2v4L1 1").unwrap();
        let scaled = path.scaled_xy(
            ScaleFactor::new(2.0).unwrap(),
            ScaleFactor::new(10.0).unwrap(),
        );
        assert_eq!(scaled.to_string(), "M8 60 h4 v40 L2 10");
    }

    #[test]
    fn test_scaled_xy_arc_keeps_flags() {
        let path = Path::parse("A5 5 30 1 0 10 10").unwrap();
        let scaled = path.scaled_xy(
            ScaleFactor::new(2.0).unwrap(),
            ScaleFactor::new(3.0).unwrap(),
        );
        assert_eq!(scaled.commands()[0].args(), &[10.0, 15.0, 30.0, 1.0, 0.0, 20.0, 30.0]);
    }

    #[test]
    fn test_scaled_xy_uniform_matches_scaled() {
        let path = Path::parse("M1 2C3 4 5 6 7 8q1 2 3 4t5 6s1 2 3 4z").unwrap();
        let f = ScaleFactor::new(1.5).unwrap();
        assert_eq!(path.scaled_xy(f, f), path.scaled(f));
    }

    #[test]
    fn test_scaled_leaves_original() {
        let path = Path::parse("h4").unwrap();
        let _ = path.scaled(ScaleFactor::new(3.0).unwrap());
        assert_eq!(path.commands()[0].args(), &[4.0]);
    }
}
