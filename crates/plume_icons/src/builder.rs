//! Size-parameterized icon builder

use plume_core::{Color, Drawable, Path, ScaleFactor};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IconError;
use crate::IconDef;

/// Default edge length of a built icon
pub const DEFAULT_SIZE: f64 = 10.0;

/// Default fill, `#00AFF8`
pub fn default_fill() -> Color {
    Color::from_hex(0x00AFF8)
}

fn default_size() -> f64 {
    DEFAULT_SIZE
}

/// Options accepted when building an icon
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct IconOptions {
    /// Target edge length
    #[serde(default = "default_size")]
    pub size: f64,
    /// Width override; falls back to `size`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Height override; falls back to `size`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default = "default_fill")]
    pub fill: Color,
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            width: None,
            height: None,
            fill: default_fill(),
        }
    }
}

impl IconOptions {
    /// Resolved `(width, height)`
    pub fn dimensions(&self) -> (f64, f64) {
        (
            self.width.unwrap_or(self.size),
            self.height.unwrap_or(self.size),
        )
    }
}

/// Builds a [`Drawable`] from an [`IconDef`]
///
/// ```rust
/// use plume_icons::{icons, IconBuilder};
///
/// let drawable = IconBuilder::new(&icons::PLUS).size(50.0).build().unwrap();
/// assert_eq!(drawable.width, 50.0);
/// assert_eq!(drawable.path.commands()[0].args(), &[20.0, 30.0]);
/// ```
#[derive(Clone, Debug)]
pub struct IconBuilder<'a> {
    icon: &'a IconDef,
    options: IconOptions,
}

impl<'a> IconBuilder<'a> {
    pub fn new(icon: &'a IconDef) -> Self {
        Self {
            icon,
            options: IconOptions::default(),
        }
    }

    /// Replace all options at once
    pub fn with_options(mut self, options: IconOptions) -> Self {
        self.options = options;
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.options.size = size;
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.options.width = Some(width);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.options.height = Some(height);
        self
    }

    pub fn fill(mut self, fill: Color) -> Self {
        self.options.fill = fill;
        self
    }

    /// Parse the reference path and scale it to the requested size
    ///
    /// Square output scales every argument by `size / reference_size`.
    /// Distinct width and height scale x and y coordinates separately.
    pub fn build(&self) -> Result<Drawable, IconError> {
        let reference = self.icon.reference_size;
        let (width, height) = self.options.dimensions();

        let path = Path::parse(self.icon.path)?;
        let scaled = if width == height {
            path.scaled(ScaleFactor::ratio(width, reference)?)
        } else {
            path.scaled_xy(
                ScaleFactor::ratio(width, reference)?,
                ScaleFactor::ratio(height, reference)?,
            )
        }
        .ensure_finite()?;

        debug!(icon = self.icon.name, width, height, "built icon");

        Ok(Drawable::new(width, height, self.options.fill, scaled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons;
    use plume_core::PathError;

    #[test]
    fn test_defaults() {
        let drawable = IconBuilder::new(&icons::PLUS).build().unwrap();

        assert_eq!(drawable.width, 10.0);
        assert_eq!(drawable.height, 10.0);
        assert_eq!(drawable.fill, default_fill());
        // Reference size equals the default size
        assert_eq!(drawable.path, Path::parse(icons::PLUS.path).unwrap());
    }

    #[test]
    fn test_size_scales_uniformly() {
        let drawable = IconBuilder::new(&icons::PLUS).size(20.0).build().unwrap();
        assert_eq!(
            drawable.path.to_string(),
            "M8 12 v8 h4 V12 h8 V8 H12 V0 H8 v8 H0 v4 h8 z"
        );
    }

    #[test]
    fn test_width_and_height_scale_per_axis() {
        let drawable = IconBuilder::new(&icons::PLUS)
            .width(20.0)
            .height(40.0)
            .build()
            .unwrap();

        assert_eq!((drawable.width, drawable.height), (20.0, 40.0));
        let commands = drawable.path.commands();
        assert_eq!(commands[0].args(), &[8.0, 24.0]);
        assert_eq!(commands[1].args(), &[16.0]); // v
        assert_eq!(commands[2].args(), &[4.0]); // h
    }

    #[test]
    fn test_fill() {
        let drawable = IconBuilder::new(&icons::PLUS)
            .fill(Color::RED)
            .build()
            .unwrap();
        assert_eq!(drawable.fill, Color::RED);
    }

    #[test]
    fn test_invalid_size() {
        let err = IconBuilder::new(&icons::PLUS).size(0.0).build().unwrap_err();
        assert_eq!(err, IconError::Path(PathError::InvalidSize(0.0)));

        let err = IconBuilder::new(&icons::PLUS)
            .height(-5.0)
            .build()
            .unwrap_err();
        assert_eq!(err, IconError::Path(PathError::InvalidSize(-5.0)));
    }

    #[test]
    fn test_fresh_path_each_build() {
        let builder = IconBuilder::new(&icons::PLUS).size(30.0);
        assert_eq!(builder.build().unwrap(), builder.build().unwrap());
    }

    #[test]
    fn test_options_from_toml() {
        let options: IconOptions = toml::from_str("size = 24.0\nfill = \"#fff\"").unwrap();
        assert_eq!(options.size, 24.0);
        assert_eq!(options.fill, Color::WHITE);
        assert_eq!(options.dimensions(), (24.0, 24.0));

        let options: IconOptions = toml::from_str("").unwrap();
        assert_eq!(options, IconOptions::default());
    }
}
