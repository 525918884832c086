//! Drawable descriptions and the surface they are handed to
//!
//! Plume does not rasterize anything. A [`Drawable`] is passed to a
//! [`DrawSurface`], which is whatever vector canvas the host provides.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::path::Path;

/// A sized, filled path ready for a vector surface
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    pub width: f64,
    pub height: f64,
    #[serde(rename = "fillColor")]
    pub fill: Color,
    #[serde(rename = "pathString")]
    pub path: Path,
}

impl Drawable {
    pub fn new(width: f64, height: f64, fill: Color, path: Path) -> Self {
        Self {
            width,
            height,
            fill,
            path,
        }
    }

    /// Hand this drawable to a surface
    pub fn draw_on(&self, surface: &mut dyn DrawSurface) {
        let data = self.path.to_string();
        surface.fill_path(self.width, self.height, &data, self.fill);
    }
}

/// External vector canvas
pub trait DrawSurface {
    /// Fill `path` (path-command string) inside a `width` x `height` area
    fn fill_path(&mut self, width: f64, height: f64, path: &str, fill: Color);
}

/// A recorded surface call
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCommand {
    FillPath {
        width: f64,
        height: f64,
        path: String,
        fill: Color,
    },
}

/// Surface that records every call it receives
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_path(&mut self, width: f64, height: f64, path: &str, fill: Color) {
        self.commands.push(SurfaceCommand::FillPath {
            width,
            height,
            path: path.to_string(),
            fill,
        });
    }
}
