//! Standalone SVG output

use plume_core::{Color, DrawSurface, Drawable};

/// Surface that collects filled paths into an SVG document
#[derive(Debug, Default)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the collected paths in an `<svg>` element sized to fit them all
    pub fn finish(self) -> String {
        let (width, height) = (self.width, self.height);
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">{}</svg>"#,
            self.elements.concat()
        )
    }
}

impl DrawSurface for SvgSurface {
    fn fill_path(&mut self, width: f64, height: f64, path: &str, fill: Color) {
        self.width = self.width.max(width);
        self.height = self.height.max(height);
        // Paths from `Path` never need this, but callers can pass any string
        let path = html_escape::encode_double_quoted_attribute(path);
        self.elements
            .push(format!(r#"<path d="{path}" fill="{fill}"/>"#));
    }
}

/// Render a drawable as a complete SVG document
pub fn to_svg(drawable: &Drawable) -> String {
    let mut surface = SvgSurface::new();
    drawable.draw_on(&mut surface);
    surface.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{icons, IconBuilder};

    #[test]
    fn test_to_svg() {
        let drawable = IconBuilder::new(&icons::PLUS).size(50.0).build().unwrap();
        let svg = to_svg(&drawable);

        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="50""#));
        assert!(svg.contains(r#"viewBox="0 0 50 50""#));
        assert!(svg.contains(r#"<path d="M20 30 v20 h10"#));
        assert!(svg.contains(r##"fill="#00AFF8""##));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_surface_grows_to_fit() {
        let mut surface = SvgSurface::new();
        surface.fill_path(10.0, 30.0, "M0 0", Color::BLACK);
        surface.fill_path(20.0, 5.0, "M1 1", Color::WHITE);

        let svg = surface.finish();
        assert!(svg.contains(r#"width="20" height="30""#));
        assert_eq!(svg.matches("<path").count(), 2);
    }

    #[test]
    fn test_path_attribute_escaped() {
        let mut surface = SvgSurface::new();
        surface.fill_path(10.0, 10.0, r#"M0 0"/><script/><path d="#, Color::BLACK);

        let svg = surface.finish();
        assert!(svg.contains("M0 0&quot;"));
        assert!(!svg.contains(r#""/><script"#));
        assert!(svg.contains(r##"fill="#000000""##));
    }
}
