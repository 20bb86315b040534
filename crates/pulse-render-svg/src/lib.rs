// File: crates/pulse-render-svg/src/lib.rs
// Summary: SVG backend: logical-to-pixel scales and a RenderBackend writing SVG elements.

use kurbo::{BezPath, PathEl, Point, Rect};
use peniko::Color;

use pulse_core::gradient::MappedGradient;
use pulse_core::{RenderBackend, StrokePaint, ViewState};

/// Horizontal scale mapping logical x into `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub left_px: f64,
    pub right_px: f64,
    pub x_min: f64,
    pub x_max: f64,
}

impl TimeScale {
    pub fn new(left_px: f64, right_px: f64, x_min: f64, x_max: f64) -> Self {
        Self { left_px, right_px, x_min, x_max }
    }

    #[inline]
    pub fn to_px(&self, x: f64) -> f64 {
        let span = (self.x_max - self.x_min).max(1e-12);
        self.left_px + (x - self.x_min) / span * (self.right_px - self.left_px)
    }
}

/// Vertical scale mapping logical y into `[top_px, bottom_px]` with the
/// axis inverted (larger values sit higher on screen).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ValueScale {
    pub fn new(top_px: f64, bottom_px: f64, y_min: f64, y_max: f64) -> Self {
        Self { top_px, bottom_px, y_min, y_max }
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f64 {
        let span = (self.y_max - self.y_min).max(1e-12);
        self.bottom_px - (y - self.y_min) / span * (self.bottom_px - self.top_px)
    }
}

/// Backend that collects SVG elements for one draw pass.
pub struct SvgBackend {
    width: f64,
    height: f64,
    x: TimeScale,
    y: ValueScale,
    body: String,
    defs: String,
    def_count: usize,
    active_clip: Option<String>,
}

impl SvgBackend {
    /// Map the whole `view` onto a `width` x `height` pixel canvas with a
    /// fixed margin on every side.
    pub fn new(width: f64, height: f64, view: &ViewState) -> Self {
        let margin = 10.0;
        Self {
            width,
            height,
            x: TimeScale::new(margin, width - margin, view.x_min, view.x_max),
            y: ValueScale::new(margin, height - margin, view.y_min, view.y_max),
            body: String::new(),
            defs: String::new(),
            def_count: 0,
            active_clip: None,
        }
    }

    #[inline]
    fn map(&self, p: Point) -> Point {
        Point::new(self.x.to_px(p.x), self.y.to_px(p.y))
    }

    fn next_def_id(&mut self, prefix: &str) -> String {
        self.def_count += 1;
        format!("{prefix}{}", self.def_count)
    }

    fn path_data(&self, path: &BezPath) -> String {
        let mut d = String::new();
        for el in path.elements() {
            match *el {
                PathEl::MoveTo(p) => {
                    let p = self.map(p);
                    d.push_str(&format!("M{:.2} {:.2}", p.x, p.y));
                }
                PathEl::LineTo(p) => {
                    let p = self.map(p);
                    d.push_str(&format!("L{:.2} {:.2}", p.x, p.y));
                }
                PathEl::QuadTo(c, p) => {
                    let (c, p) = (self.map(c), self.map(p));
                    d.push_str(&format!("Q{:.2} {:.2} {:.2} {:.2}", c.x, c.y, p.x, p.y));
                }
                PathEl::CurveTo(c1, c2, p) => {
                    let (c1, c2, p) = (self.map(c1), self.map(c2), self.map(p));
                    d.push_str(&format!(
                        "C{:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
                        c1.x, c1.y, c2.x, c2.y, p.x, p.y
                    ));
                }
                PathEl::ClosePath => d.push('Z'),
            }
        }
        d
    }

    fn clip_attr(&self) -> String {
        match &self.active_clip {
            Some(id) => format!(r##" clip-path="url(#{id})""##),
            None => String::new(),
        }
    }

    fn stroke_attrs(paint: &StrokePaint) -> String {
        let (color, opacity) = css_color(paint.color);
        let mut attrs = format!(
            r#" fill="none" stroke="{color}" stroke-opacity="{opacity:.3}" stroke-width="{:.2}""#,
            paint.width
        );
        if let Some(dash) = &paint.dash {
            let lengths = dash
                .iter()
                .map(|l| format!("{l:.2}"))
                .collect::<Vec<_>>()
                .join(" ");
            attrs.push_str(&format!(r#" stroke-dasharray="{lengths}""#));
        }
        attrs
    }

    /// Final SVG document.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            self.width, self.height, self.width, self.height
        ));
        out.push('\n');
        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            out.push_str(&self.defs);
            out.push_str("</defs>\n");
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    /// Write the document to `path`, creating parent directories.
    pub fn write_svg(&self, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg_string())
    }
}

impl RenderBackend for SvgBackend {
    fn stroke_segments(&mut self, segments: &[[Point; 2]], paint: &StrokePaint) {
        if segments.is_empty() {
            return;
        }
        // One path with many subpaths; disjoint segments stroke in one call.
        let mut d = String::new();
        for [a, b] in segments {
            let (a, b) = (self.map(*a), self.map(*b));
            d.push_str(&format!("M{:.2} {:.2}L{:.2} {:.2}", a.x, a.y, b.x, b.y));
        }
        let clip = self.clip_attr();
        let attrs = Self::stroke_attrs(paint);
        self.body.push_str(&format!("<path d=\"{d}\"{attrs}{clip}/>\n"));
    }

    fn stroke_path(&mut self, path: &BezPath, paint: &StrokePaint) {
        if path.elements().is_empty() {
            return;
        }
        let d = self.path_data(path);
        let clip = self.clip_attr();
        let attrs = Self::stroke_attrs(paint);
        self.body.push_str(&format!("<path d=\"{d}\"{attrs}{clip}/>\n"));
    }

    fn fill_path(&mut self, path: &BezPath, color: Color, alpha: f32) {
        if path.elements().is_empty() {
            return;
        }
        let d = self.path_data(path);
        let (color, opacity) = css_color(color);
        let clip = self.clip_attr();
        self.body.push_str(&format!(
            "<path d=\"{d}\" fill=\"{color}\" fill-opacity=\"{:.3}\" stroke=\"none\"{clip}/>\n",
            opacity * alpha
        ));
    }

    fn fill_path_gradient(&mut self, path: &BezPath, gradient: &MappedGradient, alpha: f32) {
        if path.elements().is_empty() || gradient.stops.is_empty() {
            return;
        }
        let id = self.next_def_id("grad");
        let (start, end) = (self.map(gradient.start), self.map(gradient.end));
        self.defs.push_str(&format!(
            r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}">"#,
            start.x, start.y, end.x, end.y
        ));
        self.defs.push('\n');
        for stop in &gradient.stops {
            let (color, opacity) = css_color(stop.color);
            self.defs.push_str(&format!(
                r#"<stop offset="{:.4}" stop-color="{color}" stop-opacity="{:.3}"/>"#,
                stop.offset, opacity
            ));
            self.defs.push('\n');
        }
        self.defs.push_str("</linearGradient>\n");
        let d = self.path_data(path);
        let clip = self.clip_attr();
        self.body.push_str(&format!(
            "<path d=\"{d}\" fill=\"url(#{id})\" fill-opacity=\"{alpha:.3}\" stroke=\"none\"{clip}/>\n"
        ));
    }

    fn draw_circle(&mut self, center: Point, radius: f64, color: Color) {
        let c = self.map(center);
        let (color, opacity) = css_color(color);
        let clip = self.clip_attr();
        self.body.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{color}\" fill-opacity=\"{:.3}\"{clip}/>\n",
            c.x, c.y, radius, opacity
        ));
    }

    fn set_clip(&mut self, rect: Option<Rect>) {
        match rect {
            Some(r) => {
                // Logical rect is y-up; map corners and normalize.
                let a = self.map(Point::new(r.x0, r.y0));
                let b = self.map(Point::new(r.x1, r.y1));
                let (x, y) = (a.x.min(b.x), a.y.min(b.y));
                let (w, h) = ((b.x - a.x).abs(), (b.y - a.y).abs());
                let id = self.next_def_id("clip");
                self.defs.push_str(&format!(
                    "<clipPath id=\"{id}\"><rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\"/></clipPath>\n"
                ));
                self.active_clip = Some(id);
            }
            None => self.active_clip = None,
        }
    }
}

/// CSS color string plus the color's own opacity.
fn css_color(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    (
        format!("rgb({},{},{})", rgba.r, rgba.g, rgba.b),
        rgba.a as f32 / 255.0,
    )
}
