#![forbid(unsafe_code)]

//! SVG export of a finished [`Layout`].
//!
//! Produces a standalone document: background rectangle, one `<circle>`
//! per placed point, one `<text>` per marker, and an optional dashed
//! rule at the present-day offset. Point coordinates keep the track
//! convention (x centered on zero, y growing downward), mapped into
//! document space with a single group transform.

use std::fmt::Write;

use tidemark::core::color::{self, Rgb};
use tidemark::{Layout, Track};

/// Configuration for the scatter SVG export.
#[derive(Debug, Clone)]
pub struct SvgScatter {
    /// Document width in pixels.
    pub width: f64,
    /// Document height in pixels.
    pub height: f64,
    /// Page background fill.
    pub background: Rgb,
    /// Fill color for marker text.
    pub label_color: Rgb,
    /// Font family for marker text.
    pub font_family: String,
    /// Font size in pixels for marker text.
    pub font_size: f64,
    /// Vertical offset of the present-day rule, if drawn.
    pub now_line: Option<f64>,
    /// Stroke color of the present-day rule.
    pub now_color: Rgb,
}

impl Default for SvgScatter {
    fn default() -> Self {
        Self {
            width: 1600.0,
            height: 800.0,
            background: color::NIGHT,
            label_color: Rgb::new(0xcc, 0xd6, 0xe4),
            font_family: "monospace".into(),
            font_size: 12.0,
            now_line: None,
            now_color: color::FUTURE,
        }
    }
}

impl SvgScatter {
    /// Exporter sized to a layout track.
    #[must_use]
    pub fn for_track(track: Track) -> Self {
        Self {
            width: track.width_px,
            height: track.height_px,
            ..Self::default()
        }
    }

    /// Draw a dashed rule at this vertical offset, or none.
    #[must_use]
    pub fn with_now_line(mut self, y: Option<f64>) -> Self {
        self.now_line = y;
        self
    }

    /// Export a layout to an SVG string.
    ///
    /// Circles come before marker text so labels stay readable on top of
    /// dense clusters.
    #[must_use]
    pub fn export(&self, layout: &Layout) -> String {
        let mut out = String::with_capacity(256 + layout.points.len() * 80);

        write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" \
             width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = self.width,
            h = self.height,
        )
        .unwrap();

        write!(
            out,
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            self.background.to_hex(),
        )
        .unwrap();

        let half = self.width / 2.0;
        write!(
            out,
            "<g transform=\"translate({half} 0)\" font-family=\"{}\" font-size=\"{}\">",
            self.font_family, self.font_size,
        )
        .unwrap();

        if let Some(y) = self.now_line {
            write!(
                out,
                "<line x1=\"{:.2}\" y1=\"{y:.2}\" x2=\"{half:.2}\" y2=\"{y:.2}\" \
                 stroke=\"{}\" stroke-dasharray=\"4 4\"/>",
                -half,
                self.now_color.to_hex(),
            )
            .unwrap();
        }

        for point in &layout.points {
            write!(
                out,
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" opacity=\"{}\"/>",
                point.x,
                point.y,
                point.radius,
                point.fill.to_hex(),
                point.opacity,
            )
            .unwrap();
        }

        for marker in &layout.markers {
            write!(
                out,
                "<text x=\"{:.2}\" y=\"{:.2}\" fill=\"{}\">",
                marker.x,
                marker.y,
                self.label_color.to_hex(),
            )
            .unwrap();
            if !marker.text.is_empty() {
                out.push_str("<title>");
                svg_escape_into(&mut out, &marker.text);
                out.push_str("</title>");
            }
            svg_escape_into(&mut out, &marker.label);
            out.push_str("</text>");
        }

        out.push_str("</g></svg>");
        out
    }
}

/// SVG-escape a string into the output buffer.
fn svg_escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
}
