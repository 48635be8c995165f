// src/export/svg.rs

use crate::render::surface::{Anchor, Color, DrawingSurface, Line, Rect, Text};

/// Surface that writes an SVG document, one element per primitive.
#[derive(Debug, Default)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    font_family: String,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(font_family: &str) -> Self {
        Self {
            font_family: font_family.to_string(),
            ..Self::default()
        }
    }

    /// Complete document text.
    pub fn finish(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(&format!(
            "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\" font-family=\"{f}\">\n",
            w = num(self.width),
            h = num(self.height),
            f = escape(&self.font_family),
        ));
        for element in &self.elements {
            out.push_str("  ");
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

impl DrawingSurface for SvgSurface {
    fn clear(&mut self, width: f64, height: f64, background: Color) {
        self.width = width;
        self.height = height;
        self.elements.clear();
        self.elements.push(format!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            num(width),
            num(height),
            background
        ));
    }

    fn line(&mut self, l: &Line) {
        self.elements.push(format!(
            "<line class=\"{}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            l.role.as_str(),
            num(l.x1),
            num(l.y1),
            num(l.x2),
            num(l.y2),
            l.color,
            num(l.width)
        ));
    }

    fn rect(&mut self, r: &Rect) {
        self.elements.push(format!(
            "<rect class=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            r.role.as_str(),
            num(r.x),
            num(r.y),
            num(r.width),
            num(r.height),
            r.fill,
            r.stroke,
            num(r.stroke_width)
        ));
    }

    fn text(&mut self, t: &Text) {
        let anchor = match t.anchor {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        };
        let weight = if t.bold { " font-weight=\"bold\"" } else { "" };
        self.elements.push(format!(
            "<text class=\"{}\" x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\"{}>{}</text>",
            t.role.as_str(),
            num(t.x),
            num(t.y),
            num(t.size),
            t.color,
            anchor,
            weight,
            escape(&t.content)
        ));
    }
}

// Two decimals at most, without trailing zeros
fn num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
