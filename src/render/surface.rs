//! Drawing primitives and the surface they are drawn onto.
//!
//! Builders never keep a surface around: each call receives `&mut impl
//! DrawingSurface` and emits primitives into it. `Scene` records them so a
//! sheet can be inspected, serialized or replayed onto an exporter.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 8-bit RGB color, written as `#rrggbb` in config files and exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(s: &str) -> AppResult<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AppError::InvalidColor(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| AppError::InvalidColor(s.to_string()))
        };

        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels scaled to `0.0..=1.0`, as PDF color operators expect.
    pub fn unit(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

impl TryFrom<String> for Color {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// What a primitive represents on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    RowSeparator,
    HourTick,
    RowLabel,
    HourLabel,
    ActivityBar,
    Title,
    Header,
    Recap,
    Remark,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::RowSeparator => "row-separator",
            Role::HourTick => "hour-tick",
            Role::RowLabel => "row-label",
            Role::HourLabel => "hour-label",
            Role::ActivityBar => "activity-bar",
            Role::Title => "title",
            Role::Header => "header",
            Role::Recap => "recap",
            Role::Remark => "remark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub width: f64,
    pub color: Color,
    pub role: Role,
}

/// Filled and stroked rectangle; `(x, y)` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    /// Right edge as mapped, since `x + width` can be off in the last bit.
    pub x_end: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    pub role: Role,
}

/// Single line of text; `y` is the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub content: String,
    pub color: Color,
    pub anchor: Anchor,
    pub bold: bool,
    pub role: Role,
}

impl Text {
    pub fn new(x: f64, y: f64, size: f64, content: impl Into<String>, role: Role) -> Self {
        Self {
            x,
            y,
            size,
            content: content.into(),
            color: Color::BLACK,
            anchor: Anchor::Start,
            bold: false,
            role,
        }
    }

    pub fn anchored(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn colored(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Line(Line),
    Rect(Rect),
    Text(Text),
}

/// Target of one sheet's drawing pass.
pub trait DrawingSurface {
    /// Start a fresh sheet, discarding anything drawn before.
    fn clear(&mut self, width: f64, height: f64, background: Color);
    fn line(&mut self, line: &Line);
    fn rect(&mut self, rect: &Rect);
    fn text(&mut self, text: &Text);
}

/// Surface that records primitives in paint order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: Color,
    pub primitives: Vec<Primitive>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            background: Color::WHITE,
            primitives: Vec::new(),
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self, role: Role) -> impl Iterator<Item = &Line> {
        self.primitives.iter().filter_map(move |p| match p {
            Primitive::Line(l) if l.role == role => Some(l),
            _ => None,
        })
    }

    pub fn rects(&self, role: Role) -> impl Iterator<Item = &Rect> {
        self.primitives.iter().filter_map(move |p| match p {
            Primitive::Rect(r) if r.role == role => Some(r),
            _ => None,
        })
    }

    pub fn texts(&self, role: Role) -> impl Iterator<Item = &Text> {
        self.primitives.iter().filter_map(move |p| match p {
            Primitive::Text(t) if t.role == role => Some(t),
            _ => None,
        })
    }

    /// Draw the recorded primitives, in order, onto another surface.
    pub fn replay<S: DrawingSurface + ?Sized>(&self, target: &mut S) {
        target.clear(self.width, self.height, self.background);
        for p in &self.primitives {
            match p {
                Primitive::Line(l) => target.line(l),
                Primitive::Rect(r) => target.rect(r),
                Primitive::Text(t) => target.text(t),
            }
        }
    }
}

impl DrawingSurface for Scene {
    fn clear(&mut self, width: f64, height: f64, background: Color) {
        self.width = width;
        self.height = height;
        self.background = background;
        self.primitives.clear();
    }

    fn line(&mut self, line: &Line) {
        self.primitives.push(Primitive::Line(line.clone()));
    }

    fn rect(&mut self, rect: &Rect) {
        self.primitives.push(Primitive::Rect(rect.clone()));
    }

    fn text(&mut self, text: &Text) {
        self.primitives.push(Primitive::Text(text.clone()));
    }
}
