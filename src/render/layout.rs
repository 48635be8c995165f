use super::time_axis::TimeAxis;
use serde::{Deserialize, Serialize};

/// Day-independent sheet geometry, in logical units (origin top-left, y down).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    /// Row-label column to the left of the timeline.
    pub label_width: f64,
    /// Top edge of the first duty-status row.
    pub grid_top: f64,
    pub row_height: f64,
    pub title_size: f64,
    pub text_size: f64,
    pub label_size: f64,
    /// Column width used to wrap long free-text labels.
    pub wrap_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1400.0,
            margin: 40.0,
            label_width: 170.0,
            grid_top: 260.0,
            row_height: 50.0,
            title_size: 22.0,
            text_size: 14.0,
            label_size: 12.0,
            wrap_width: 60,
        }
    }
}

impl Layout {
    pub const ROWS: usize = 4;
    /// Gap between a bar and the row separators above and below it.
    pub const BAR_INSET: f64 = 1.0;

    pub fn timeline_x0(&self) -> f64 {
        self.margin + self.label_width
    }

    pub fn timeline_width(&self) -> f64 {
        self.width - self.timeline_x0() - self.margin
    }

    pub fn time_axis(&self) -> TimeAxis {
        TimeAxis::new(self.timeline_x0(), self.timeline_width())
    }

    /// Top edge of row `row` (0 = Off Duty).
    pub fn row_top(&self, row: usize) -> f64 {
        self.grid_top + row as f64 * self.row_height
    }

    pub fn grid_bottom(&self) -> f64 {
        self.row_top(Self::ROWS)
    }

    /// Top edge of a bar drawn in `row`.
    pub fn bar_top(&self, row: usize) -> f64 {
        self.row_top(row) + Self::BAR_INSET
    }

    pub fn bar_height(&self) -> f64 {
        self.row_height - 2.0 * Self::BAR_INSET
    }

    /// Distance between consecutive text lines.
    pub fn line_height(&self) -> f64 {
        self.text_size * 1.5
    }

    pub fn content_bottom(&self) -> f64 {
        self.height - self.margin
    }
}
