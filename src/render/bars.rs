//! Activity bars: one filled, outlined rectangle per activity, in its
//! duty-status row.

use super::layout::Layout;
use super::sheet::TimedActivity;
use super::surface::{Color, DrawingSurface, Rect, Role};
use crate::models::DutyStatus;
use serde::{Deserialize, Serialize};

pub const BORDER_WIDTH: f64 = 1.0;

/// Sheet colors. Bars use `driving`, `on_duty` or `off_duty`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub driving: Color,
    pub on_duty: Color,
    pub off_duty: Color,
    pub outline: Color,
    pub grid: Color,
    pub text: Color,
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            driving: Color::rgb(0xd3, 0x2f, 0x2f),
            on_duty: Color::rgb(0xf5, 0x7c, 0x00),
            off_duty: Color::rgb(0x19, 0x76, 0xd2),
            outline: Color::rgb(0x33, 0x33, 0x33),
            grid: Color::rgb(0x9e, 0x9e, 0x9e),
            text: Color::BLACK,
            background: Color::WHITE,
        }
    }
}

impl Palette {
    /// Fill color for a status. Sleeper berth and unknown statuses share the
    /// off-duty family.
    pub fn fill_for(&self, status: &DutyStatus) -> Color {
        match status {
            DutyStatus::Driving => self.driving,
            DutyStatus::OnDuty => self.on_duty,
            DutyStatus::OffDuty | DutyStatus::SleeperBerth | DutyStatus::Unknown(_) => {
                self.off_duty
            }
        }
    }
}

/// Bar geometry for one activity.
pub fn activity_rect(layout: &Layout, palette: &Palette, activity: &TimedActivity) -> Rect {
    let axis = layout.time_axis();
    let x_start = axis.x(activity.start);
    let x_end = axis.x(activity.end);

    Rect {
        x: x_start,
        y: layout.bar_top(activity.status.row()),
        x_end,
        width: x_end - x_start,
        height: layout.bar_height(),
        fill: palette.fill_for(&activity.status),
        stroke: palette.outline,
        stroke_width: BORDER_WIDTH,
        role: Role::ActivityBar,
    }
}

/// Draw bars in input order. Overlaps are not detected: a later bar paints
/// over an earlier one. Zero-length activities give zero-width bars.
pub fn draw_activity_bars<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    layout: &Layout,
    palette: &Palette,
    activities: &[TimedActivity],
) {
    for activity in activities {
        if activity.status.is_unknown() {
            log::warn!(
                "unknown activity type '{}' at {}-{}, drawn as off duty",
                activity.status,
                activity.start_label,
                activity.end_label
            );
        }
        surface.rect(&activity_rect(layout, palette, activity));
    }
}
