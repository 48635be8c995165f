//! Static scaffold shared by every sheet: row labels, row separators, hour
//! ticks and hour labels. Driven by layout constants only.

use super::bars::Palette;
use super::layout::Layout;
use super::surface::{Anchor, DrawingSurface, Line, Role, Text};
use crate::models::DutyStatus;
use crate::utils::formatting::hour_label;

pub const HOURS: u32 = 24;

const LINE_WIDTH: f64 = 1.0;
const FRAME_WIDTH: f64 = 1.5;

pub fn draw_grid<S: DrawingSurface + ?Sized>(surface: &mut S, layout: &Layout, palette: &Palette) {
    let axis = layout.time_axis();
    let (left, right) = (axis.x0, axis.end());
    let (top, bottom) = (layout.grid_top, layout.grid_bottom());

    // Row labels, top to bottom
    for status in DutyStatus::ROWS.iter() {
        let row = status.row();
        let baseline = layout.row_top(row) + layout.row_height / 2.0 + layout.label_size / 3.0;
        surface.text(
            &Text::new(layout.margin, baseline, layout.label_size, status.row_label(), Role::RowLabel)
                .bold()
                .colored(palette.text),
        );
    }

    // One separator above each row plus one under the last
    for i in 0..=Layout::ROWS {
        let y = layout.row_top(i);
        let frame = i == 0 || i == Layout::ROWS;
        surface.line(&Line {
            x1: left,
            y1: y,
            x2: right,
            y2: y,
            width: if frame { FRAME_WIDTH } else { LINE_WIDTH },
            color: palette.grid,
            role: Role::RowSeparator,
        });
    }

    for hour in 0..=HOURS {
        let x = axis.x(hour as f64);
        surface.line(&Line {
            x1: x,
            y1: top,
            x2: x,
            y2: bottom,
            width: LINE_WIDTH,
            color: palette.grid,
            role: Role::HourTick,
        });

        // Odd hours stay unlabelled
        if hour % 2 == 0 {
            surface.text(
                &Text::new(x, top - 8.0, layout.label_size, hour_label(hour), Role::HourLabel)
                    .anchored(Anchor::Middle)
                    .colored(palette.text),
            );
        }
    }
}
