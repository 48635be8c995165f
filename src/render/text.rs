//! Header, recap and remarks text at fixed layout positions.

use super::bars::Palette;
use super::layout::Layout;
use super::sheet::{PreparedLog, TimedActivity};
use super::surface::{Anchor, DrawingSurface, Role, Text};
use crate::models::RecapValues;
use crate::utils::date::format_long_date;
use crate::utils::formatting::{describe_status, fixed2, labeled_fixed2};

pub const TITLE: &str = "Driver's Daily Log (24 hours)";

/// Header labels wrap to at most this many lines.
const MAX_LABEL_LINES: usize = 2;

pub fn draw_text_blocks<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    layout: &Layout,
    palette: &Palette,
    log: &PreparedLog<'_>,
    day_number: usize,
) {
    draw_header(surface, layout, palette, log, day_number);
    let y = draw_recap(surface, layout, palette, &log.recap);
    draw_remarks(surface, layout, palette, &log.activities, y);
}

fn draw_header<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    layout: &Layout,
    palette: &Palette,
    log: &PreparedLog<'_>,
    day_number: usize,
) {
    let x = layout.margin;
    let mut y = layout.margin + layout.title_size;

    surface.text(
        &Text::new(x, y, layout.title_size, TITLE, Role::Title)
            .bold()
            .colored(palette.text),
    );
    surface.text(
        &Text::new(
            layout.width - layout.margin,
            y,
            layout.title_size,
            format!("Day {day_number}"),
            Role::Title,
        )
        .anchored(Anchor::End)
        .bold()
        .colored(palette.text),
    );
    y += layout.title_size * 0.5;

    let mut put = |surface: &mut S, content: String| {
        y += layout.line_height();
        surface.text(&Text::new(x, y, layout.text_size, content, Role::Header).colored(palette.text));
    };

    put(surface, format!("Date: {}", format_long_date(&log.log.date)));
    for line in wrap_label("From", &log.log.origin, layout.wrap_width) {
        put(surface, line);
    }
    for line in wrap_label("To", &log.log.destination, layout.wrap_width) {
        put(surface, line);
    }
    put(
        surface,
        labeled_fixed2("Total miles driving", log.log.total_miles_driving),
    );
    if let Some(mileage) = log.log.total_mileage {
        put(surface, labeled_fixed2("Total mileage", mileage));
    }
}

/// Recap lines in display order.
pub fn recap_lines(recap: &RecapValues) -> Vec<String> {
    let mut lines = vec![
        labeled_fixed2("Driving hours", recap.driving_hours),
        labeled_fixed2("On duty hours", recap.on_duty_hours),
        labeled_fixed2("Off duty hours", recap.off_duty_hours),
    ];
    if let Some(sleeper) = recap.sleeper_berth_hours {
        lines.push(labeled_fixed2("Sleeper berth hours", sleeper));
    }
    lines.push(labeled_fixed2("Total 70hr/8day", recap.total_70hr_8day));
    lines.push(format!(
        "Available tomorrow: {} hrs",
        fixed2(recap.available_tomorrow)
    ));
    lines
}

/// Returns the baseline of the last line drawn.
fn draw_recap<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    layout: &Layout,
    palette: &Palette,
    recap: &RecapValues,
) -> f64 {
    let x = layout.margin;
    let mut y = layout.grid_bottom() + 2.0 * layout.line_height();

    surface.text(
        &Text::new(x, y, layout.text_size, "Recap", Role::Recap)
            .bold()
            .colored(palette.text),
    );

    for line in recap_lines(recap) {
        y += layout.line_height();
        surface.text(&Text::new(x, y, layout.text_size, line, Role::Recap).colored(palette.text));
    }

    y
}

/// One remark per located activity. Stops at the bottom margin and counts
/// what did not fit.
fn draw_remarks<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    layout: &Layout,
    palette: &Palette,
    activities: &[TimedActivity],
    after_y: f64,
) {
    let remarks: Vec<Vec<String>> = activities
        .iter()
        .filter_map(|a| {
            let location = a.location.as_deref()?.trim();
            if location.is_empty() {
                return None;
            }
            let text = format!(
                "{}-{} {} - {}",
                a.start_label,
                a.end_label,
                describe_status(a.status.code()),
                location
            );
            Some(wrap(&text, layout.wrap_width))
        })
        .collect();

    if remarks.is_empty() {
        return;
    }

    let x = layout.margin;
    let lh = layout.line_height();
    let mut y = after_y + 2.0 * lh;
    // keep one line free for the overflow marker
    let last_baseline = layout.content_bottom() - lh;

    surface.text(
        &Text::new(x, y, layout.text_size, "Remarks", Role::Remark)
            .bold()
            .colored(palette.text),
    );

    for (i, lines) in remarks.iter().enumerate() {
        if y + lines.len() as f64 * lh > last_baseline {
            y += lh;
            let more = format!("... ({} more)", remarks.len() - i);
            surface.text(&Text::new(x, y, layout.text_size, more, Role::Remark).colored(palette.text));
            return;
        }
        for line in lines {
            y += lh;
            surface.text(
                &Text::new(x, y, layout.text_size, line.as_str(), Role::Remark).colored(palette.text),
            );
        }
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width.max(1))
        .into_iter()
        .map(|l| l.into_owned())
        .collect()
}

/// `"<label>: <value>"` wrapped, capped at `MAX_LABEL_LINES` with an ellipsis.
fn wrap_label(label: &str, value: &str, width: usize) -> Vec<String> {
    let mut lines = wrap(&format!("{label}: {}", value.trim()), width);
    if lines.len() > MAX_LABEL_LINES {
        lines.truncate(MAX_LABEL_LINES);
        if let Some(last) = lines.last_mut() {
            last.push_str("...");
        }
    }
    lines
}
