/// Map a fractional hour onto the horizontal span of a timeline.
///
/// `h = 0` lands on `x0` and `h = 24` on `x0 + w`. Out-of-range hours are not
/// clamped.
pub fn hour_to_x(h: f64, x0: f64, w: f64) -> f64 {
    x0 + (h / 24.0) * w
}

/// Timeline origin and width, as read from a `Layout`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAxis {
    pub x0: f64,
    pub width: f64,
}

impl TimeAxis {
    pub fn new(x0: f64, width: f64) -> Self {
        Self { x0, width }
    }

    pub fn x(&self, h: f64) -> f64 {
        hour_to_x(h, self.x0, self.width)
    }

    pub fn end(&self) -> f64 {
        self.x(24.0)
    }
}
