//! Daily log sheet rendering engine.
//!
//! `trip` drives `sheet`, which runs the `grid`, `bars` and `text` builders
//! onto a caller-supplied `DrawingSurface`. Every builder maps hours through
//! `time_axis` and reads geometry from `Layout`.

pub mod bars;
pub mod grid;
pub mod layout;
pub mod sheet;
pub mod surface;
pub mod text;
pub mod time_axis;
pub mod trip;

pub use bars::Palette;
pub use layout::Layout;
pub use sheet::{PreparedLog, SheetComposer, SheetSummary};
pub use surface::{Color, DrawingSurface, Primitive, Scene};
pub use time_axis::TimeAxis;
pub use trip::{DayFailure, DayOutcome, RenderedSheet, render_trip, render_trip_scenes};
