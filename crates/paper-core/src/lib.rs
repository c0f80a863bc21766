// File: crates/paper-core/src/lib.rs
// Summary: Core library entry point; exports the sheet model, geometry helpers and raster export.

pub mod axis;
pub mod error;
pub mod export;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod overlay;
mod render;
pub mod scale;
pub mod sheet;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{AxesSpec, AxisKind, AxisPlacement, AxisSpec, ArrowStyle, TickValue};
pub use error::{ConfigError, Error, Result};
pub use export::Raster;
pub use format::{DecimalFormat, TickFormat};
pub use grid::Tier;
pub use layout::Layout;
pub use overlay::{FunctionCurve, LabelPlacement, PointMark};
pub use sheet::{RenderOptions, Sheet, SheetSpec};
pub use theme::Palette;
pub use types::Length;
