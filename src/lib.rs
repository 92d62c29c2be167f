//! emfout writes colored vector shapes as an Enhanced Metafile stream.
//!
//! The header of the format states the total file size, record count and handle
//! count up front, so emission runs in two passes over the same input:
//!
//! 1. **Stats**: validate the shapes, deduplicate their colors into a table and
//!    size every record without writing anything (`EmissionStats`).
//! 2. **Emit**: write the header from those totals, create one pen and one brush
//!    per color, then replay the exact same traversal into the sink.
//!
//! The emission pass verifies that it produced exactly the bytes and records the
//! stats pass promised and fails with [`EmfError::SizeMismatch`] otherwise.
//!
//! Per shape the stream contains a pen/brush selection (only when the color
//! changes), a move to the start point, a path bracket holding one
//! `PolylineTo`/`PolyBezierTo` record per run of same-kind segments, and a
//! stroke-and-fill. Coordinates are stored in thousandths of a logical unit; a
//! world transform scales them back and flips the Y axis.
//!
//! ```
//! use emfout::{Color, EmfOptions, Shape, emf_to_vec};
//!
//! let shapes = vec![Shape::new((0.0, 0.0).into(), Color::rgb(255, 0, 0)).line_to((10.0, 10.0))];
//! let bytes = emf_to_vec(&shapes, &EmfOptions::new(64, 64, "out.emf")).unwrap();
//! assert_eq!(&bytes[0..4], &[1, 0, 0, 0]);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod emit;
mod encode;
mod foundation;
mod shape;

pub use emit::emitter::{
    EmissionStats, EmitterState, TwoPassEmitter, emf_to_vec, write_emf, write_emf_file,
};
pub use emit::options::{DEFAULT_EDITOR_NAME, DeviceMetrics, EmfOptions};
pub use encode::colors::{ColorRegistry, ColorTable, brush_handle, pen_handle};
pub use encode::record::{
    DESCRIPTION_OFFSET, EMF_SIGNATURE, EMF_VERSION, EncodeMode, HeaderRecord, Record, RecordKind,
};
pub use encode::writer::LeWriter;
pub use foundation::core::{BezPath, Color, Point};
pub use foundation::error::{EmfError, EmfResult};
pub use foundation::fixed::{FIXED_SCALE, to_fixed, to_fixed_bits};
pub use shape::adapt::{shapes_from_bezpath, shapes_from_svg_path};
pub use shape::model::{Segment, SegmentKind, Shape};
pub use shape::runs::{Run, Runs, segment_runs};
