//! Record encoders.
//!
//! Every record starts with a `u32` kind tag and a `u32` byte length that covers
//! the whole record, tag and length included. Readers rely on that length to skip
//! records they do not understand, so [`Record::encode`] checks after every write
//! that the declared length matches what actually reached the sink.

use crate::{
    emit::options::DeviceMetrics,
    encode::writer::LeWriter,
    foundation::core::Point,
    foundation::error::{EmfError, EmfResult, narrow},
    foundation::fixed::to_fixed_bits,
    shape::model::{Segment, SegmentKind},
    shape::runs::Run,
};

/// `" EMF"` read as a little-endian `u32`.
pub const EMF_SIGNATURE: u32 = 0x464D_4520;
/// Format version written in the header.
pub const EMF_VERSION: u32 = 0x0001_0000;
/// Byte offset of the description string; equals the fixed header size.
pub const DESCRIPTION_OFFSET: u32 = 100;

/// `0.001f32` bit pattern.
const SCALE_POS_BITS: u32 = 0x3A83_126F;
/// `-0.001f32` bit pattern.
const SCALE_NEG_BITS: u32 = 0xBA83_126F;

const U32: u64 = 4;
const HEADER_FIXED_SIZE: u64 = DESCRIPTION_OFFSET as u64;
const GEOMETRY_PREFIX_SIZE: u64 = U32 * 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
/// Record kind tags.
pub enum RecordKind {
    /// File header.
    Header = 1,
    /// Run of cubic curves from the current position.
    PolyBezierTo = 5,
    /// Run of straight lines from the current position.
    PolylineTo = 6,
    /// End of metafile.
    EndOfFile = 14,
    /// Move the current position.
    MoveTo = 27,
    /// Set the world-to-page transform.
    SetWorldTransform = 35,
    /// Select a pen or brush handle.
    SelectObject = 37,
    /// Create a pen in the handle table.
    CreatePen = 38,
    /// Create a brush in the handle table.
    CreateBrush = 39,
    /// Open a path bracket.
    BeginPath = 59,
    /// Close a path bracket.
    EndPath = 60,
    /// Stroke and fill the current path.
    StrokeAndFillPath = 63,
}

impl RecordKind {
    /// Numeric tag written at the start of the record.
    pub const fn tag(self) -> u32 {
        self as u32
    }

    /// Map a tag back to a known kind.
    pub fn from_tag(tag: u32) -> Option<Self> {
        Some(match tag {
            1 => Self::Header,
            5 => Self::PolyBezierTo,
            6 => Self::PolylineTo,
            14 => Self::EndOfFile,
            27 => Self::MoveTo,
            35 => Self::SetWorldTransform,
            37 => Self::SelectObject,
            38 => Self::CreatePen,
            39 => Self::CreateBrush,
            59 => Self::BeginPath,
            60 => Self::EndPath,
            63 => Self::StrokeAndFillPath,
            _ => return None,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Header payload.
///
/// Only `editor_name` and `output_name` influence the record size, so the stats
/// pass can size a header before the totals it carries are known.
pub struct HeaderRecord<'a> {
    /// Logical drawing width in pixels.
    pub width: u32,
    /// Logical drawing height in pixels.
    pub height: u32,
    /// Width in 0.01 mm units.
    pub width_hmm: u32,
    /// Height in 0.01 mm units.
    pub height_hmm: u32,
    /// Reference device.
    pub device: DeviceMetrics,
    /// Total stream size in bytes.
    pub file_size: u32,
    /// Total number of records, header and end-of-file included.
    pub record_count: u32,
    /// Handle table size, slot 0 included.
    pub handle_count: u16,
    /// Application name, first description string.
    pub editor_name: &'a str,
    /// Output name, second description string.
    pub output_name: &'a str,
}

impl HeaderRecord<'_> {
    /// Description length in 16-bit code units, including both terminators and
    /// the trailing extra null.
    pub fn description_units(&self) -> u64 {
        self.editor_name.chars().count() as u64 + self.output_name.chars().count() as u64 + 3
    }

    fn size(&self) -> u64 {
        let desc_bytes = self.description_units() * 2;
        HEADER_FIXED_SIZE + desc_bytes + desc_bytes % 4
    }

    fn write_payload(&self, w: &mut LeWriter<'_>) -> EmfResult<()> {
        // bounds in pixels, then in 0.01 mm
        for v in [0, 0, self.width, self.height] {
            w.write_u32(v)?;
        }
        for v in [0, 0, self.width_hmm, self.height_hmm] {
            w.write_u32(v)?;
        }
        w.write_u32(EMF_SIGNATURE)?;
        w.write_u32(EMF_VERSION)?;
        w.write_u32(self.file_size)?;
        w.write_u32(self.record_count)?;
        w.write_u16(self.handle_count)?;
        w.write_u16(0)?;
        w.write_u32(narrow(self.description_units(), "description length")?)?;
        w.write_u32(DESCRIPTION_OFFSET)?;
        w.write_u32(0)?; // palette entries
        w.write_u32(self.device.width_px)?;
        w.write_u32(self.device.height_px)?;
        w.write_u32(self.device.width_mm)?;
        w.write_u32(self.device.height_mm)?;
        // pixel format, OpenGL flag and one more reserved slot
        for _ in 0..3 {
            w.write_u32(0)?;
        }

        for c in self.editor_name.chars() {
            w.write_u16(code_unit(c))?;
        }
        w.write_u16(0)?;
        for c in self.output_name.chars() {
            w.write_u16(code_unit(c))?;
        }
        w.write_u32(0)?;
        if (self.description_units() * 2) % 4 != 0 {
            w.write_u16(0)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// One output record, built and immediately sized or written.
pub enum Record<'a> {
    /// File header.
    Header(HeaderRecord<'a>),
    /// Scale by 0.001, flip Y and translate by the drawing height.
    SetWorldTransform {
        /// Drawing height in pixels.
        height: u32,
    },
    /// Solid one-pixel pen.
    CreatePen {
        /// Handle slot.
        handle: u32,
        /// `0x00BBGGRR` color.
        colorref: u32,
    },
    /// Solid brush.
    CreateBrush {
        /// Handle slot.
        handle: u32,
        /// `0x00BBGGRR` color.
        colorref: u32,
    },
    /// Select a pen or brush.
    SelectObject {
        /// Handle slot.
        handle: u32,
    },
    /// Move the current position.
    MoveTo {
        /// Target point in logical units.
        point: Point,
    },
    /// Open a path bracket.
    BeginPath,
    /// Lines to the end point of each segment.
    PolylineTo {
        /// Segments of one straight run.
        segments: &'a [Segment],
    },
    /// Cubic curves through each segment's control points to its end point.
    PolyBezierTo {
        /// Segments of one curved run.
        segments: &'a [Segment],
    },
    /// Close a path bracket.
    EndPath,
    /// Stroke and fill the current path.
    StrokeAndFillPath,
    /// End of metafile.
    EndOfFile,
}

/// How [`Record::encode`] treats its record.
pub enum EncodeMode<'a, 'w> {
    /// Compute the size only; nothing is written.
    SizeOnly,
    /// Write the record and return its size.
    Write(&'a mut LeWriter<'w>),
}

impl<'a> Record<'a> {
    /// Geometry record for one segment run.
    pub fn from_run(run: Run<'a>) -> Self {
        match run.kind {
            SegmentKind::Line => Record::PolylineTo {
                segments: run.segments,
            },
            SegmentKind::Cubic => Record::PolyBezierTo {
                segments: run.segments,
            },
        }
    }

    /// Kind tag of this record.
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Header(_) => RecordKind::Header,
            Record::SetWorldTransform { .. } => RecordKind::SetWorldTransform,
            Record::CreatePen { .. } => RecordKind::CreatePen,
            Record::CreateBrush { .. } => RecordKind::CreateBrush,
            Record::SelectObject { .. } => RecordKind::SelectObject,
            Record::MoveTo { .. } => RecordKind::MoveTo,
            Record::BeginPath => RecordKind::BeginPath,
            Record::PolylineTo { .. } => RecordKind::PolylineTo,
            Record::PolyBezierTo { .. } => RecordKind::PolyBezierTo,
            Record::EndPath => RecordKind::EndPath,
            Record::StrokeAndFillPath => RecordKind::StrokeAndFillPath,
            Record::EndOfFile => RecordKind::EndOfFile,
        }
    }

    /// Exact encoded size in bytes. Depends only on the record's own fields.
    pub fn size(&self) -> u64 {
        match self {
            Record::Header(h) => h.size(),
            Record::SetWorldTransform { .. } => U32 * 8,
            Record::CreatePen { .. } => U32 * 7,
            Record::CreateBrush { .. } => U32 * 6,
            Record::SelectObject { .. } => U32 * 3,
            Record::MoveTo { .. } => U32 * 4,
            Record::BeginPath | Record::EndPath => U32 * 2,
            Record::PolylineTo { segments } => {
                GEOMETRY_PREFIX_SIZE + U32 * 2 * segments.len() as u64
            }
            Record::PolyBezierTo { segments } => {
                GEOMETRY_PREFIX_SIZE + U32 * 6 * segments.len() as u64
            }
            Record::StrokeAndFillPath => U32 * 6,
            Record::EndOfFile => U32 * 5,
        }
    }

    /// Size the record, and write it when `mode` carries a writer.
    pub fn encode(&self, mode: EncodeMode<'_, '_>) -> EmfResult<u64> {
        let size = self.size();
        let EncodeMode::Write(w) = mode else {
            return Ok(size);
        };

        let start = w.bytes_written();
        w.write_u32(self.kind().tag())?;
        w.write_u32(narrow(size, "record size")?)?;
        self.write_payload(w, size)?;

        let actual = w.bytes_written() - start;
        if actual != size {
            return Err(EmfError::size_mismatch("record length", size, actual));
        }
        Ok(size)
    }

    fn write_payload(&self, w: &mut LeWriter<'_>, size: u64) -> EmfResult<()> {
        match *self {
            Record::Header(ref h) => h.write_payload(w),
            Record::SetWorldTransform { height } => {
                for v in [
                    SCALE_POS_BITS,
                    0,
                    0,
                    SCALE_NEG_BITS,
                    0,
                    (height as f32).to_bits(),
                ] {
                    w.write_u32(v)?;
                }
                Ok(())
            }
            Record::CreatePen { handle, colorref } => {
                // solid style, zero width (one device pixel)
                for v in [handle, 0, 0, 0, colorref] {
                    w.write_u32(v)?;
                }
                Ok(())
            }
            Record::CreateBrush { handle, colorref } => {
                // solid style; hatch is ignored for solid brushes
                for v in [handle, 0, colorref, 0] {
                    w.write_u32(v)?;
                }
                Ok(())
            }
            Record::SelectObject { handle } => w.write_u32(handle),
            Record::MoveTo { point } => write_point(w, point),
            Record::BeginPath | Record::EndPath => Ok(()),
            Record::PolylineTo { segments } => {
                write_unbounded(w)?;
                w.write_u32(narrow(segments.len() as u64, "polyline point count")?)?;
                for seg in segments {
                    write_point(w, seg.end())?;
                }
                Ok(())
            }
            Record::PolyBezierTo { segments } => {
                write_unbounded(w)?;
                w.write_u32(narrow(
                    segments.len() as u64 * 3,
                    "bezier point count",
                )?)?;
                for seg in segments {
                    // a line in a curve run becomes a degenerate cubic
                    let (c1, c2, to) = match *seg {
                        Segment::Cubic { c1, c2, to } => (c1, c2, to),
                        Segment::Line { to } => (to, to, to),
                    };
                    write_point(w, c1)?;
                    write_point(w, c2)?;
                    write_point(w, to)?;
                }
                Ok(())
            }
            Record::StrokeAndFillPath => write_unbounded(w),
            Record::EndOfFile => {
                let size = narrow(size, "record size")?;
                w.write_u32(0)?; // palette entries
                w.write_u32(size - 4)?;
                w.write_u32(size)
            }
        }
    }
}

/// Bounds rectangle `(0, 0, -1, -1)`: "not computed".
fn write_unbounded(w: &mut LeWriter<'_>) -> EmfResult<()> {
    for v in [0, 0, u32::MAX, u32::MAX] {
        w.write_u32(v)?;
    }
    Ok(())
}

fn write_point(w: &mut LeWriter<'_>, p: Point) -> EmfResult<()> {
    w.write_u32(to_fixed_bits(p.x))?;
    w.write_u32(to_fixed_bits(p.y))
}

fn code_unit(c: char) -> u16 {
    (u32::from(c) & 0x7F) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/encode/record.rs"]
mod tests;
