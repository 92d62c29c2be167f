use std::{io::Write, path::Path};

use anyhow::Context;

use crate::{
    emit::options::EmfOptions,
    encode::colors::{ColorRegistry, ColorTable, brush_handle, pen_handle},
    encode::record::{EncodeMode, HeaderRecord, Record},
    encode::writer::LeWriter,
    foundation::core::Color,
    foundation::error::{EmfError, EmfResult, narrow},
    shape::model::Shape,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Exact totals computed by the stats pass.
pub struct EmissionStats {
    /// Distinct colors; each owns one pen and one brush.
    pub color_count: usize,
    /// Shapes whose color differs from the previous shape's.
    pub color_changes: usize,
    /// Records in the stream, header and end-of-file included.
    pub record_count: u64,
    /// Stream length in bytes.
    pub byte_size: u64,
}

impl EmissionStats {
    /// Handle table size: a pen and a brush per color plus reserved slot 0.
    pub fn handle_count(&self) -> usize {
        self.color_count * 2 + 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Lifecycle of a [`TwoPassEmitter`]. Transitions only move forward.
pub enum EmitterState {
    /// Nothing computed yet.
    Idle,
    /// Stats pass finished; totals and color table are available.
    StatsPass,
    /// Stream is being written.
    EmissionPass,
    /// Stream written and verified against the stats.
    Done,
    /// A pass failed. Terminal.
    Failed,
}

/// Receiver of the records produced by one traversal of the shapes.
///
/// Both passes drive the same [`walk_shapes`], so grouping and ordering cannot
/// diverge between sizing and writing.
trait PassBackend {
    /// Color table index for a shape whose color differs from its predecessor's.
    fn color_index(&mut self, color: Color) -> EmfResult<usize>;

    fn record(&mut self, rec: Record<'_>) -> EmfResult<()>;
}

/// Emit the per-shape records; returns the number of color changes.
fn walk_shapes<B: PassBackend>(shapes: &[Shape], backend: &mut B) -> EmfResult<usize> {
    let mut last_color: Option<Color> = None;
    let mut changes = 0;

    for shape in shapes {
        if last_color != Some(shape.color) {
            let idx = backend.color_index(shape.color)?;
            backend.record(Record::SelectObject {
                handle: pen_handle(idx),
            })?;
            backend.record(Record::SelectObject {
                handle: brush_handle(idx),
            })?;
            last_color = Some(shape.color);
            changes += 1;
        }

        backend.record(Record::MoveTo { point: shape.start })?;
        backend.record(Record::BeginPath)?;
        for run in shape.runs() {
            backend.record(Record::from_run(run))?;
        }
        backend.record(Record::EndPath)?;
        backend.record(Record::StrokeAndFillPath)?;
    }

    Ok(changes)
}

#[derive(Default)]
struct StatsBackend {
    registry: ColorRegistry,
    records: u64,
    bytes: u64,
}

impl PassBackend for StatsBackend {
    fn color_index(&mut self, color: Color) -> EmfResult<usize> {
        Ok(self.registry.observe(color))
    }

    fn record(&mut self, rec: Record<'_>) -> EmfResult<()> {
        self.bytes += rec.encode(EncodeMode::SizeOnly)?;
        self.records += 1;
        Ok(())
    }
}

struct WriteBackend<'t, 'w> {
    table: &'t ColorTable,
    out: LeWriter<'w>,
    records: u64,
}

impl PassBackend for WriteBackend<'_, '_> {
    fn color_index(&mut self, color: Color) -> EmfResult<usize> {
        self.table.lookup(color).ok_or_else(|| {
            EmfError::state(format!(
                "color {:06X} was not registered by the stats pass",
                color.colorref()
            ))
        })
    }

    fn record(&mut self, rec: Record<'_>) -> EmfResult<()> {
        rec.encode(EncodeMode::Write(&mut self.out))?;
        self.records += 1;
        Ok(())
    }
}

/// Two-pass metafile emitter over a borrowed shape collection.
///
/// The stats pass sizes every record and builds the color table without touching
/// any sink. The emission pass replays the same traversal, writing a header that
/// carries the stats pass totals, and checks at the end that the stream matched
/// them exactly.
pub struct TwoPassEmitter<'s> {
    shapes: &'s [Shape],
    opts: &'s EmfOptions,
    state: EmitterState,
    table: ColorTable,
    stats: Option<EmissionStats>,
}

impl<'s> TwoPassEmitter<'s> {
    /// Create an idle emitter.
    pub fn new(shapes: &'s [Shape], opts: &'s EmfOptions) -> Self {
        Self {
            shapes,
            opts,
            state: EmitterState::Idle,
            table: ColorTable::default(),
            stats: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EmitterState {
        self.state
    }

    /// Color table built by the stats pass (empty before it ran).
    pub fn color_table(&self) -> &ColorTable {
        &self.table
    }

    /// Run the stats pass, or return its totals if it already ran.
    #[tracing::instrument(skip(self), fields(shapes = self.shapes.len()))]
    pub fn collect_stats(&mut self) -> EmfResult<EmissionStats> {
        match (self.state, self.stats) {
            (EmitterState::Idle, _) => {}
            (EmitterState::StatsPass, Some(stats)) => return Ok(stats),
            (state, _) => {
                return Err(EmfError::state(format!(
                    "stats pass cannot run in state {state:?}"
                )));
            }
        }

        self.transition(EmitterState::StatsPass);
        match self.run_stats() {
            Ok((stats, table)) => {
                tracing::debug!(
                    colors = stats.color_count,
                    records = stats.record_count,
                    bytes = stats.byte_size,
                    "stats pass complete"
                );
                self.table = table;
                self.stats = Some(stats);
                Ok(stats)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Write the stream to `sink`, running the stats pass first if needed.
    ///
    /// On error the sink may hold a partial stream, which must be discarded.
    #[tracing::instrument(skip(self, sink), fields(shapes = self.shapes.len()))]
    pub fn emit<W: Write>(&mut self, sink: &mut W) -> EmfResult<EmissionStats> {
        let stats = self.collect_stats()?;
        if self.state != EmitterState::StatsPass {
            return Err(EmfError::state(format!(
                "emission cannot run in state {:?}",
                self.state
            )));
        }

        self.transition(EmitterState::EmissionPass);
        match self.run_emission(&stats, sink) {
            Ok(()) => {
                self.transition(EmitterState::Done);
                Ok(stats)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    fn run_stats(&self) -> EmfResult<(EmissionStats, ColorTable)> {
        self.opts.validate()?;
        for (idx, shape) in self.shapes.iter().enumerate() {
            shape.validate(idx)?;
        }

        let mut backend = StatsBackend::default();
        let color_changes = walk_shapes(self.shapes, &mut backend)?;
        let color_count = backend.registry.len();

        let fixed = [
            Record::Header(self.header(None)?),
            Record::SetWorldTransform { height: 0 },
            Record::EndOfFile,
        ];
        let fixed_bytes: u64 = fixed.iter().map(Record::size).sum();
        let pen = Record::CreatePen {
            handle: 0,
            colorref: 0,
        };
        let brush = Record::CreateBrush {
            handle: 0,
            colorref: 0,
        };
        let per_color = pen.size() + brush.size();

        let stats = EmissionStats {
            color_count,
            color_changes,
            record_count: backend.records + fixed.len() as u64 + 2 * color_count as u64,
            byte_size: backend.bytes + fixed_bytes + per_color * color_count as u64,
        };

        if u16::try_from(stats.handle_count()).is_err() {
            return Err(EmfError::validation(format!(
                "{color_count} colors exceed the 16-bit handle table"
            )));
        }
        if u32::try_from(stats.byte_size).is_err() || u32::try_from(stats.record_count).is_err() {
            return Err(EmfError::validation("stream exceeds 32-bit size limits"));
        }

        Ok((stats, backend.registry.finalize()))
    }

    fn run_emission<W: Write>(&self, stats: &EmissionStats, sink: &mut W) -> EmfResult<()> {
        let mut backend = WriteBackend {
            table: &self.table,
            out: LeWriter::new(sink),
            records: 0,
        };

        backend.record(Record::Header(self.header(Some(stats))?))?;
        backend.record(Record::SetWorldTransform {
            height: self.opts.height,
        })?;
        for (idx, color) in self.table.colors().iter().enumerate() {
            backend.record(Record::CreatePen {
                handle: pen_handle(idx),
                colorref: color.colorref(),
            })?;
            backend.record(Record::CreateBrush {
                handle: brush_handle(idx),
                colorref: color.colorref(),
            })?;
        }
        let color_changes = walk_shapes(self.shapes, &mut backend)?;
        backend.record(Record::EndOfFile)?;
        backend.out.flush()?;

        if color_changes != stats.color_changes {
            return Err(EmfError::size_mismatch(
                "color changes",
                stats.color_changes as u64,
                color_changes as u64,
            ));
        }
        if backend.records != stats.record_count {
            return Err(EmfError::size_mismatch(
                "record count",
                stats.record_count,
                backend.records,
            ));
        }
        let written = backend.out.bytes_written();
        if written != stats.byte_size {
            return Err(EmfError::size_mismatch(
                "stream length",
                stats.byte_size,
                written,
            ));
        }
        tracing::debug!(bytes = written, records = backend.records, "emission pass complete");
        Ok(())
    }

    fn header(&self, stats: Option<&EmissionStats>) -> EmfResult<HeaderRecord<'s>> {
        let opts: &'s EmfOptions = self.opts;
        let (width_hmm, height_hmm) = opts.device.to_hmm(opts.width, opts.height)?;
        let stats = stats.copied().unwrap_or_default();
        Ok(HeaderRecord {
            width: opts.width,
            height: opts.height,
            width_hmm,
            height_hmm,
            device: opts.device,
            file_size: narrow(stats.byte_size, "file size")?,
            record_count: narrow(stats.record_count, "record count")?,
            handle_count: u16::try_from(stats.handle_count())
                .map_err(|_| EmfError::validation("handle count exceeds 16 bits"))?,
            editor_name: &opts.editor_name,
            output_name: &opts.output_name,
        })
    }

    fn transition(&mut self, next: EmitterState) {
        tracing::debug!(from = ?self.state, to = ?next, "emitter state");
        self.state = next;
    }

    fn fail(&mut self, err: EmfError) -> EmfError {
        tracing::warn!(from = ?self.state, error = %err, "emission aborted");
        self.state = EmitterState::Failed;
        err
    }
}

/// Run both passes and write the stream to `sink`.
pub fn write_emf<W: Write>(
    sink: &mut W,
    shapes: &[Shape],
    opts: &EmfOptions,
) -> EmfResult<EmissionStats> {
    TwoPassEmitter::new(shapes, opts).emit(sink)
}

/// Run both passes into an in-memory buffer.
pub fn emf_to_vec(shapes: &[Shape], opts: &EmfOptions) -> EmfResult<Vec<u8>> {
    let mut emitter = TwoPassEmitter::new(shapes, opts);
    let stats = emitter.collect_stats()?;
    let mut out = Vec::with_capacity(stats.byte_size as usize);
    emitter.emit(&mut out)?;
    Ok(out)
}

/// Emit into memory, then write `path` in one call.
///
/// The parent directory is created when missing. A failed emission never
/// creates or truncates the file.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn write_emf_file(
    path: impl AsRef<Path>,
    shapes: &[Shape],
    opts: &EmfOptions,
) -> EmfResult<EmissionStats> {
    let path = path.as_ref();
    let mut emitter = TwoPassEmitter::new(shapes, opts);
    let stats = emitter.collect_stats()?;
    let mut bytes = Vec::with_capacity(stats.byte_size as usize);
    emitter.emit(&mut bytes)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("failed to create output directory '{}'", parent.display())
        })?;
    }
    std::fs::write(path, &bytes)
        .with_context(|| format!("failed to write metafile '{}'", path.display()))?;
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/emit/emitter.rs"]
mod tests;
