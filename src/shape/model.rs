use crate::foundation::{
    core::{Color, Point},
    error::{EmfError, EmfResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Segment geometry class used for run grouping.
pub enum SegmentKind {
    /// Straight line.
    Line,
    /// Cubic Bézier curve.
    Cubic,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// One drawing step of a shape, starting at the previous segment's end point.
pub enum Segment {
    /// Straight line to `to`.
    Line {
        /// End point.
        to: Point,
    },
    /// Cubic curve to `to` via two control points.
    Cubic {
        /// First control point.
        c1: Point,
        /// Second control point.
        c2: Point,
        /// End point.
        to: Point,
    },
}

impl Segment {
    /// Geometry class of this segment.
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Line { .. } => SegmentKind::Line,
            Segment::Cubic { .. } => SegmentKind::Cubic,
        }
    }

    /// End point of the segment.
    pub fn end(&self) -> Point {
        match *self {
            Segment::Line { to } | Segment::Cubic { to, .. } => to,
        }
    }

    fn points(&self) -> impl Iterator<Item = Point> {
        let (a, b, c) = match *self {
            Segment::Line { to } => (None, None, to),
            Segment::Cubic { c1, c2, to } => (Some(c1), Some(c2), to),
        };
        a.into_iter().chain(b).chain(std::iter::once(c))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A closed, filled outline with a single color.
///
/// Shapes are produced upstream (typically by a tracer) and consumed read-only by
/// the emitter. The pen starts at `start`; every segment continues from the end
/// point of the previous one.
pub struct Shape {
    /// First point of the outline.
    pub start: Point,
    /// Drawing steps in order. Must not be empty.
    pub segments: Vec<Segment>,
    /// Fill and stroke color.
    pub color: Color,
}

impl Shape {
    /// Start an empty shape at `start`.
    pub fn new(start: Point, color: Color) -> Self {
        Self {
            start,
            segments: Vec::new(),
            color,
        }
    }

    /// Append a straight segment.
    pub fn line_to(mut self, to: impl Into<Point>) -> Self {
        self.segments.push(Segment::Line { to: to.into() });
        self
    }

    /// Append a cubic segment.
    pub fn cubic_to(
        mut self,
        c1: impl Into<Point>,
        c2: impl Into<Point>,
        to: impl Into<Point>,
    ) -> Self {
        self.segments.push(Segment::Cubic {
            c1: c1.into(),
            c2: c2.into(),
            to: to.into(),
        });
        self
    }

    /// Check that the shape can be emitted. `index` is only used for reporting.
    pub fn validate(&self, index: usize) -> EmfResult<()> {
        if self.segments.is_empty() {
            return Err(EmfError::invalid_shape(index, "shape has no segments"));
        }
        if !is_finite(self.start) {
            return Err(EmfError::invalid_shape(index, "start point is not finite"));
        }
        for (seg_idx, seg) in self.segments.iter().enumerate() {
            if !seg.points().all(is_finite) {
                return Err(EmfError::invalid_shape(
                    index,
                    format!("segment {seg_idx} has a non-finite coordinate"),
                ));
            }
        }
        Ok(())
    }
}

fn is_finite(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

#[cfg(test)]
#[path = "../../tests/unit/shape/model.rs"]
mod tests;
