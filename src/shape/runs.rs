use crate::shape::model::{Segment, SegmentKind, Shape};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Maximal contiguous slice of same-kind segments within one shape.
pub struct Run<'a> {
    /// Shared kind of every segment in `segments`.
    pub kind: SegmentKind,
    /// Non-empty slice of the shape's segment list.
    pub segments: &'a [Segment],
}

/// Iterator over the runs of a segment list, left to right.
#[derive(Clone, Debug)]
pub struct Runs<'a> {
    rest: &'a [Segment],
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.rest.first()?.kind();
        let len = self
            .rest
            .iter()
            .position(|s| s.kind() != kind)
            .unwrap_or(self.rest.len());
        let (segments, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(Run { kind, segments })
    }
}

/// Partition a segment list into runs.
pub fn segment_runs(segments: &[Segment]) -> Runs<'_> {
    Runs { rest: segments }
}

impl Shape {
    /// Runs of this shape's segments; one geometry record is emitted per run.
    pub fn runs(&self) -> Runs<'_> {
        segment_runs(&self.segments)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/runs.rs"]
mod tests;
