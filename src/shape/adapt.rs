//! Conversion from kurbo paths into emitter shapes.

use kurbo::{BezPath, PathEl, QuadBez};

use crate::{
    foundation::core::{Color, Point},
    foundation::error::{EmfError, EmfResult},
    shape::model::{Segment, Shape},
};

/// Split a [`BezPath`] into one [`Shape`] per subpath.
///
/// Quadratic segments are raised to cubics. `ClosePath` adds a closing line when
/// the pen is not already back at the subpath start. Subpaths that never draw are
/// dropped.
pub fn shapes_from_bezpath(path: &BezPath, color: Color) -> Vec<Shape> {
    let mut out = Vec::new();
    let mut current: Option<Shape> = None;
    let mut pen = Point::ZERO;
    let mut subpath_start = Point::ZERO;

    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                flush(&mut out, current.take());
                current = Some(Shape::new(p, color));
                pen = p;
                subpath_start = p;
            }
            PathEl::LineTo(p) => {
                let shape = current.get_or_insert_with(|| Shape::new(pen, color));
                shape.segments.push(Segment::Line { to: p });
                pen = p;
            }
            PathEl::QuadTo(p1, p2) => {
                let cubic = QuadBez::new(pen, p1, p2).raise();
                let shape = current.get_or_insert_with(|| Shape::new(pen, color));
                shape.segments.push(Segment::Cubic {
                    c1: cubic.p1,
                    c2: cubic.p2,
                    to: cubic.p3,
                });
                pen = p2;
            }
            PathEl::CurveTo(c1, c2, p) => {
                let shape = current.get_or_insert_with(|| Shape::new(pen, color));
                shape.segments.push(Segment::Cubic { c1, c2, to: p });
                pen = p;
            }
            PathEl::ClosePath => {
                if let Some(shape) = current.as_mut()
                    && pen != subpath_start
                {
                    shape.segments.push(Segment::Line { to: subpath_start });
                }
                flush(&mut out, current.take());
                pen = subpath_start;
            }
        }
    }
    flush(&mut out, current);
    out
}

/// Parse SVG path data (`d` attribute syntax) and convert it with
/// [`shapes_from_bezpath`].
pub fn shapes_from_svg_path(d: &str, color: Color) -> EmfResult<Vec<Shape>> {
    let path = BezPath::from_svg(d)
        .map_err(|e| EmfError::validation(format!("invalid svg path data: {e}")))?;
    Ok(shapes_from_bezpath(&path, color))
}

fn flush(out: &mut Vec<Shape>, shape: Option<Shape>) {
    if let Some(shape) = shape
        && !shape.segments.is_empty()
    {
        out.push(shape);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/adapt.rs"]
mod tests;
