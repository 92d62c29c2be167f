use super::*;
use crate::shape::model::SegmentKind;

const BLUE: Color = Color::rgb(0, 0, 255);

#[test]
fn each_subpath_becomes_a_shape() {
    let shapes = shapes_from_svg_path("M0,0 L10,0 L10,10 Z M20,20 L30,20 L30,30 Z", BLUE).unwrap();
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0].start, Point::new(0.0, 0.0));
    assert_eq!(shapes[1].start, Point::new(20.0, 20.0));
    assert!(shapes.iter().all(|s| s.color == BLUE));
}

#[test]
fn close_path_adds_closing_line() {
    let shapes = shapes_from_svg_path("M0,0 L10,0 L10,10 Z", BLUE).unwrap();
    let segs = &shapes[0].segments;
    assert_eq!(segs.len(), 3);
    assert_eq!(segs[2], Segment::Line { to: Point::ZERO });
}

#[test]
fn close_path_at_start_adds_nothing() {
    let shapes = shapes_from_svg_path("M0,0 L10,0 L0,0 Z", BLUE).unwrap();
    assert_eq!(shapes[0].segments.len(), 2);
}

#[test]
fn quads_are_raised_to_cubics() {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.quad_to((3.0, 3.0), (6.0, 0.0));
    let shapes = shapes_from_bezpath(&path, BLUE);

    assert_eq!(shapes.len(), 1);
    match shapes[0].segments[0] {
        Segment::Cubic { c1, c2, to } => {
            assert!((c1.x - 2.0).abs() < 1e-9 && (c1.y - 2.0).abs() < 1e-9);
            assert!((c2.x - 4.0).abs() < 1e-9 && (c2.y - 2.0).abs() < 1e-9);
            assert_eq!(to, Point::new(6.0, 0.0));
        }
        other => panic!("expected cubic, got {other:?}"),
    }
}

#[test]
fn curves_keep_their_control_points() {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((1.0, 0.0));
    path.curve_to((2.0, 1.0), (3.0, 1.0), (4.0, 0.0));
    let shapes = shapes_from_bezpath(&path, BLUE);
    let kinds: Vec<_> = shapes[0].segments.iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, vec![SegmentKind::Line, SegmentKind::Cubic]);
}

#[test]
fn move_only_subpaths_are_dropped() {
    let shapes = shapes_from_svg_path("M5,5 M0,0 L1,1", BLUE).unwrap();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].start, Point::ZERO);
}

#[test]
fn malformed_svg_is_a_validation_error() {
    let err = shapes_from_svg_path("M0,0 K1,1", BLUE).unwrap_err();
    assert!(matches!(err, EmfError::Validation(_)));
}
