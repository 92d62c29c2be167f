use super::*;

const RED: Color = Color::rgb(255, 0, 0);
const GREEN: Color = Color::rgb(0, 255, 0);
const BLUE: Color = Color::rgb(0, 0, 255);

#[test]
fn indices_follow_discovery_order() {
    let mut reg = ColorRegistry::new();
    assert_eq!(reg.observe(GREEN), 0);
    assert_eq!(reg.observe(RED), 1);
    assert_eq!(reg.observe(GREEN), 0);
    assert_eq!(reg.observe(BLUE), 2);
    assert_eq!(reg.len(), 3);

    let table = reg.finalize();
    assert_eq!(table.colors(), &[GREEN, RED, BLUE]);
}

#[test]
fn table_lookup_matches_observed_index() {
    let mut reg = ColorRegistry::new();
    let observed: Vec<_> = [BLUE, RED, BLUE, GREEN]
        .into_iter()
        .map(|c| (c, reg.observe(c)))
        .collect();
    let table = reg.finalize();
    for (color, idx) in observed {
        assert_eq!(table.lookup(color), Some(idx));
    }
    assert_eq!(table.lookup(Color::WHITE), None);
}

#[test]
fn empty_registry_gives_empty_table() {
    let reg = ColorRegistry::new();
    assert!(reg.is_empty());
    let table = reg.finalize();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
}

#[test]
fn handles_interleave_pens_and_brushes() {
    assert_eq!(pen_handle(0), 1);
    assert_eq!(brush_handle(0), 2);
    assert_eq!(pen_handle(3), 7);
    assert_eq!(brush_handle(3), 8);
}
