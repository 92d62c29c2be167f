use super::*;

#[test]
fn colorref_puts_red_in_low_byte() {
    assert_eq!(Color::rgb(0xAA, 0xBB, 0xCC).colorref(), 0x00CC_BBAA);
    assert_eq!(Color::rgb(255, 0, 0).colorref(), 0x0000_00FF);
}

#[test]
fn colorref_unpack_ignores_high_byte() {
    let c = Color::from_colorref(0xFF12_3456);
    assert_eq!(c, Color::rgb(0x56, 0x34, 0x12));
    assert_eq!(Color::from_colorref(Color::WHITE.colorref()), Color::WHITE);
}
