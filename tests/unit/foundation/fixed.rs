use super::*;

#[test]
fn rounds_half_away_from_zero() {
    assert_eq!(to_fixed(1.2345), 1235);
    assert_eq!(to_fixed(-1.2345), -1235);
    assert_eq!(to_fixed(0.0), 0);
    assert_eq!(to_fixed(0.0005), 1);
    assert_eq!(to_fixed(-0.0005), -1);
}

#[test]
fn truncates_below_half_unit() {
    assert_eq!(to_fixed(0.00025), 0);
    assert_eq!(to_fixed(-0.00025), 0);
    assert_eq!(to_fixed(2.0004), 2000);
}

#[test]
fn whole_units_scale_exactly() {
    assert_eq!(to_fixed(10.0), 10_000);
    assert_eq!(to_fixed(-480.0), -480_000);
}

#[test]
fn bits_are_twos_complement() {
    assert_eq!(to_fixed_bits(1.0), 1000);
    assert_eq!(to_fixed_bits(-0.001), u32::MAX);
    assert_eq!(to_fixed_bits(-1.0), (-1000i32) as u32);
}

#[test]
fn out_of_range_saturates() {
    assert_eq!(to_fixed(1e12), i32::MAX);
    assert_eq!(to_fixed(-1e12), i32::MIN);
}
