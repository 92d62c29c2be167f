use super::*;

#[test]
fn default_device_converts_to_hundredths_of_mm() {
    let opts = EmfOptions::new(1280, 1024, "out.emf");
    assert_eq!(opts.device.to_hmm(1280, 1024).unwrap(), (32_000, 24_000));
    assert_eq!(opts.device.to_hmm(640, 480).unwrap(), (16_000, 11_250));
    assert!(opts.validate().is_ok());
}

#[test]
fn zero_device_extent_is_rejected() {
    let device = DeviceMetrics {
        width_px: 0,
        ..DeviceMetrics::default()
    };
    let opts = EmfOptions::new(10, 10, "x").with_device(device);
    assert!(matches!(opts.validate(), Err(EmfError::Validation(_))));
}

#[test]
fn overflowing_bounds_are_rejected() {
    let device = DeviceMetrics {
        width_px: 1,
        width_mm: u32::MAX,
        ..DeviceMetrics::default()
    };
    assert!(matches!(
        device.to_hmm(u32::MAX, 1),
        Err(EmfError::Validation(_))
    ));

    let device = DeviceMetrics {
        height_px: 1,
        height_mm: u32::MAX,
        ..DeviceMetrics::default()
    };
    assert!(matches!(
        device.to_hmm(1, u32::MAX),
        Err(EmfError::Validation(_))
    ));
    let opts = EmfOptions::new(u32::MAX, u32::MAX, "x").with_device(device);
    assert!(matches!(opts.validate(), Err(EmfError::Validation(_))));
}

#[test]
fn bounds_past_32_bits_are_rejected() {
    let device = DeviceMetrics {
        width_px: 1,
        width_mm: 1_000,
        ..DeviceMetrics::default()
    };
    assert!(matches!(
        device.to_hmm(100_000, 1),
        Err(EmfError::Validation(_))
    ));
    assert_eq!(device.to_hmm(42, 0).unwrap(), (4_200_000, 0));
}

#[test]
fn new_uses_crate_editor_name() {
    let opts = EmfOptions::new(1, 1, "x");
    assert_eq!(opts.editor_name, DEFAULT_EDITOR_NAME);
    assert!(opts.editor_name.starts_with("emfout "));
    let opts = opts.with_editor_name("tracer 1.0");
    assert_eq!(opts.editor_name, "tracer 1.0");
}

#[test]
fn json_fills_defaults() {
    let opts: EmfOptions =
        serde_json::from_str(r#"{"width": 64, "height": 32, "output_name": "a.emf"}"#).unwrap();
    assert_eq!(opts, EmfOptions::new(64, 32, "a.emf"));
}
