use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        EmfError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        EmfError::state("x")
            .to_string()
            .contains("emitter state error:")
    );
    assert_eq!(
        EmfError::invalid_shape(3, "shape has no segments").to_string(),
        "invalid shape #3: shape has no segments"
    );
    assert_eq!(
        EmfError::size_mismatch("record count", 12, 11).to_string(),
        "size mismatch in record count: expected 12, got 11"
    );
}

#[test]
fn sink_write_keeps_io_source() {
    let err = EmfError::SinkWrite {
        offset: 40,
        source: std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full"),
    };
    assert!(err.to_string().contains("offset 40"));
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("disk full"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = EmfError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn narrow_rejects_values_past_32_bits() {
    assert_eq!(narrow(u64::from(u32::MAX), "file size").unwrap(), u32::MAX);
    let err = narrow(u64::from(u32::MAX) + 1, "file size").unwrap_err();
    assert!(matches!(err, EmfError::Validation(ref msg) if msg.starts_with("file size ")));
}
