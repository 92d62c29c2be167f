use super::*;

/// Accepts `budget` bytes, then refuses everything.
struct Tight {
    budget: usize,
    data: Vec<u8>,
}

impl std::io::Write for Tight {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = buf.len().min(self.budget);
        self.budget -= n;
        self.data.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn integers_are_little_endian() {
    let mut buf = Vec::new();
    let mut w = LeWriter::new(&mut buf);
    w.write_u8(0xAB).unwrap();
    w.write_u16(0x1234).unwrap();
    w.write_u32(0xDEAD_BEEF).unwrap();
    assert_eq!(w.bytes_written(), 7);
    assert_eq!(buf, vec![0xAB, 0x34, 0x12, 0xEF, 0xBE, 0xAD, 0xDE]);
}

#[test]
fn short_write_is_a_sink_error() {
    let mut sink = Tight {
        budget: 6,
        data: Vec::new(),
    };
    let mut w = LeWriter::new(&mut sink);
    w.write_u32(1).unwrap();
    let err = w.write_u32(2).unwrap_err();
    match err {
        EmfError::SinkWrite { offset, source } => {
            assert_eq!(offset, 4);
            assert_eq!(source.kind(), std::io::ErrorKind::WriteZero);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(w.bytes_written(), 4);
}

#[test]
fn sink_errors_propagate() {
    struct Broken;
    impl std::io::Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("gone"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("gone"))
        }
    }

    let mut sink = Broken;
    let mut w = LeWriter::new(&mut sink);
    assert!(matches!(w.write_u16(1), Err(EmfError::SinkWrite { .. })));
    assert!(matches!(w.flush(), Err(EmfError::SinkWrite { .. })));
}
