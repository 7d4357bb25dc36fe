//! Serialized-size measurement

use std::io;

use serde::Serialize;

struct ByteCounter(usize);

impl io::Write for ByteCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0 += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Length in bytes of the compact JSON serialization of `value`.
///
/// Bytes are counted as they are written, without building the string.
/// A value that fails to serialize measures as zero.
pub fn json_size<T>(value: &T) -> usize
where
    T: ?Sized + Serialize,
{
    let mut counter = ByteCounter(0);
    match serde_json::to_writer(&mut counter, value) {
        Ok(()) => counter.0,
        Err(e) => {
            log::warn!("Failed to measure serialized size: {e}");
            0
        }
    }
}
