//! `OutputBuffer`: single-flush accumulator for ANSI sequences.
//!
//! Border glyphs, pane content, and the error panel are all built here and
//! flushed to the sink in one `write_all`, so a draw cycle hits the
//! terminal as a single burst instead of hundreds of tiny writes.

use std::io::Write;

/// Pre-allocated buffer for building positioned terminal writes.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical dashboard frame (8KB).
    pub fn new() -> Self {
        Self::with_capacity(8192)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The accumulated bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Accumulated length in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if nothing has been written yet.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append a string verbatim.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Append a single character.
    #[inline]
    pub fn write_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.data.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
    }

    /// Move the cursor to a 0-indexed (x, y) cell.
    #[inline]
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        // CSI row ; col H, 1-indexed on the wire.
        let _ = write!(self.data, "\x1b[{};{}H", y + 1, x + 1);
    }

    /// Start the next line (carriage return + line feed).
    #[inline]
    pub fn newline(&mut self) {
        self.data.extend_from_slice(b"\r\n");
    }

    /// Flush everything to a writer in a single syscall.
    ///
    /// # Errors
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_move_is_one_indexed() {
        let mut out = OutputBuffer::new();
        out.cursor_move(0, 0);
        assert_eq!(out.as_bytes(), b"\x1b[1;1H");
    }

    #[test]
    fn test_write_char_multibyte() {
        let mut out = OutputBuffer::new();
        out.write_char('┼');
        assert_eq!(out.as_bytes(), "┼".as_bytes());
    }

    #[test]
    fn test_flush_to_writer() {
        let mut out = OutputBuffer::new();
        out.write_str("frame");
        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"frame");
    }
}
