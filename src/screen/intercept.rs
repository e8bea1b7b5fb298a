//! Output interception: keep stray program output without corrupting the
//! dashboard overlay.
//!
//! The debuggee may have threads printing to standard output while the
//! dashboard owns the screen. Instead of monkey-patching a global sink,
//! the application wraps its output path in a [`TeeWriter`] decorator
//! obtained from the manager's [`InterceptGate`]. Every write is delivered
//! unmodified; it is ALSO mirrored into a side buffer exactly when the
//! dashboard is started and no draw cycle is in flight. The buffer is
//! flushed once to the restored normal screen on `stop()`.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Shared {
    started: AtomicBool,
    updating: AtomicBool,
    buffer: Mutex<Vec<u8>>,
}

/// Shared interception state: the manager's lifecycle flags plus the side
/// buffer. Cloning hands out another handle to the same state.
#[derive(Debug, Clone, Default)]
pub struct InterceptGate {
    shared: Arc<Shared>,
}

impl InterceptGate {
    /// Create a gate in the stopped state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag the dashboard as started/stopped.
    pub fn set_started(&self, on: bool) {
        self.shared.started.store(on, Ordering::SeqCst);
    }

    /// Flag a draw cycle as in flight. Writes made while this is set are
    /// the cycle's own painting, never buffered.
    pub fn set_updating(&self, on: bool) {
        self.shared.updating.store(on, Ordering::SeqCst);
    }

    /// Check whether the dashboard is active.
    pub fn is_started(&self) -> bool {
        self.shared.started.load(Ordering::SeqCst)
    }

    /// Check whether a draw cycle is in flight.
    pub fn is_updating(&self) -> bool {
        self.shared.updating.load(Ordering::SeqCst)
    }

    /// Check whether any stray output has been captured.
    pub fn has_buffered(&self) -> bool {
        !self.shared.buffer.lock().expect("side buffer poisoned").is_empty()
    }

    /// Take the captured output, leaving the buffer empty.
    pub fn drain(&self) -> Vec<u8> {
        std::mem::take(&mut *self.shared.buffer.lock().expect("side buffer poisoned"))
    }

    /// Wrap a sink in the interception decorator.
    pub fn writer<W: Write>(&self, inner: W) -> TeeWriter<W> {
        TeeWriter {
            inner,
            gate: self.clone(),
        }
    }

    fn mirror(&self, bytes: &[u8]) {
        if self.is_started() && !self.is_updating() {
            self.shared
                .buffer
                .lock()
                .expect("side buffer poisoned")
                .extend_from_slice(bytes);
        }
    }
}

/// Writer decorator forwarding every write to the real sink and mirroring
/// it into the gate's side buffer when interception is active.
///
/// Safe to use from any thread (the buffer is mutex-guarded); the manager
/// drains the buffer only during `stop()`.
#[derive(Debug)]
pub struct TeeWriter<W: Write> {
    inner: W,
    gate: InterceptGate,
}

impl<W: Write> TeeWriter<W> {
    /// Access the wrapped sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap the decorator, discarding the gate handle.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for TeeWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.gate.mirror(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
