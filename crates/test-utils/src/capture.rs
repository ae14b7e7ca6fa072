use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use procwatch::console::Console;

/// In-memory writer whose clones share one buffer.
///
/// Hand one clone to a [`Console`] and keep another to inspect what was
/// written after the run.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.inner.lock().unwrap().clone()
    }

    /// Contents as UTF-8 (lossy).
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes()).into_owned()
    }

    /// A console writing stdout / stderr into two fresh buffers.
    pub fn console_pair() -> (Console<SharedBuffer, SharedBuffer>, SharedBuffer, SharedBuffer) {
        let out = SharedBuffer::new();
        let err = SharedBuffer::new();
        (Console::new(out.clone(), err.clone()), out, err)
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
