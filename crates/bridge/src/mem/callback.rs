//! Testbench memory built from a read/write closure pair.

use super::TestbenchMemory;

/// `TestbenchMemory` that forwards to two closures.
///
/// Useful when the storage lives behind an API that is not a Rust type, or
/// when a test wants to observe each access inline.
pub struct CallbackMemory<R, W> {
    read: R,
    write: W,
}

impl<R, W> CallbackMemory<R, W>
where
    R: FnMut(i16) -> i8,
    W: FnMut(i16, i8),
{
    /// Binds a read function and a write function.
    pub const fn new(read: R, write: W) -> Self {
        Self { read, write }
    }
}

impl<R, W> std::fmt::Debug for CallbackMemory<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackMemory").finish_non_exhaustive()
    }
}

impl<R, W> TestbenchMemory for CallbackMemory<R, W>
where
    R: FnMut(i16) -> i8,
    W: FnMut(i16, i8),
{
    fn read(&mut self, address: i16) -> i8 {
        (self.read)(address)
    }

    fn write(&mut self, address: i16, value: i8) {
        (self.write)(address, value);
    }
}
