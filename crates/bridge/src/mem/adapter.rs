//! Testbench memory adapter.
//!
//! Converts the core's unsigned accesses into the testbench's signed domain.
//! Every conversion is a two's-complement bit reinterpretation: `$8000` becomes
//! `-32768`, `$FF` becomes `-1`, and the same bits come back on the way in. No
//! address range checking is done here.

use tracing::trace;

use super::{MemoryBus, TestbenchMemory};

/// Reinterprets a core address as a testbench address.
#[inline]
pub const fn to_testbench_address(address: u16) -> i16 {
    address as i16
}

/// Reinterprets a core byte as a testbench byte.
#[inline]
pub const fn to_testbench_byte(value: u8) -> i8 {
    value as i8
}

/// Reinterprets a testbench byte as a core byte.
#[inline]
pub const fn from_testbench_byte(value: i8) -> u8 {
    value as u8
}

/// `MemoryBus` over a `TestbenchMemory`.
#[derive(Debug, Clone, Default)]
pub struct MemoryAdapter<T> {
    inner: T,
}

impl<T: TestbenchMemory> MemoryAdapter<T> {
    /// Wraps testbench memory for use by a core.
    pub const fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Returns the wrapped testbench memory.
    pub const fn inner(&self) -> &T {
        &self.inner
    }

    /// Returns the wrapped testbench memory mutably.
    pub const fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Unwraps the adapter.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: TestbenchMemory> MemoryBus for MemoryAdapter<T> {
    fn read(&mut self, address: u16) -> u8 {
        let value = from_testbench_byte(self.inner.read(to_testbench_address(address)));
        trace!(target: "m6502_cosim::mem", "read  ${address:04X} -> ${value:02X}");
        value
    }

    fn write(&mut self, address: u16, value: u8) {
        trace!(target: "m6502_cosim::mem", "write ${address:04X} <- ${value:02X}");
        self.inner
            .write(to_testbench_address(address), to_testbench_byte(value));
    }
}
