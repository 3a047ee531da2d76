//! Memory access indirection.
//!
//! The core and the testbench disagree on integer domains: the core addresses
//! memory with unsigned 16-bit addresses and unsigned bytes, while the DPI
//! imports use SystemVerilog `shortint`/`byte`, both signed. This module provides:
//! 1. **Core side:** `MemoryBus`, the interface a `CpuCore` issues its accesses on.
//! 2. **Testbench side:** `TestbenchMemory`, the signed interface the host supplies.
//! 3. **Adapter:** `MemoryAdapter`, which converts between the two.
//! 4. **Backends:** `FlatMemory` (in-memory double) and `CallbackMemory` (closure pair).

/// Unsigned ↔ signed conversion adapter.
pub mod adapter;
/// Closure-pair testbench memory.
pub mod callback;
/// Flat 64 KiB testbench memory.
pub mod flat;

pub use adapter::MemoryAdapter;
pub use callback::CallbackMemory;
pub use flat::FlatMemory;

/// Memory as seen by a CPU core.
///
/// Reads take `&mut self` because a read may have side effects on the far side
/// (I/O registers, access logging). There is no error path: a 6502 bus cannot
/// fault, and range checking belongs to whoever owns the storage.
pub trait MemoryBus {
    /// Reads the byte at `address`.
    fn read(&mut self, address: u16) -> u8;

    /// Writes `value` to `address`.
    fn write(&mut self, address: u16, value: u8);
}

/// Memory as supplied by the testbench, in its signed integer domain.
pub trait TestbenchMemory {
    /// Reads the byte at `address`.
    fn read(&mut self, address: i16) -> i8;

    /// Writes `value` to `address`.
    fn write(&mut self, address: i16, value: i8);
}

impl<T: MemoryBus + ?Sized> MemoryBus for &mut T {
    fn read(&mut self, address: u16) -> u8 {
        (**self).read(address)
    }

    fn write(&mut self, address: u16, value: u8) {
        (**self).write(address, value);
    }
}

impl<T: TestbenchMemory + ?Sized> TestbenchMemory for &mut T {
    fn read(&mut self, address: i16) -> i8 {
        (**self).read(address)
    }

    fn write(&mut self, address: i16, value: i8) {
        (**self).write(address, value);
    }
}
