//! Cycle-stepped co-simulation bridge for a 6502 instruction-set model.
//!
//! This crate connects a software 6502 core to an RTL testbench so both can be
//! stepped in lockstep and compared. It provides:
//! 1. **Core contract:** The `CpuCore` trait a concrete instruction-set model implements.
//! 2. **Memory:** The `MemoryBus` seen by the core and the adapter onto signed testbench memory.
//! 3. **Status codec:** Packing of the eight status flags into the P byte.
//! 4. **Snapshot:** The fixed-layout `CpuState` record handed across the boundary.
//! 5. **Lifecycle:** The `Bridge` handle with `reset` and `tick`.
//!
//! The C-ABI entry points live in the `m6502-cosim-dpi` crate.

/// Common constants and error types.
pub mod common;
/// Bridge configuration (boot address, tracing, logging).
pub mod config;
/// CPU core contract and status flag codec.
pub mod core;
/// Reset/tick lifecycle over one owned core.
pub mod lifecycle;
/// Memory bus traits, the testbench adapter, and substitute backends.
pub mod mem;
/// Fixed-layout state snapshot and cross-check helpers.
pub mod snapshot;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Contract implemented by a concrete CPU model.
pub use crate::core::CpuCore;
/// Lifecycle handle owning a core and its memory bus.
pub use crate::lifecycle::Bridge;
/// Core-side and testbench-side memory interfaces.
pub use crate::mem::{MemoryAdapter, MemoryBus, TestbenchMemory};
/// Snapshot record written on every tick.
pub use crate::snapshot::CpuState;
