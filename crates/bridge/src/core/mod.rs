//! CPU core contract.
//!
//! The instruction decode/execute engine is not part of this crate. A concrete
//! 6502 model plugs in by implementing `CpuCore`, which exposes:
//! 1. **Stepping:** `cycle` advances exactly one clock and performs its bus traffic.
//! 2. **Registers:** Program counter, A, X, Y, and S.
//! 3. **Status:** The eight status flags as a boolean vector, ordered per `StatusFlag`.
//! 4. **Control lines:** Halt state and the reset/NMI/IRQ input lines.

/// Status flag ordering and the flag-vector → P byte codec.
pub mod status;

use crate::common::constants::FLAG_COUNT;
use crate::mem::MemoryBus;

pub use status::{StatusFlag, compress_status, render_status};

/// The 8-bit register file (everything but PC and P).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Stack pointer (offset into page one).
    pub s: u8,
}

/// Input lines a core samples between instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Line {
    /// Reset request. While raised, a core performs its reset sequence.
    Reset,
    /// Non-maskable interrupt request.
    Nmi,
    /// Maskable interrupt request.
    Irq,
}

/// Contract between the bridge and a cycle-stepped 6502 model.
///
/// A core owns all architectural state. The bridge never reaches into it except
/// through these methods, and the core never reaches memory except through the
/// bus handed to `cycle`.
pub trait CpuCore {
    /// Advances the core by exactly one clock cycle.
    ///
    /// Any memory traffic for the cycle (typically zero to two accesses) goes
    /// through `bus` before this returns.
    fn cycle<B: MemoryBus>(&mut self, bus: &mut B);

    /// Returns the program counter.
    fn pc(&self) -> u16;

    /// Overwrites the program counter.
    fn set_pc(&mut self, pc: u16);

    /// Returns A, X, Y, and S.
    fn registers(&self) -> Registers;

    /// Returns the status flags; entry `i` is the flag at `StatusFlag` index `i`.
    fn flags(&self) -> [bool; FLAG_COUNT];

    /// Returns `true` if the core has stopped executing (e.g. a jam opcode).
    fn is_halted(&self) -> bool;

    /// Clears the halt condition.
    fn unhalt(&mut self);

    /// Returns `true` if `line` is currently asserted.
    fn is_raised(&self, line: Line) -> bool;

    /// Deasserts `line`.
    fn unraise(&mut self, line: Line);
}
