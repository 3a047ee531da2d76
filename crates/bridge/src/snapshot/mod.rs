//! CPU state snapshot.
//!
//! `CpuState` is the record handed to the testbench after every tick. Its memory
//! layout is a contract with the SystemVerilog struct on the far side:
//!
//! | offset | field | width |
//! |--------|-------|-------|
//! | 0      | PC    | 16    |
//! | 2      | A     | 8     |
//! | 3      | X     | 8     |
//! | 4      | Y     | 8     |
//! | 5      | S     | 8     |
//! | 6      | P     | 8     |
//! | 7      | pad   | 8     |
//!
//! Changing field order or widths requires bumping `CpuState::LAYOUT_VERSION`
//! and the consumer in lockstep. New fields go after P.

/// Field-by-field comparison against a reference snapshot.
pub mod compare;

use std::fmt;
use std::mem::{align_of, offset_of, size_of};

use serde::{Deserialize, Serialize};

use crate::common::error::SnapshotError;
use crate::core::{CpuCore, compress_status, render_status};

pub use compare::{Field, Mismatch, compare};

/// Architectural state after a cycle, in boundary layout.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CpuState {
    /// Program counter.
    pub pc: u16,
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Stack pointer.
    pub s: u8,
    /// Packed status flags; bit `i` is `StatusFlag` index `i`.
    pub p: u8,
}

const _: () = {
    assert!(offset_of!(CpuState, pc) == 0);
    assert!(offset_of!(CpuState, a) == 2);
    assert!(offset_of!(CpuState, x) == 3);
    assert!(offset_of!(CpuState, y) == 4);
    assert!(offset_of!(CpuState, s) == 5);
    assert!(offset_of!(CpuState, p) == 6);
    assert!(size_of::<CpuState>() == 8);
    assert!(align_of::<CpuState>() == 2);
};

impl CpuState {
    /// Revision of the field layout above.
    pub const LAYOUT_VERSION: u8 = 1;

    /// Size in bytes of the boundary record, including trailing padding.
    pub const SIZE: usize = size_of::<Self>();

    /// Reads the current state of `core`.
    ///
    /// Pure: the core is not advanced or otherwise modified.
    pub fn capture<C: CpuCore + ?Sized>(core: &C) -> Self {
        let regs = core.registers();
        Self {
            pc: core.pc(),
            a: regs.a,
            x: regs.x,
            y: regs.y,
            s: regs.s,
            p: compress_status(&core.flags()),
        }
    }

    /// Returns the boundary byte image: `[pc_lo, pc_hi, a, x, y, s, p, 0]`.
    ///
    /// PC is little-endian, which matches the in-memory record on every target a
    /// DPI simulator runs on.
    pub const fn to_bytes(&self) -> [u8; Self::SIZE] {
        let pc = self.pc.to_le_bytes();
        [pc[0], pc[1], self.a, self.x, self.y, self.s, self.p, 0]
    }

    /// Parses a boundary byte image produced by `to_bytes` or copied out of the testbench.
    ///
    /// The padding byte is ignored.
    ///
    /// # Errors
    ///
    /// `SnapshotError::Length` if `bytes` is not exactly `CpuState::SIZE` long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let &[pc_lo, pc_hi, a, x, y, s, p, _pad] = bytes else {
            return Err(SnapshotError::Length {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        };
        Ok(Self {
            pc: u16::from_le_bytes([pc_lo, pc_hi]),
            a,
            x,
            y,
            s,
            p,
        })
    }
}

impl fmt::Display for CpuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PC=${:04X} A=${:02X} X=${:02X} Y=${:02X} S=${:02X} P={}",
            self.pc,
            self.a,
            self.x,
            self.y,
            self.s,
            render_status(self.p)
        )
    }
}
