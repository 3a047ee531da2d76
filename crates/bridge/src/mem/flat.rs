//! Flat 64 KiB testbench memory.
//!
//! Stands in for the HDL-side memory model when the bridge runs without a
//! simulator: unit tests, offline replays, and host-side golden runs.

use crate::common::constants::ADDRESS_SPACE;

use super::TestbenchMemory;

/// 64 KiB of RAM addressed in the testbench's signed domain.
///
/// Addresses are reinterpreted as unsigned, so `-1` is `$FFFF`.
#[derive(Clone)]
pub struct FlatMemory {
    data: Box<[u8]>,
}

impl FlatMemory {
    /// Creates zero-filled memory.
    pub fn new() -> Self {
        Self {
            data: vec![0; ADDRESS_SPACE].into_boxed_slice(),
        }
    }

    /// Copies `bytes` into memory starting at `base`, wrapping past `$FFFF`.
    ///
    /// # Arguments
    ///
    /// * `base` - First address to write (core domain).
    /// * `bytes` - Image to copy.
    pub fn load(&mut self, base: u16, bytes: &[u8]) {
        for (offset, &byte) in bytes.iter().enumerate() {
            let address = base.wrapping_add(offset as u16);
            self.data[usize::from(address)] = byte;
        }
    }

    /// Returns the byte at `address` (core domain) without going through the adapter.
    pub fn peek(&self, address: u16) -> u8 {
        self.data[usize::from(address)]
    }

    /// Overwrites the byte at `address` (core domain) without going through the adapter.
    pub fn poke(&mut self, address: u16, value: u8) {
        self.data[usize::from(address)] = value;
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory")
            .field("len", &self.data.len())
            .finish_non_exhaustive()
    }
}

impl TestbenchMemory for FlatMemory {
    fn read(&mut self, address: i16) -> i8 {
        self.data[usize::from(address as u16)] as i8
    }

    fn write(&mut self, address: i16, value: i8) {
        self.data[usize::from(address as u16)] = value as u8;
    }
}
