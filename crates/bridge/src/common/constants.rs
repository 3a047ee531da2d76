//! Global bridge constants.
//!
//! This module defines values shared by the lifecycle, snapshot, and memory code:
//! 1. **Lifecycle:** The testbench boot address forced on reset.
//! 2. **Status:** The width of the core's flag vector.
//! 3. **Memory:** The size of the 16-bit address space.
//! 4. **Environment:** Variable names read at the DPI boundary.

/// Program counter value forced by a reset.
///
/// The testbench places its program at this address and does not populate the
/// architectural reset vector at `$FFFC`, so the vector is never fetched.
pub const BOOT_ADDRESS: u16 = 0x0400;

/// Number of entries in the core's status flag vector.
pub const FLAG_COUNT: usize = 8;

/// Number of addressable bytes in the 16-bit address space.
pub const ADDRESS_SPACE: usize = 0x1_0000;

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "M6502_COSIM_CONFIG";
