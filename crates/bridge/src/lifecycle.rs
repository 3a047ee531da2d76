//! Reset/tick lifecycle.
//!
//! `Bridge` owns one core and the bus it runs on, and exposes the two
//! transitions the testbench drives: `reset` once, then `tick` per clock. Each
//! call runs to completion; all memory traffic for a cycle happens inside the
//! `tick` that caused it.

use tracing::{debug, info};

use crate::config::Config;
use crate::core::{CpuCore, Line};
use crate::mem::MemoryBus;
use crate::snapshot::CpuState;

/// Co-simulation handle: a core, its memory bus, and the last snapshot.
#[derive(Debug)]
pub struct Bridge<C, M> {
    core: C,
    bus: M,
    /// Overwritten after every tick; its address is stable while the bridge is.
    state: CpuState,
    boot_address: u16,
    trace_ticks: bool,
    cycles: u64,
}

impl<C: CpuCore, M: MemoryBus> Bridge<C, M> {
    /// Creates a bridge around `core` and `bus`.
    ///
    /// The core is left exactly as supplied; call `reset` before the first tick.
    ///
    /// # Arguments
    ///
    /// * `core` - The CPU model.
    /// * `bus` - Memory the core's accesses are routed to.
    /// * `config` - Boot address and tracing settings.
    pub fn new(core: C, bus: M, config: &Config) -> Self {
        let state = CpuState::capture(&core);
        Self {
            core,
            bus,
            state,
            boot_address: config.general.boot_address,
            trace_ticks: config.general.trace_ticks,
            cycles: 0,
        }
    }

    /// Puts the core in its boot state.
    ///
    /// Clears the halt condition, deasserts the reset line, and forces PC to the
    /// boot address. The reset vector at `$FFFC` is not fetched. Calling this
    /// repeatedly always produces the same state.
    pub fn reset(&mut self) {
        info!(
            boot_address = self.boot_address,
            "model reset to ${:04X}",
            self.boot_address
        );
        self.core.unhalt();
        self.core.unraise(Line::Reset);
        self.core.set_pc(self.boot_address);
        self.cycles = 0;
        self.state = CpuState::capture(&self.core);
    }

    /// Advances the core one cycle and writes the resulting snapshot to `out`.
    pub fn tick(&mut self, out: &mut CpuState) {
        *out = *self.step();
    }

    /// Advances the core one cycle and returns the stored snapshot.
    pub fn step(&mut self) -> &CpuState {
        self.core.cycle(&mut self.bus);
        self.cycles += 1;
        self.state = CpuState::capture(&self.core);
        if self.trace_ticks {
            debug!(cycle = self.cycles, halted = self.core.is_halted(), "{}", self.state);
        }
        &self.state
    }

    /// Returns a fresh snapshot of the core without advancing it.
    pub fn capture(&self) -> CpuState {
        CpuState::capture(&self.core)
    }

    /// Returns the snapshot stored by the last `tick` or `reset`.
    pub const fn state(&self) -> &CpuState {
        &self.state
    }

    /// Returns `true` if the core reports itself halted.
    pub fn is_halted(&self) -> bool {
        self.core.is_halted()
    }

    /// Returns the number of ticks since the last reset.
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the PC value `reset` forces.
    pub const fn boot_address(&self) -> u16 {
        self.boot_address
    }

    /// Returns the core.
    pub const fn core(&self) -> &C {
        &self.core
    }

    /// Returns the core mutably.
    pub const fn core_mut(&mut self) -> &mut C {
        &mut self.core
    }

    /// Returns the memory bus.
    pub const fn bus(&self) -> &M {
        &self.bus
    }

    /// Returns the memory bus mutably.
    pub const fn bus_mut(&mut self) -> &mut M {
        &mut self.bus
    }

    /// Splits the bridge into its core and bus.
    pub fn into_parts(self) -> (C, M) {
        (self.core, self.bus)
    }
}
