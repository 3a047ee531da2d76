//! Model holder behind the DPI entry points.
//!
//! Owns a boxed `Bridge` whose bus is the simulator's memory, loads the
//! configuration, and turns the raw snapshot pointer from the testbench into a
//! checked write. `ModelSlot` holds the one model a process has.

use std::sync::Mutex;

use m6502_cosim::mem::MemoryAdapter;
use m6502_cosim::{Bridge, Config, CpuCore, CpuState, TestbenchMemory};
use tracing::{error, info, warn};

use crate::logging;

/// A bridge wired to testbench memory, as held by the generated shim.
#[derive(Debug)]
pub struct DpiModel<C, T> {
    bridge: Box<Bridge<C, MemoryAdapter<T>>>,
}

impl<C: CpuCore, T: TestbenchMemory> DpiModel<C, T> {
    /// Creates a model using the configuration named by `M6502_COSIM_CONFIG`.
    ///
    /// Installs the log subscriber first so a bad configuration file is
    /// reported. A configuration that fails to load is replaced by the defaults;
    /// nothing is returned to the simulator.
    pub fn new(core: C, memory: T) -> Self {
        let (config, load_error) = match Config::from_env() {
            Ok(config) => (config, None),
            Err(err) => (Config::default(), Some(err)),
        };
        logging::init(&config.logging);
        if let Some(err) = load_error {
            error!(%err, "falling back to default configuration");
        }
        Self::with_config(core, memory, &config)
    }

    /// Creates a model with an explicit configuration.
    pub fn with_config(core: C, memory: T, config: &Config) -> Self {
        info!(
            boot_address = config.general.boot_address,
            "co-simulation model created, boot address ${:04X}",
            config.general.boot_address
        );
        Self {
            bridge: Box::new(Bridge::new(core, MemoryAdapter::new(memory), config)),
        }
    }

    /// Resets the model (`ResetModel`).
    pub fn reset(&mut self) {
        self.bridge.reset();
    }

    /// Advances one cycle and copies the snapshot to `out` (`Tick`).
    ///
    /// A null `out` is logged and skipped; the cycle still runs.
    ///
    /// # Safety
    ///
    /// `out` must be null or valid for a write of one `CpuState`.
    pub unsafe fn tick_into(&mut self, out: *mut CpuState) {
        let state = *self.bridge.step();
        // SAFETY: guaranteed by the caller.
        match unsafe { out.as_mut() } {
            Some(out) => *out = state,
            None => warn!(
                cycle = self.bridge.cycles(),
                "Tick called with a null state pointer"
            ),
        }
    }

    /// Returns the persistent snapshot, valid for the model's lifetime.
    pub fn state(&self) -> &CpuState {
        self.bridge.state()
    }

    /// Returns the underlying bridge.
    pub fn bridge(&self) -> &Bridge<C, MemoryAdapter<T>> {
        &self.bridge
    }

    /// Returns the underlying bridge mutably.
    pub fn bridge_mut(&mut self) -> &mut Bridge<C, MemoryAdapter<T>> {
        &mut self.bridge
    }
}

/// Process-wide home of the model behind the generated entry points.
///
/// Every caller sees the same model whichever OS thread it runs on. The lock
/// serialises access but does not make concurrent entry-point calls
/// meaningful: the testbench must still issue them one at a time.
#[derive(Debug)]
pub struct ModelSlot<C, T> {
    slot: Mutex<Option<DpiModel<C, T>>>,
}

impl<C, T> ModelSlot<C, T> {
    /// Creates an empty slot, usable as a `static` initialiser.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl<C, T> Default for ModelSlot<C, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CpuCore, T: TestbenchMemory> ModelSlot<C, T> {
    /// Runs `f` on the model, building it with `init` on first use.
    ///
    /// A lock poisoned by a panic in an earlier call is reported and the model
    /// it guards is reused as is.
    pub fn with<R>(
        &self,
        init: impl FnOnce() -> (C, T),
        f: impl FnOnce(&mut DpiModel<C, T>) -> R,
    ) -> R {
        let mut slot = self.slot.lock().unwrap_or_else(|poisoned| {
            error!("model lock poisoned by an earlier panic; reusing the model");
            self.slot.clear_poison();
            poisoned.into_inner()
        });
        let model = slot.get_or_insert_with(|| {
            let (core, memory) = init();
            DpiModel::new(core, memory)
        });
        f(model)
    }

    /// Reports whether the model has been built yet.
    pub fn is_initialised(&self) -> bool {
        self.slot
            .lock()
            .map_or_else(|poisoned| poisoned.get_ref().is_some(), |slot| slot.is_some())
    }
}
