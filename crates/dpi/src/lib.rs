//! SystemVerilog DPI entry points for the co-simulation bridge.
//!
//! The testbench imports two functions from the model library and exports two
//! functions back to it:
//!
//! ```systemverilog
//! import "DPI-C" function void ResetModel();
//! import "DPI-C" function void Tick(output cpu_state_t state);
//! export "DPI-C" function svMemoryRead;   // byte svMemoryRead(shortint address)
//! export "DPI-C" function svMemoryWrite;  // void svMemoryWrite(shortint address, byte value)
//! ```
//!
//! This crate provides:
//! 1. **Model holder:** `DpiModel`, a boxed `Bridge` wired to the simulator's memory.
//! 2. **Logging:** `tracing` subscriber setup for simulator transcripts.
//! 3. **Shim generator:** `export_dpi_model!`, which emits the C symbols for a concrete core.
//!
//! The core is chosen by the host crate, which is built as a `cdylib` and loaded
//! by the HDL simulator:
//!
//! ```ignore
//! m6502_cosim_dpi::export_dpi_model!(my_core::Nmos6502, my_core::Nmos6502::new());
//! ```

/// `tracing` subscriber initialisation.
pub mod logging;
/// Process-wide model holder used by the generated entry points.
pub mod model;

pub use m6502_cosim;
pub use m6502_cosim::CpuState;
pub use model::{DpiModel, ModelSlot};

/// Emits `ResetModel`, `Tick`, and the `svMemoryRead`/`svMemoryWrite` imports
/// for a concrete core type.
///
/// # Arguments
///
/// * `$core` - A type implementing `m6502_cosim::CpuCore`.
/// * `$init` - Expression constructing the core; evaluated once per process, on
///   the first entry-point call.
///
/// The model is created lazily and lives for the rest of the process. Calls
/// from different OS threads reach the same model, so `$core` must be `Send`;
/// they must still arrive one at a time. The snapshot buffer is boxed, so its
/// address never changes.
#[macro_export]
macro_rules! export_dpi_model {
    ($core:ty, $init:expr $(,)?) => {
        #[doc(hidden)]
        #[allow(non_snake_case)]
        mod __m6502_cosim_dpi {
            #[allow(unused_imports)]
            use super::*;

            use $crate::{DpiModel, ModelSlot};
            use $crate::m6502_cosim::{CpuState, TestbenchMemory};

            unsafe extern "C" {
                fn svMemoryRead(address: i16) -> i8;
                fn svMemoryWrite(address: i16, value: i8);
            }

            /// The simulator's memory, reached through its DPI exports.
            #[derive(Debug)]
            pub struct SvMemory;

            impl TestbenchMemory for SvMemory {
                fn read(&mut self, address: i16) -> i8 {
                    // SAFETY: the simulator exports svMemoryRead before any import is called.
                    unsafe { svMemoryRead(address) }
                }

                fn write(&mut self, address: i16, value: i8) {
                    // SAFETY: as above, for svMemoryWrite.
                    unsafe { svMemoryWrite(address, value) }
                }
            }

            static MODEL: ModelSlot<$core, SvMemory> = ModelSlot::new();

            fn with_model<R>(f: impl FnOnce(&mut DpiModel<$core, SvMemory>) -> R) -> R {
                MODEL.with(|| ($init, SvMemory), f)
            }

            /// Puts the model in its boot state.
            #[unsafe(no_mangle)]
            pub extern "C" fn ResetModel() {
                with_model(|model| model.reset());
            }

            /// Advances the model one cycle and writes the snapshot to `state`.
            ///
            /// # Safety
            ///
            /// `state` must be null or valid for a write of one `CpuState`.
            #[unsafe(no_mangle)]
            pub unsafe extern "C" fn Tick(state: *mut CpuState) {
                with_model(|model| unsafe { model.tick_into(state) });
            }
        }

        #[allow(unused_imports)]
        pub use self::__m6502_cosim_dpi::{ResetModel, Tick};
    };
}
