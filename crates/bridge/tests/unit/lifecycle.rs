//! # Lifecycle Tests
//!
//! Reset postconditions, tick/snapshot coherence, and memory traffic timing.

use crate::common::micro_core::{INX, JAM, LDA_IMM, NOP, SEC, STA_ABS};
use crate::common::harness::TestContext;
use crate::common::mocks::Access;
use m6502_cosim::config::{Config, GeneralConfig};
use m6502_cosim::core::{CpuCore, Line, StatusFlag};
use m6502_cosim::CpuState;
use pretty_assertions::assert_eq;
use std::io;
use std::sync::{Arc, Mutex, PoisonError};

/// Shared sink for a scoped `fmt` subscriber.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap_or_else(PoisonError::into_inner)).into_owned()
    }
}

/// LDA #$80; INX; SEC; STA $0200; NOP; JAM
const PROGRAM: [u8; 9] = [LDA_IMM, 0x80, INX, SEC, STA_ABS, 0x00, 0x02, NOP, JAM];

#[test]
fn test_reset_forces_boot_address_and_clears_halt_and_reset_line() {
    let mut tc = TestContext::new();
    assert!(tc.bridge.is_halted());
    assert!(tc.bridge.core().is_raised(Line::Reset));

    tc.bridge.reset();

    assert_eq!(tc.bridge.core().pc(), 0x0400);
    assert_eq!(tc.bridge.state().pc, 0x0400);
    assert!(!tc.bridge.is_halted());
    assert!(!tc.bridge.core().is_raised(Line::Reset));
    assert_eq!(tc.bridge.cycles(), 0);
}

#[test]
fn test_reset_touches_no_memory() {
    let mut tc = TestContext::new();
    tc.bridge.reset();
    assert!(tc.memory().log.is_empty());
}

#[test]
fn test_reset_is_idempotent() {
    let mut tc = TestContext::new().load_program(0x0400, &PROGRAM);
    tc.bridge.reset();
    let first = tc.bridge.capture();
    let first_core = tc.bridge.core().clone();

    tc.bridge.reset();

    assert_eq!(tc.bridge.capture(), first);
    assert_eq!(tc.bridge.core().pc, first_core.pc);
    assert_eq!(tc.bridge.core().halted, first_core.halted);
    assert_eq!(tc.bridge.core().lines, first_core.lines);
}

#[test]
fn test_reset_does_not_fetch_reset_vector() {
    let mut tc = TestContext::new().load_program(0xFFFC, &[0x00, 0x80]);
    tc.memory().memory.poke(0x0400, NOP);
    tc.bridge.reset();

    let state = tc.run(1);

    assert_eq!(state.pc, 0x0401);
    assert_eq!(tc.memory().log, vec![Access::Read(0x0400)]);
}

#[test]
fn test_unreset_core_would_fetch_vector() {
    // Contrast case: with the reset line still raised the core jumps through $FFFC.
    let mut tc = TestContext::new().load_program(0xFFFC, &[0x00, 0x80]);
    tc.bridge.core_mut().halted = false;

    let state = tc.run(2);

    assert_eq!(state.pc, 0x8000);
}

#[test]
fn test_reset_recovers_a_halted_core() {
    let mut tc = TestContext::new().load_program(0x0400, &[JAM]);
    tc.bridge.reset();
    let _ = tc.run(1);
    assert!(tc.bridge.is_halted());

    tc.bridge.reset();

    assert!(!tc.bridge.is_halted());
    assert_eq!(tc.bridge.state().pc, 0x0400);
}

#[test]
fn test_nop_advances_pc_and_leaves_status_alone() {
    let mut tc = TestContext::new().load_program(0x0400, &[NOP]);
    tc.bridge.reset();
    let before = *tc.bridge.state();
    assert_eq!(before.pc, 0x0400);

    let after = tc.run(1);

    assert_eq!(after.pc, 0x0401);
    assert_eq!(after.p, before.p);
    assert_eq!(after.a, before.a);
    assert_eq!(after.x, before.x);
    assert_eq!(after.y, before.y);
    assert_eq!(after.s, before.s);

    // Second cycle of the NOP: dummy read, PC stays.
    let after = tc.run(1);
    assert_eq!(after.pc, 0x0401);
    assert_eq!(
        tc.memory().log,
        vec![Access::Read(0x0400), Access::Read(0x0401)]
    );
}

#[test]
fn test_snapshot_tracks_core_every_tick() {
    let mut tc = TestContext::new().load_program(0x0400, &PROGRAM);
    tc.bridge.reset();

    let mut out = CpuState::default();
    for _ in 0..16 {
        tc.bridge.tick(&mut out);
        let core = tc.bridge.core();
        assert_eq!(out.pc, core.pc());
        assert_eq!(out.a, core.registers().a);
        assert_eq!(out.x, core.registers().x);
        assert_eq!(out.y, core.registers().y);
        assert_eq!(out.s, core.registers().s);
        for flag in StatusFlag::ALL {
            assert_eq!(flag.is_set_in(out.p), core.flags()[flag.index()]);
        }
        assert_eq!(&out, tc.bridge.state());
    }
}

#[test]
fn test_program_effects_are_visible_at_the_right_cycle() {
    let mut tc = TestContext::new().load_program(0x0400, &PROGRAM);
    tc.bridge.reset();

    let state = tc.run(2);
    assert_eq!(state.a, 0x80);
    assert!(StatusFlag::Negative.is_set_in(state.p));

    let state = tc.run(2);
    assert_eq!(state.x, 0x01);
    assert!(!StatusFlag::Negative.is_set_in(state.p));

    let state = tc.run(2);
    assert!(StatusFlag::Carry.is_set_in(state.p));

    // STA abs: three cycles of fetch, store lands on the fourth.
    let _ = tc.run(3);
    assert_eq!(tc.peek(0x0200), 0x00);
    let state = tc.run(1);
    assert_eq!(tc.peek(0x0200), 0x80);
    assert_eq!(state.pc, 0x0407);
    assert_eq!(tc.memory().log.last(), Some(&Access::Write(0x0200, 0x80)));
}

#[test]
fn test_halted_core_stops_advancing() {
    let mut tc = TestContext::new().load_program(0x0400, &PROGRAM);
    tc.bridge.reset();

    let _ = tc.run(13);
    assert!(tc.bridge.is_halted());
    let halted_at = *tc.bridge.state();
    let accesses = tc.memory().log.len();

    let state = tc.run(5);

    assert_eq!(state, halted_at);
    assert_eq!(tc.memory().log.len(), accesses);
}

#[test]
fn test_tick_and_step_agree() {
    let mut a = TestContext::new().load_program(0x0400, &PROGRAM);
    let mut b = TestContext::new().load_program(0x0400, &PROGRAM);
    a.bridge.reset();
    b.bridge.reset();

    for _ in 0..10 {
        let mut out = CpuState::default();
        a.bridge.tick(&mut out);
        assert_eq!(&out, b.bridge.step());
    }
}

#[test]
fn test_state_buffer_address_is_stable() {
    let mut tc = TestContext::new().load_program(0x0400, &PROGRAM);
    tc.bridge.reset();
    let before: *const CpuState = tc.bridge.state();

    let _ = tc.run(4);

    assert!(std::ptr::eq(before, tc.bridge.state()));
}

#[test]
fn test_cycle_counter_counts_ticks_and_resets() {
    let mut tc = TestContext::new().load_program(0x0400, &PROGRAM);
    tc.bridge.reset();
    let _ = tc.run(7);
    assert_eq!(tc.bridge.cycles(), 7);

    tc.bridge.reset();
    assert_eq!(tc.bridge.cycles(), 0);
}

#[test]
fn test_configured_boot_address() {
    let config = Config {
        general: GeneralConfig {
            boot_address: 0xC000,
            trace_ticks: true,
        },
        ..Config::default()
    };
    let mut tc = TestContext::with_config(&config).load_program(0xC000, &[NOP]);
    tc.bridge.reset();
    assert_eq!(tc.bridge.boot_address(), 0xC000);
    assert_eq!(tc.bridge.state().pc, 0xC000);

    let state = tc.run(1);
    assert_eq!(state.pc, 0xC001);
}

#[test]
fn test_into_parts_returns_core_and_bus() {
    let mut tc = TestContext::new().load_program(0x0400, &[NOP]);
    tc.bridge.reset();
    let _ = tc.run(1);

    let (core, bus) = tc.bridge.into_parts();

    assert_eq!(core.pc, 0x0401);
    assert_eq!(bus.inner().log, vec![Access::Read(0x0400)]);
}

#[test]
fn test_reset_logs_boot_address_as_number_and_hex() {
    let logs = LogBuffer::default();
    let sink = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || sink.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let mut tc = TestContext::with_config(&Config {
        general: GeneralConfig {
            boot_address: 0xC000,
            ..GeneralConfig::default()
        },
        ..Config::default()
    });

    tracing::subscriber::with_default(subscriber, || tc.bridge.reset());

    let text = logs.contents();
    assert!(text.contains("model reset to $C000"), "{text}");
    assert!(text.contains("boot_address=49152"), "{text}");
}
