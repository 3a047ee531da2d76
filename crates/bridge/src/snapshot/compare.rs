//! Snapshot cross-checking.
//!
//! Lines a model snapshot up against a reference snapshot (normally the RTL's
//! registers sampled on the same cycle) and reports every field that differs.

use std::fmt;

use crate::core::render_status;

use super::CpuState;

/// A field of `CpuState`, in layout order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Program counter.
    Pc,
    /// Accumulator.
    A,
    /// X index register.
    X,
    /// Y index register.
    Y,
    /// Stack pointer.
    S,
    /// Packed status flags.
    P,
}

impl Field {
    /// All fields in layout order.
    pub const ALL: [Self; 6] = [Self::Pc, Self::A, Self::X, Self::Y, Self::S, Self::P];

    /// Returns the field's value in `state`, widened to 16 bits.
    pub const fn get(self, state: &CpuState) -> u16 {
        match self {
            Self::Pc => state.pc,
            Self::A => state.a as u16,
            Self::X => state.x as u16,
            Self::Y => state.y as u16,
            Self::S => state.s as u16,
            Self::P => state.p as u16,
        }
    }

    /// Returns the register name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pc => "PC",
            Self::A => "A",
            Self::X => "X",
            Self::Y => "Y",
            Self::S => "S",
            Self::P => "P",
        }
    }
}

/// One field that differs between model and reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// Which field.
    pub field: Field,
    /// Value in the model snapshot.
    pub model: u16,
    /// Value in the reference snapshot.
    pub reference: u16,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Field::Pc => write!(
                f,
                "PC: model ${:04X}, reference ${:04X}",
                self.model, self.reference
            ),
            Field::P => write!(
                f,
                "P: model {}, reference {}",
                render_status(self.model as u8),
                render_status(self.reference as u8)
            ),
            field => write!(
                f,
                "{}: model ${:02X}, reference ${:02X}",
                field.name(),
                self.model,
                self.reference
            ),
        }
    }
}

/// Lists the fields that differ between `model` and `reference`, in layout order.
///
/// An empty result means the snapshots are identical.
pub fn compare(model: &CpuState, reference: &CpuState) -> Vec<Mismatch> {
    Field::ALL
        .iter()
        .filter_map(|&field| {
            let (m, r) = (field.get(model), field.get(reference));
            (m != r).then_some(Mismatch {
                field,
                model: m,
                reference: r,
            })
        })
        .collect()
}
