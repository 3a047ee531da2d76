//! 6502 processor status (P) flags.
//!
//! The core reports its flags as an eight-entry boolean vector. The index of each
//! flag in that vector is its bit position in the P register, so packing is a
//! straight positional copy.

use crate::common::constants::FLAG_COUNT;

/// A status flag, numbered by its bit position in P.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StatusFlag {
    /// C: carry/borrow out of the last arithmetic or shift.
    Carry = 0,
    /// Z: last result was zero.
    Zero = 1,
    /// I: maskable interrupts are ignored.
    InterruptDisable = 2,
    /// D: ADC/SBC operate in BCD.
    Decimal = 3,
    /// B: only meaningful in a pushed copy of P.
    Break = 4,
    /// Unused bit; reads as 1 on NMOS parts.
    Unused = 5,
    /// V: signed overflow.
    Overflow = 6,
    /// N: bit 7 of the last result.
    Negative = 7,
}

impl StatusFlag {
    /// All flags in bit order (index 0 first).
    pub const ALL: [Self; FLAG_COUNT] = [
        Self::Carry,
        Self::Zero,
        Self::InterruptDisable,
        Self::Decimal,
        Self::Break,
        Self::Unused,
        Self::Overflow,
        Self::Negative,
    ];

    /// Returns the flag's index in the flag vector (and bit position in P).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the single-bit mask for this flag in P.
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }

    /// Returns `true` if this flag's bit is set in `status`.
    #[inline]
    pub const fn is_set_in(self, status: u8) -> bool {
        status & self.mask() != 0
    }

    /// Returns the conventional one-letter mnemonic (`-` for the unused bit).
    pub const fn letter(self) -> char {
        match self {
            Self::Carry => 'C',
            Self::Zero => 'Z',
            Self::InterruptDisable => 'I',
            Self::Decimal => 'D',
            Self::Break => 'B',
            Self::Unused => '-',
            Self::Overflow => 'V',
            Self::Negative => 'N',
        }
    }
}

/// Packs the core's flag vector into a P byte.
///
/// Bit `i` of the result is set if and only if `flags[i]` is set.
///
/// # Arguments
///
/// * `flags` - The flag vector, indexed per `StatusFlag`.
///
/// # Returns
///
/// The packed status byte.
pub fn compress_status(flags: &[bool; FLAG_COUNT]) -> u8 {
    flags
        .iter()
        .enumerate()
        .fold(0u8, |status, (i, &set)| status | (u8::from(set) << i))
}

/// Renders a P byte as `NV-BDIZC`, uppercase for set flags and lowercase for clear.
///
/// The unused bit is always shown as `-`.
pub fn render_status(status: u8) -> String {
    StatusFlag::ALL
        .iter()
        .rev()
        .map(|&flag| {
            let letter = flag.letter();
            if flag.is_set_in(status) {
                letter
            } else {
                letter.to_ascii_lowercase()
            }
        })
        .collect()
}
