//! The 64-symbol URL-safe alphabet.
//!
//! Each symbol carries six bits: five payload bits plus the continuation flag
//! (see [`crate`] docs for the digit layout).

/// Symbols in value order: `A-Z`, `a-z`, `0-9`, `_`, `-`
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Marks bytes that are not part of the alphabet in `REVERSE`
const NOT_A_SYMBOL: u8 = 0xFF;

/// Byte -> value lookup, built at compile time
static REVERSE: [u8; 256] = build_reverse();

const fn build_reverse() -> [u8; 256] {
    let mut table = [NOT_A_SYMBOL; 256];
    let mut value = 0;
    while value < ALPHABET.len() {
        table[ALPHABET[value] as usize] = value as u8;
        value += 1;
    }
    table
}

/// Symbol for a 6-bit value. Bits above the low six are ignored.
#[inline]
#[must_use]
pub const fn symbol_for(value: u8) -> u8 {
    ALPHABET[(value & 0b11_1111) as usize]
}

/// Value of a symbol, or `None` if the byte is not in the alphabet
#[inline]
#[must_use]
pub fn value_for(byte: u8) -> Option<u8> {
    match REVERSE[usize::from(byte)] {
        NOT_A_SYMBOL => None,
        value => Some(value),
    }
}

/// Whether `byte` is one of the 64 symbols
#[inline]
#[must_use]
pub fn is_symbol(byte: u8) -> bool {
    value_for(byte).is_some()
}
