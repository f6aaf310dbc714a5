//! Short-form (base-57) codec.
//!
//! The 16 ID bytes are read as a big-endian `u128` and written out in base
//! 57, most significant digit first, without padding. The alphabet leaves
//! out glyphs that are easily confused (`0`, `1`, `I`, `O`, `l`).
//!
//! The alphabet must never change: every short ID ever handed out depends
//! on it.

use crate::{Id, IdError};

/// The fixed 57-character alphabet, in digit order.
pub const ALPHABET: &str = "23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Length of the longest short form `encode` produces. `57^22 > 2^128 > 57^21`.
pub const MAX_LEN: usize = 22;

const DIGITS: &[u8] = ALPHABET.as_bytes();
const BASE: u128 = DIGITS.len() as u128;
const INVALID: u8 = u8::MAX;

const _: () = assert!(DIGITS.len() == 57);

/// ASCII byte -> digit value, `INVALID` for bytes outside the alphabet.
const LOOKUP: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < DIGITS.len() {
        table[DIGITS[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Encodes an ID as its short form.
///
/// The zero ID encodes to `"2"`, the alphabet's zero digit.
#[must_use]
pub fn encode(id: &Id) -> String {
    let mut n = id.to_u128();
    let mut buf = [0u8; MAX_LEN];
    let mut start = MAX_LEN;

    loop {
        start -= 1;
        buf[start] = DIGITS[(n % BASE) as usize];
        n /= BASE;
        if n == 0 {
            break;
        }
    }

    buf[start..].iter().copied().map(char::from).collect()
}

/// Decodes a short-form string into an ID.
///
/// Leading zero digits (`2`) are accepted in any number, so fixed-width
/// encodings of the same value decode to the same ID. Only the magnitude is
/// bounded.
pub fn decode(s: &str) -> Result<Id, IdError> {
    if s.is_empty() {
        return Err(IdError::Empty);
    }

    let mut n: u128 = 0;
    for (position, character) in s.char_indices() {
        let digit =
            digit_value(character).ok_or(IdError::InvalidCharacter { character, position })?;
        n = n
            .checked_mul(BASE)
            .and_then(|n| n.checked_add(u128::from(digit)))
            .ok_or(IdError::Overflow)?;
    }

    Ok(Id::from_u128(n))
}

/// Decodes a short-form string, panicking if it is invalid.
///
/// Only for input known to be valid, such as IDs written as literals in
/// source code. Use [`decode`] for anything that comes from outside.
///
/// # Panics
///
/// Panics if `s` is not a valid short-form ID.
#[must_use]
#[track_caller]
pub fn must_decode(s: &str) -> Id {
    match decode(s) {
        Ok(id) => id,
        Err(err) => panic!("invalid short ID {s:?}: {err}"),
    }
}

fn digit_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match LOOKUP[c as usize] {
        INVALID => None,
        digit => Some(digit),
    }
}
