//! The Bitcoin base58 alphabet and its reverse lookup table.

/// Base58 symbols in digit order. Excludes `0`, `O`, `I` and `l`.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Numeric base of the encoding.
pub const BASE: usize = ALPHABET.len();

/// Symbol standing in for each leading zero byte.
pub const LEADER: char = ALPHABET[0] as char;

const INVALID: u8 = 0xff;

const DIGITS: [u8; 256] = build_digits();

const fn build_digits() -> [u8; 256] {
    let mut map = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
}

/// Value of a base58 symbol, or `None` for any byte outside the alphabet.
#[inline]
pub fn digit(byte: u8) -> Option<u8> {
    match DIGITS[byte as usize] {
        INVALID => None,
        d => Some(d),
    }
}

/// Symbol for a digit in `0..58`.
#[inline]
pub fn symbol(digit: u8) -> char {
    ALPHABET[digit as usize] as char
}
