//! Plain base58 conversion between base-256 bytes and base-58 text.
//!
//! Both directions run schoolbook long multiplication over a scratch buffer
//! sized up front from the ratio of the two bases' logarithms. Leading zero
//! bytes and leading `1` symbols are carried across one for one.

use log::trace;

use crate::alphabet::{self, BASE, LEADER};
use crate::error::{Error, Result};

/// log(256) / log(58): base58 digits needed per input byte.
const DIGITS_PER_BYTE: f64 = 1.365_658_237_309_761;
/// log(58) / log(256): bytes needed per base58 digit.
const BYTES_PER_DIGIT: f64 = 0.732_247_624_390_947_3;

fn scratch_size(len: usize, ratio: f64) -> usize {
    (len as f64 * ratio).ceil() as usize + 1
}

/// Multiply the big-endian number held in the tail of `scratch` by `from`
/// and add `carry`, writing digits in base `to`. Returns the new populated
/// length.
///
/// Panics if the carry outlives the buffer, which means `scratch_size`
/// under-allocated.
fn mul_add(scratch: &mut [u8], length: usize, mut carry: u32, from: u32, to: u32) -> usize {
    let mut i = 0usize;
    for d in scratch.iter_mut().rev() {
        if carry == 0 && i >= length {
            break;
        }
        carry += *d as u32 * from;
        *d = (carry % to) as u8;
        carry /= to;
        i += 1;
    }
    assert!(carry == 0, "non-zero carry: base conversion buffer too small");
    i
}

/// Encode bytes as a base58 string without a checksum.
pub fn encode_plain(source: &[u8]) -> String {
    if source.is_empty() {
        return String::new();
    }
    let zeroes = source.iter().take_while(|b| **b == 0).count();
    let size = scratch_size(source.len() - zeroes, DIGITS_PER_BYTE);
    let mut b58 = vec![0u8; size];
    let mut length = 0usize;

    for byte in &source[zeroes..] {
        length = mul_add(&mut b58, length, *byte as u32, 256, BASE as u32);
    }
    trace!("encoded {} bytes into {} base58 digits", source.len(), zeroes + length);

    let digits = b58[size - length..].iter().skip_while(|d| **d == 0);
    let mut result = String::with_capacity(zeroes + length);
    result.extend(std::iter::repeat(LEADER).take(zeroes));
    result.extend(digits.map(|d| alphabet::symbol(*d)));
    result
}

/// Decode a base58 string. Returns `None` if any character is outside the
/// alphabet, including spaces at either end.
pub fn decode_plain_unsafe(source: &str) -> Option<Vec<u8>> {
    if source.is_empty() {
        return Some(Vec::new());
    }
    let bytes = source.as_bytes();
    let zeroes = bytes.iter().take_while(|&&c| c == LEADER as u8).count();
    let size = scratch_size(bytes.len() - zeroes, BYTES_PER_DIGIT);
    let mut b256 = vec![0u8; size];
    let mut length = 0usize;

    for &ch in &bytes[zeroes..] {
        let value = alphabet::digit(ch)?;
        length = mul_add(&mut b256, length, value as u32, BASE as u32, 256);
    }
    trace!("decoded {} base58 digits into {} bytes", bytes.len(), zeroes + length);

    let mut result = Vec::with_capacity(zeroes + length);
    result.resize(zeroes, 0u8);
    result.extend(b256[size - length..].iter().skip_while(|b| **b == 0));
    Some(result)
}

/// Decode a base58 string, failing with [`Error::NonBase58Character`] on any
/// symbol outside the alphabet.
pub fn decode_plain(source: &str) -> Result<Vec<u8>> {
    decode_plain_unsafe(source).ok_or(Error::NonBase58Character)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_hello_world() {
        let encoded = encode_plain(b"hello world");
        assert_eq!(encoded, "StV1DL6CwTryKyV");
        assert_eq!(decode_plain(&encoded).unwrap(), b"hello world");
    }

    #[test]
    fn empty_input() {
        assert_eq!(encode_plain(&[]), "");
        assert_eq!(decode_plain_unsafe(""), Some(Vec::new()));
    }

    #[test]
    fn zero_bytes_become_leaders() {
        assert_eq!(encode_plain(&[0]), "1");
        assert_eq!(encode_plain(&[0, 0, 0, 0]), "1111");
        assert_eq!(decode_plain("1111").unwrap(), vec![0u8; 4]);
    }

    #[test]
    fn leading_zeros_with_value() {
        let input = hex::decode("000000287FB4CD").unwrap();
        assert_eq!(encode_plain(&input), "111233QC4");
        assert_eq!(decode_plain("111233QC4").unwrap(), input);
    }

    #[test]
    fn decoded_address() {
        let input = hex::decode("00010966776006953D5567439E5E39F86A0D273BEED61967F6").unwrap();
        assert_eq!(encode_plain(&input), "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM");
        assert_eq!(decode_plain("16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM").unwrap(), input);
    }

    #[test]
    fn all_ones_bytes() {
        assert_eq!(encode_plain(&[0xff; 4]), "7YXq9G");
        assert_eq!(encode_plain(&hex::decode("0123456789ABCDEF").unwrap()), "C3CPq7c8PY");
    }

    #[test]
    fn rejects_out_of_alphabet() {
        assert_eq!(decode_plain_unsafe("invalid!@#$%"), None);
        assert_eq!(decode_plain_unsafe("1234!@#$%"), None);
        assert_eq!(decode_plain_unsafe("0OIl"), None);
        assert_eq!(decode_plain_unsafe("StV1DL6CwTryKyVé"), None);
        assert_eq!(decode_plain("StV1DL6Cw0ryKyV"), Err(Error::NonBase58Character));
    }

    #[test]
    fn rejects_surrounding_spaces() {
        assert_eq!(decode_plain_unsafe(" StV1DL6CwTryKyV"), None);
        assert_eq!(decode_plain_unsafe("StV1DL6CwTryKyV "), None);
        assert_eq!(decode_plain_unsafe(" "), None);
    }

    #[test]
    fn leader_only_string_decodes_to_zeroes() {
        assert_eq!(decode_plain_unsafe("111"), Some(vec![0, 0, 0]));
    }

    #[test]
    fn scratch_is_never_undersized() {
        // Worst case input for each direction: every digit at its maximum.
        for n in 1..300 {
            let bytes = vec![0xffu8; n];
            let encoded = encode_plain(&bytes);
            assert_eq!(decode_plain(&encoded).unwrap(), bytes);
            let text = "z".repeat(n);
            let decoded = decode_plain(&text).unwrap();
            assert_eq!(encode_plain(&decoded), text);
        }
    }

    #[test]
    #[should_panic(expected = "non-zero carry")]
    fn undersized_scratch_panics() {
        let mut scratch = [0u8; 1];
        mul_add(&mut scratch, 0, 255, 256, 58);
    }
}
