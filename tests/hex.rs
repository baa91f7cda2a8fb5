use sha512_hex::encoding::hex::{decode, decode_to_slice, encode, encode_to_slice};
use sha512_hex::HexError;

// -------------------------------------------------------
// 1. ENCODING
// -------------------------------------------------------

#[test]
fn encode_empty() {
    assert_eq!(encode(&[]), "");
}

#[test]
fn encode_is_lowercase_high_nibble_first() {
    assert_eq!(encode(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
    assert_eq!(encode(&[0x0f, 0xf0]), "0ff0");
}

#[test]
fn encode_every_byte_value() {
    let bytes: Vec<u8> = (0u8..=255).collect();
    let out = encode(&bytes);

    assert_eq!(out.len(), 512);
    for (i, b) in bytes.iter().enumerate() {
        assert_eq!(&out[2 * i..2 * i + 2], format!("{:02x}", b));
    }
}

#[test]
fn encode_to_slice_writes_exact_prefix() {
    let mut out = [b'.'; 6];
    encode_to_slice(&[0xab, 0x01], &mut out).unwrap();
    assert_eq!(&out, b"ab01..");
}

#[test]
fn encode_to_slice_rejects_short_buffer() {
    let mut out = [0u8; 3];
    assert_eq!(
        encode_to_slice(&[0xab, 0x01], &mut out),
        Err(HexError::BufferTooSmall {
            needed: 4,
            available: 3
        })
    );
}

// -------------------------------------------------------
// 2. DECODING
// -------------------------------------------------------

#[test]
fn decode_basic() {
    assert_eq!(decode("deadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
}

#[test]
fn decode_uppercase() {
    assert_eq!(decode("ABCDEF").unwrap(), vec![0xab, 0xcd, 0xef]);
}

#[test]
fn decode_empty() {
    assert_eq!(decode("").unwrap(), Vec::<u8>::new());
}

#[test]
fn decode_odd_length() {
    assert_eq!(decode("abc"), Err(HexError::OddLength { len: 3 }));
}

#[test]
fn decode_invalid_character() {
    assert_eq!(
        decode("00gg"),
        Err(HexError::InvalidCharacter {
            character: 'g',
            index: 2
        })
    );
}

#[test]
fn decode_rejects_prefix() {
    assert!(matches!(
        decode("0x00"),
        Err(HexError::InvalidCharacter { character: 'x', index: 1 })
    ));
}

#[test]
fn decode_to_slice_checks_length() {
    let mut out = [0u8; 4];
    assert_eq!(
        decode_to_slice("abcd", &mut out),
        Err(HexError::InvalidLength {
            expected: 4,
            actual: 2
        })
    );
}

#[test]
fn decode_reverses_encode() {
    let bytes: Vec<u8> = (0u8..=255).rev().collect();
    assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
}
