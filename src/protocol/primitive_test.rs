use crate::error::Error;
use crate::protocol::primitive::*;

fn encode(value: u64) -> Vec<u8> {
    let mut out = Vec::new();
    write_leb128(&mut out, value);
    out
}

#[test]
fn leb128_zero_is_single_byte() {
    assert_eq!(encode(0), vec![0x00]);
    assert_eq!(read_leb128(&[0x00]).unwrap(), (0, &[][..]));
}

#[test]
fn leb128_known_encodings() {
    assert_eq!(encode(1), vec![0x01]);
    assert_eq!(encode(127), vec![0x7F]);
    assert_eq!(encode(128), vec![0x80, 0x01]);
    assert_eq!(encode(300), vec![0xAC, 0x02]);
    assert_eq!(encode(16_384), vec![0x80, 0x80, 0x01]);
    assert_eq!(
        encode(u64::MAX),
        vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]
    );
}

#[test]
fn leb128_round_trip() {
    let mut samples = vec![0, 1, 127, 128, 255, 256, 16_383, 16_384, u64::MAX];
    // every power of two and its neighbours, covering each group boundary
    for shift in 0..64 {
        let v = 1_u64 << shift;
        samples.extend([v - 1, v, v | 1]);
    }

    for v in samples {
        let encoded = encode(v);
        assert_eq!(encoded.len(), leb128_len(v), "length of {v}");
        let (decoded, rest) = read_leb128(&encoded).unwrap();
        assert_eq!(decoded, v);
        assert!(rest.is_empty());
    }
}

#[test]
fn leb128_leaves_trailing_bytes() {
    let data = [0xAC, 0x02, 0xDE, 0xAD];
    let (value, rest) = read_leb128(&data).unwrap();
    assert_eq!(value, 300);
    assert_eq!(rest, &[0xDE, 0xAD]);
}

#[test]
fn leb128_missing_terminator() {
    assert!(matches!(
        read_leb128(&[0x80, 0x80]),
        Err(Error::MalformedVarint)
    ));
    assert!(matches!(read_leb128(&[0xFF]), Err(Error::MalformedVarint)));
}

#[test]
fn leb128_empty_is_truncated() {
    assert!(matches!(
        read_leb128(&[]),
        Err(Error::TruncatedBuffer {
            needed: 1,
            available: 0
        })
    ));
}

#[test]
fn leb128_wider_than_64_bits() {
    // 10th group carries more than bit 63
    let data = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x02];
    assert!(matches!(read_leb128(&data), Err(Error::MalformedVarint)));

    // 11 groups
    let data = [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x81, 0x00];
    assert!(matches!(read_leb128(&data), Err(Error::MalformedVarint)));
}

#[test]
fn leb128_str_round_trip() {
    let mut out = Vec::new();
    write_leb128_str(&mut out, "héllo");
    assert_eq!(out[0], 6);
    let (s, rest) = read_leb128_str(&out).unwrap();
    assert_eq!(s, "héllo");
    assert!(rest.is_empty());
}

#[test]
fn leb128_str_truncated() {
    let data = [0x04, b'a', b'b'];
    assert!(matches!(
        read_leb128_str(&data),
        Err(Error::TruncatedBuffer {
            needed: 4,
            available: 2
        })
    ));
}

#[test]
fn leb128_str_invalid_utf8() {
    let data = [0x01, 0xFF];
    assert!(matches!(read_leb128_str(&data), Err(Error::EncodingError)));

    // the raw-bytes variant accepts it
    let (bytes, _) = read_leb128_bytes(&data).unwrap();
    assert_eq!(bytes, &[0xFF]);
}

#[test]
fn fixed_width_integers() {
    let mut out = Vec::new();
    write_int_1(&mut out, 0xAB);
    write_int_2(&mut out, 0x1234);
    write_int_4(&mut out, 0xDEAD_BEEF);
    write_int_8(&mut out, 0x0102_0304_0506_0708);
    assert_eq!(out.len(), 15);

    let (a, rest) = read_int_1(&out).unwrap();
    let (b, rest) = read_int_2(rest).unwrap();
    let (c, rest) = read_int_4(rest).unwrap();
    let (d, rest) = read_int_8(rest).unwrap();
    assert_eq!((a, b, c, d), (0xAB, 0x1234, 0xDEAD_BEEF, 0x0102_0304_0506_0708));
    assert!(rest.is_empty());
}

#[test]
fn fixed_width_truncated() {
    assert!(matches!(
        read_int_4(&[1, 2, 3]),
        Err(Error::TruncatedBuffer {
            needed: 4,
            available: 3
        })
    ));
    assert!(matches!(
        read_string_fix(&[1, 2], 3),
        Err(Error::TruncatedBuffer { .. })
    ));
}
