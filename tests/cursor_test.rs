use nbt_codec::{Cursor, NbtError};

#[test]
fn test_peek_does_not_advance() {
    let mut cursor = Cursor::from_slice(&[1, 2, 3]);
    assert_eq!(cursor.peek().unwrap(), 1);
    assert_eq!(cursor.peek().unwrap(), 1);
    assert_eq!(cursor.get().unwrap(), 1);
    assert_eq!(cursor.peek().unwrap(), 2);
}

#[test]
fn test_get_advances_to_end_of_buffer() {
    let mut cursor = Cursor::from_slice(&[7]);
    assert_eq!(cursor.get().unwrap(), 7);
    assert!(matches!(cursor.get(), Err(NbtError::EndOfBuffer)));
    assert!(matches!(cursor.peek(), Err(NbtError::EndOfBuffer)));
}

#[test]
fn test_seek_restores_position() {
    let mut cursor = Cursor::from_slice(&[10, 20, 30, 40]);
    cursor.get().unwrap();
    let mark = cursor.cur();
    cursor.get().unwrap();
    cursor.get().unwrap();
    cursor.seek(mark);
    assert_eq!(cursor.get().unwrap(), 20);
}

#[test]
fn test_rewind() {
    let mut cursor = Cursor::from_slice(&[5, 6]);
    cursor.get().unwrap();
    cursor.get().unwrap();
    cursor.rewind();
    assert_eq!(cursor.get().unwrap(), 5);
}

#[test]
fn test_big_endian_integers() {
    let mut cursor = Cursor::new();
    cursor.put_i16(0x0102);
    cursor.put_i32(0x01020304);
    cursor.put_i64(0x0102030405060708);
    assert_eq!(
        cursor.as_slice(),
        &[1, 2, 1, 2, 3, 4, 1, 2, 3, 4, 5, 6, 7, 8]
    );

    assert_eq!(cursor.get_i16().unwrap(), 0x0102);
    assert_eq!(cursor.get_i32().unwrap(), 0x01020304);
    assert_eq!(cursor.get_i64().unwrap(), 0x0102030405060708);
}

#[test]
fn test_big_endian_floats() {
    let mut cursor = Cursor::new();
    cursor.put_f32(1.0);
    assert_eq!(cursor.as_slice(), &[0x3f, 0x80, 0x00, 0x00]);
    assert_eq!(cursor.get_f32().unwrap(), 1.0);

    let mut cursor = Cursor::new();
    cursor.put_f64(-2.5);
    assert_eq!(cursor.get_f64().unwrap(), -2.5);
}

#[test]
fn test_typed_read_past_end() {
    let mut cursor = Cursor::from_slice(&[0, 0, 1]);
    assert!(matches!(cursor.get_i32(), Err(NbtError::EndOfBuffer)));
    // A failed typed read must not have consumed the partial bytes' worth of
    // anything usable; the position is wherever the check left it.
    assert_eq!(cursor.remaining(), 3);
}

#[test]
fn test_string_round_trip() {
    let mut cursor = Cursor::new();
    cursor.put_string("scores").unwrap();
    assert_eq!(
        cursor.as_slice(),
        &[0, 6, b's', b'c', b'o', b'r', b'e', b's']
    );
    assert_eq!(cursor.get_string().unwrap(), "scores");
}

#[test]
fn test_empty_string() {
    let mut cursor = Cursor::new();
    cursor.put_string("").unwrap();
    assert_eq!(cursor.as_slice(), &[0, 0]);
    assert_eq!(cursor.get_string().unwrap(), "");
}

#[test]
fn test_string_too_long_for_prefix() {
    let mut cursor = Cursor::new();
    let oversized = "a".repeat(u16::MAX as usize + 1);
    assert!(matches!(
        cursor.put_string(&oversized),
        Err(NbtError::StringTooLong(_))
    ));
}

#[test]
fn test_invalid_utf8_string() {
    let mut cursor = Cursor::from_slice(&[0, 2, 0xff, 0xfe]);
    assert!(matches!(
        cursor.get_string(),
        Err(NbtError::InvalidString(_))
    ));
}

#[test]
fn test_string_length_past_end() {
    let mut cursor = Cursor::from_slice(&[0, 10, b'a', b'b']);
    assert!(matches!(cursor.get_string(), Err(NbtError::EndOfBuffer)));
}

#[test]
fn test_into_bytes_round_trip() {
    let mut cursor = Cursor::new();
    cursor.put_u8(9);
    cursor.put_i32(-1);
    let bytes = cursor.into_bytes();
    assert_eq!(&bytes[..], &[9, 0xff, 0xff, 0xff, 0xff]);

    let mut cursor = Cursor::from_slice(&bytes);
    assert_eq!(cursor.get().unwrap(), 9);
    assert_eq!(cursor.get_i32().unwrap(), -1);
    assert_eq!(cursor.remaining(), 0);
}
