use nbt_codec::{Cursor, Decoded, ListTag, NbtError, TypelessList};

/// kind=LIST, name="scores", element type=INT, count=3, then 1 2 3.
const SCORES: &[u8] = &[
    9, 0, 6, b's', b'c', b'o', b'r', b'e', b's', 3, 0, 0, 0, 3, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3,
];

#[test]
fn test_encode_scores_literal() {
    let scores = ListTag::new("scores", vec![1i32, 2, 3]);
    let mut cursor = Cursor::new();
    scores.write(&mut cursor).unwrap();
    assert_eq!(cursor.as_slice(), SCORES);
}

#[test]
fn test_decode_scores() {
    let mut cursor = Cursor::from_slice(SCORES);
    let decoded = ListTag::<i32>::read(&mut cursor).unwrap();
    assert_eq!(decoded, Decoded::Matched(ListTag::new("scores", vec![1, 2, 3])));
    // The cursor is left just past the last element.
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn test_wrong_element_type_is_not_matched() {
    let mut cursor = Cursor::from_slice(SCORES);
    let before = cursor.cur();
    let decoded = ListTag::<f32>::read(&mut cursor).unwrap();
    assert_eq!(decoded, Decoded::NotMatched);
    assert_eq!(cursor.cur(), before);

    // The same bytes still decode as a list of ints afterwards.
    let decoded = ListTag::<i32>::read(&mut cursor).unwrap();
    assert!(decoded.is_matched());
}

#[test]
fn test_wrong_kind_consumes_nothing() {
    // An INT named tag, not a list.
    let bytes = [3u8, 0, 1, b'x', 0, 0, 0, 7];
    let mut cursor = Cursor::from_slice(&bytes);
    let before = cursor.cur();
    assert_eq!(ListTag::<i32>::read(&mut cursor).unwrap(), Decoded::NotMatched);
    assert_eq!(cursor.cur(), before);
}

#[test]
fn test_kind_byte_is_stable_across_element_types() {
    let mut a = Cursor::new();
    ListTag::new("a", vec![1i8]).write(&mut a).unwrap();
    let mut b = Cursor::new();
    ListTag::new("a", vec![String::from("x")]).write(&mut b).unwrap();
    assert_eq!(a.as_slice()[0], 9);
    assert_eq!(b.as_slice()[0], 9);
}

#[test]
fn test_nested_list_layout() {
    // [[1], [2, 3]]: the element-type byte and count appear once per nesting
    // level, and the inner lists carry no name fields.
    let nested = ListTag::new(
        "nested",
        vec![
            ListTag::nameless(vec![1i32]),
            ListTag::nameless(vec![2i32, 3]),
        ],
    );
    let mut cursor = Cursor::new();
    nested.write(&mut cursor).unwrap();
    assert_eq!(
        cursor.as_slice(),
        &[
            9, 0, 6, b'n', b'e', b's', b't', b'e', b'd', // outer header
            9, 0, 0, 0, 2, // outer element type LIST, two elements
            3, 0, 0, 0, 1, 0, 0, 0, 1, // [1]
            3, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 3, // [2, 3]
        ]
    );

    cursor.rewind();
    let decoded = ListTag::<ListTag<i32>>::read(&mut cursor).unwrap();
    assert_eq!(decoded, Decoded::Matched(nested));
}

#[test]
fn test_nested_list_inner_mismatch_rolls_back() {
    let nested = ListTag::new("n", vec![ListTag::nameless(vec![1i32])]);
    let mut cursor = Cursor::new();
    nested.write(&mut cursor).unwrap();
    cursor.rewind();

    // The outer element type (LIST) matches, so the mismatch is only visible
    // one level down; the rollback must still restore the outer position.
    let before = cursor.cur();
    let decoded = ListTag::<ListTag<f32>>::read(&mut cursor).unwrap();
    assert_eq!(decoded, Decoded::NotMatched);
    assert_eq!(cursor.cur(), before);
}

#[test]
fn test_empty_list_keeps_declared_element_type() {
    let empty = ListTag::<i32>::new("", vec![]);
    let mut cursor = Cursor::new();
    empty.write(&mut cursor).unwrap();
    assert_eq!(cursor.as_slice(), &[9, 0, 0, 3, 0, 0, 0, 0]);

    cursor.rewind();
    assert_eq!(ListTag::<i32>::read(&mut cursor).unwrap(), Decoded::Matched(empty));
}

#[test]
fn test_typeless_list_canonical_form() {
    let typeless = TypelessList::new("");
    let mut cursor = Cursor::new();
    typeless.write(&mut cursor).unwrap();
    // kind, empty name, END element type, zero count.
    assert_eq!(cursor.as_slice(), &[9, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn test_typeless_list_round_trip_is_byte_identical() {
    let typeless = TypelessList::new("todo");
    let mut first = Cursor::new();
    typeless.write(&mut first).unwrap();

    let mut cursor = Cursor::from_slice(first.as_slice());
    let decoded = TypelessList::read(&mut cursor).unwrap().matched().unwrap();
    assert_eq!(decoded, typeless);

    let mut second = Cursor::new();
    decoded.write(&mut second).unwrap();
    assert_eq!(first.as_slice(), second.as_slice());
}

#[test]
fn test_typeless_does_not_match_typed_list_bytes() {
    let mut cursor = Cursor::from_slice(SCORES);
    let before = cursor.cur();
    assert_eq!(TypelessList::read(&mut cursor).unwrap(), Decoded::NotMatched);
    assert_eq!(cursor.cur(), before);
}

#[test]
fn test_typed_does_not_match_typeless_bytes() {
    let bytes = [9u8, 0, 0, 0, 0, 0, 0, 0];
    let mut cursor = Cursor::from_slice(&bytes);
    let before = cursor.cur();
    assert_eq!(ListTag::<i32>::read(&mut cursor).unwrap(), Decoded::NotMatched);
    assert_eq!(cursor.cur(), before);
}

#[test]
fn test_negative_count_reads_as_empty() {
    let bytes = [9u8, 0, 0, 3, 0xff, 0xff, 0xff, 0xff];
    let mut cursor = Cursor::from_slice(&bytes);
    let decoded = ListTag::<i32>::read(&mut cursor).unwrap().matched().unwrap();
    assert!(decoded.is_empty());
}

#[test]
fn test_negative_count_typeless_clamps_to_zero() {
    let bytes = [9u8, 0, 0, 0, 0xff, 0xff, 0xff, 0xff];
    let mut cursor = Cursor::from_slice(&bytes);
    let decoded = TypelessList::read(&mut cursor).unwrap().matched().unwrap();
    assert_eq!(decoded.length, 0);
}

#[test]
fn test_absurd_count_is_malformed_length() {
    // Declares i32::MAX elements with an empty remainder.
    let bytes = [9u8, 0, 0, 3, 0x7f, 0xff, 0xff, 0xff];
    let mut cursor = Cursor::from_slice(&bytes);
    assert!(matches!(
        ListTag::<i32>::read(&mut cursor),
        Err(NbtError::MalformedLength { .. })
    ));
}

#[test]
fn test_truncated_elements_are_end_of_buffer() {
    // Count says three ints, payload holds one.
    let bytes = [9u8, 0, 0, 3, 0, 0, 0, 3, 0, 0, 0, 1];
    let mut cursor = Cursor::from_slice(&bytes);
    assert!(matches!(
        ListTag::<i32>::read(&mut cursor),
        Err(NbtError::EndOfBuffer)
    ));
}

#[test]
fn test_list_of_strings_round_trip() {
    let list = ListTag::new("words", vec!["ore".to_string(), "ingot".to_string()]);
    let mut cursor = Cursor::new();
    list.write(&mut cursor).unwrap();
    cursor.rewind();
    assert_eq!(ListTag::<String>::read(&mut cursor).unwrap(), Decoded::Matched(list));
}

#[test]
fn test_list_from_iterator() {
    let list: ListTag<i16> = (0..4).collect();
    assert_eq!(list.name, "");
    assert_eq!(list.payload, vec![0, 1, 2, 3]);
}

#[test]
fn test_read_at_end_of_buffer_propagates() {
    let mut cursor = Cursor::new();
    assert!(matches!(
        ListTag::<i32>::read(&mut cursor),
        Err(NbtError::EndOfBuffer)
    ));
}
