use proptest::prelude::*;
use vtv_core::VtvError;
use vtv_hex::{from_hex, from_rows, render, to_hex, DEFAULT_ROW_WIDTH};

fn counting(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 256) as u8).collect()
}

#[test]
fn rows_split_at_width_and_keep_order() {
    let bytes = counting(40);
    let rows: Vec<String> = render(&bytes, 16).unwrap().collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], "000102030405060708090a0b0c0d0e0f");
    assert_eq!(rows[1], "101112131415161718191a1b1c1d1e1f");
    assert_eq!(rows[2], "2021222324252627");
}

#[test]
fn exact_multiple_has_no_trailing_empty_row() {
    let bytes = counting(2 * DEFAULT_ROW_WIDTH);
    let rows: Vec<String> = render(&bytes, DEFAULT_ROW_WIDTH).unwrap().collect();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.len() == 2 * DEFAULT_ROW_WIDTH));
}

#[test]
fn empty_input_renders_no_rows() {
    assert_eq!(render(&[], 8).unwrap().count(), 0);
}

#[test]
fn zero_width_is_rejected() {
    let err = render(&[1, 2, 3], 0).unwrap_err();
    assert!(matches!(err, VtvError::InvalidOutputLength(_)));
}

#[test]
fn cloned_iterator_replays_rows() {
    let bytes = counting(70);
    let rows = render(&bytes, 32).unwrap();
    let first: Vec<String> = rows.clone().collect();
    let second: Vec<String> = rows.collect();
    assert_eq!(first, second);
}

#[test]
fn malformed_hex_is_an_encoding_error() {
    assert!(matches!(from_hex("abc"), Err(VtvError::Encoding(_))));
    assert!(matches!(from_hex("zz"), Err(VtvError::Encoding(_))));
    let err = from_rows(["0011", "0g"]).unwrap_err();
    assert_eq!(err.info().context.get("row").map(String::as_str), Some("1"));
}

#[test]
fn uppercase_and_surrounding_whitespace_decode() {
    assert_eq!(from_hex(" 00FFa0\n").unwrap(), vec![0x00, 0xff, 0xa0]);
}

proptest! {
    #[test]
    fn rows_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..300), width in 1usize..70) {
        let rows: Vec<String> = render(&bytes, width).unwrap().collect();
        for row in rows.iter().take(rows.len().saturating_sub(1)) {
            prop_assert_eq!(row.len(), 2 * width);
        }
        prop_assert_eq!(from_rows(&rows).unwrap(), bytes.clone());
        prop_assert_eq!(rows.concat(), to_hex(&bytes));
    }
}
