extern crate repr;

use repr::reverse::{self, inplace_swap, swap_at};
use repr::{parse_size, Error};

#[test]
fn reverse_sequences() {
    for n in 0..50 {
        let mut seq = reverse::sequence(n);
        reverse::reverse(&mut seq);
        let expected: Vec<i32> = (0..n).rev().collect();
        assert_eq!(seq, expected, "n = {}", n);
    }
}

#[test]
fn reverse_twice() {
    let orig = vec![7, -3, 0, 42, 42, 9, -100];
    let mut seq = orig.clone();
    reverse::reverse(&mut seq);
    assert_ne!(seq, orig);
    reverse::reverse(&mut seq);
    assert_eq!(seq, orig);
}

#[test]
fn reverse_short() {
    let mut empty: Vec<i32> = Vec::new();
    reverse::reverse(&mut empty);
    assert!(empty.is_empty());

    let mut one = vec![5];
    reverse::reverse(&mut one);
    assert_eq!(one, [5]);
}

#[test]
fn reverse_keeps_midpoint() {
    let mut seq = vec![1, 2, 3, 4, 5];
    reverse::reverse(&mut seq);
    assert_eq!(seq, [5, 4, 3, 2, 1]);
}

#[test]
fn reverse_other_widths() {
    let mut bytes = *b"abc";
    reverse::reverse(&mut bytes);
    assert_eq!(&bytes, b"cba");

    let mut wide = [u64::max_value(), 0, 1];
    reverse::reverse(&mut wide);
    assert_eq!(wide, [1, 0, u64::max_value()]);
}

#[test]
fn xor_swap() {
    let (mut x, mut y) = (0x1234, -77);
    inplace_swap(&mut x, &mut y);
    assert_eq!((x, y), (-77, 0x1234));

    let (mut a, mut b) = (9, 9);
    inplace_swap(&mut a, &mut b);
    assert_eq!((a, b), (9, 9));
}

#[test]
fn swap_at_indices() {
    let mut seq = vec![10, 20, 30];
    swap_at(&mut seq, 0, 2).unwrap();
    assert_eq!(seq, [30, 20, 10]);

    swap_at(&mut seq, 2, 1).unwrap();
    assert_eq!(seq, [30, 10, 20]);
}

#[test]
fn swap_at_same_index() {
    let mut seq = vec![10, 20, 30];
    swap_at(&mut seq, 1, 1).unwrap();
    assert_eq!(seq, [10, 20, 30]);
}

#[test]
fn swap_at_out_of_bounds() {
    let mut seq = vec![10, 20, 30];
    match swap_at(&mut seq, 0, 3) {
        Err(Error::IndexOutOfBounds { index, len }) => {
            assert_eq!(index, 3);
            assert_eq!(len, 3);
        }
        r => panic!("unexpected {:?}", r),
    }
    assert!(swap_at(&mut seq, 3, 3).is_err());
    assert_eq!(seq, [10, 20, 30]);
}

#[test]
fn sequence_non_positive() {
    assert!(reverse::sequence(0).is_empty());
    assert!(reverse::sequence(-4).is_empty());
    assert_eq!(reverse::sequence(3), [0, 1, 2]);
}

#[test]
fn rows_layout() {
    let seq = reverse::sequence(12);
    assert_eq!(
        reverse::rows(&seq).to_string(),
        " 0  1  2  3  4  5  6  7  8  9 \n10 11 "
    );
    assert_eq!(reverse::rows(&[]).to_string(), "");
    assert_eq!(reverse::rows(&[-5, 123]).to_string(), "-5 123 ");
}

#[test]
fn report_25() {
    let mut out = Vec::new();
    reverse::report(25, &mut out).unwrap();
    let expected = "Ordered array:\n\
                     \x200  1  2  3  4  5  6  7  8  9 \n\
                    10 11 12 13 14 15 16 17 18 19 \n\
                    20 21 22 23 24 \n\
                    Reversed array:\n\
                    24 23 22 21 20 19 18 17 16 15 \n\
                    14 13 12 11 10  9  8  7  6  5 \n\
                    \x204  3  2  1  0 \n";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn report_empty() {
    let mut out = Vec::new();
    reverse::report(0, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Ordered array:\n\nReversed array:\n\n"
    );
}

#[test]
fn parse_sizes() {
    assert_eq!(parse_size("25").unwrap(), 25);
    assert_eq!(parse_size(" 7 ").unwrap(), 7);
    assert_eq!(parse_size("0").unwrap(), 0);

    match parse_size("abc") {
        Err(Error::InvalidSize { ref input, .. }) => assert_eq!(input, "abc"),
        r => panic!("unexpected {:?}", r),
    }
    match parse_size("-3") {
        Err(Error::NegativeSize(n)) => assert_eq!(n, -3),
        r => panic!("unexpected {:?}", r),
    }
    assert!(parse_size("99999999999").is_err());
    assert!(parse_size("").is_err());
}
