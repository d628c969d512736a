//! In-place reversal of integer sequences.

use std::fmt;
use std::io::{self, Write};
use std::ops::BitXor;

use err::Error;

const VALUES_PER_ROW: usize = 10;

/// Exchanges the values behind `x` and `y` without a temporary.
///
/// Both references are `&mut`, so they can never point at the same location;
/// XOR-swapping a location with itself would zero it.
#[inline]
pub fn inplace_swap<T>(x: &mut T, y: &mut T)
where
    T: Copy + BitXor<Output = T>,
{
    *y = *x ^ *y;
    *x = *x ^ *y;
    *y = *x ^ *y;
}

/// Swaps `seq[i]` and `seq[j]` with [`inplace_swap`].
///
/// Equal indices are a no-op.
pub fn swap_at<T>(seq: &mut [T], i: usize, j: usize) -> Result<(), Error>
where
    T: Copy + BitXor<Output = T>,
{
    let len = seq.len();
    for &index in &[i, j] {
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
    }
    if i == j {
        return Ok(());
    }
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    let (head, tail) = seq.split_at_mut(hi);
    inplace_swap(&mut head[lo], &mut tail[0]);
    Ok(())
}

/// Reverses `seq` in place.
pub fn reverse<T>(seq: &mut [T])
where
    T: Copy + BitXor<Output = T>,
{
    if seq.len() < 2 {
        return;
    }
    let (mut first, mut last) = (0, seq.len() - 1);
    while first < last {
        trace!("swap [{}] <-> [{}]", first, last);
        let (head, tail) = seq.split_at_mut(last);
        inplace_swap(&mut head[first], &mut tail[0]);
        first += 1;
        last -= 1;
    }
}

/// Returns `0, 1, ..., n - 1`, or an empty sequence if `n` is not positive.
pub fn sequence(n: i32) -> Vec<i32> {
    (0..n).collect()
}

pub struct Rows<'a> {
    inner: &'a [i32],
}

/// Lays `seq` out ten values per line, each right-aligned in two columns and
/// followed by a space. There is no line break after the last row.
#[inline]
pub fn rows(seq: &[i32]) -> Rows {
    Rows { inner: seq }
}

impl<'a> fmt::Display for Rows<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, v) in self.inner.iter().enumerate() {
            if i != 0 && i % VALUES_PER_ROW == 0 {
                writeln!(f)?;
            }
            write!(f, "{:2} ", v)?;
        }
        Ok(())
    }
}

/// Writes the ordered `0..n` sequence and its reversal to `out`.
pub fn report<W: Write>(n: i32, out: &mut W) -> io::Result<()> {
    let mut seq = sequence(n);
    debug!("Reporting a sequence of {} values", seq.len());

    writeln!(out, "Ordered array:")?;
    writeln!(out, "{}", rows(&seq))?;

    reverse(&mut seq);

    writeln!(out, "Reversed array:")?;
    writeln!(out, "{}", rows(&seq))?;
    out.flush()
}
