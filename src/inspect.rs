//! Byte-level inspection of primitive values.
//!
//! This is the only place where a value's storage is looked at as raw bytes.
//! The bytes are taken in native order, so a dump shows whatever byte order
//! the platform uses.

use std::borrow::Cow;
use std::ffi::CStr;
use std::fmt;
use std::mem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}

#[inline]
pub fn native_order() -> ByteOrder {
    if cfg!(target_endian = "big") {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    }
}

/// Hex rendering of a byte region: ` | 2a | 00 |`.
#[derive(Debug, Clone)]
pub struct ByteDump<'a> {
    bytes: Cow<'a, [u8]>,
}

impl<'a> ByteDump<'a> {
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl<'a> fmt::Display for ByteDump<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, " |")?;
        for b in self.bytes.iter() {
            write!(f, " {:02x} |", b)?;
        }
        Ok(())
    }
}

#[inline]
pub fn show_bytes(bytes: &[u8]) -> ByteDump {
    ByteDump {
        bytes: Cow::Borrowed(bytes),
    }
}

#[inline]
fn owned(bytes: Vec<u8>) -> ByteDump<'static> {
    ByteDump {
        bytes: Cow::Owned(bytes),
    }
}

pub fn show_int(x: i32) -> ByteDump<'static> {
    let bytes = x.to_ne_bytes();
    owned(bytes.to_vec())
}

pub fn show_float(x: f32) -> ByteDump<'static> {
    let bytes = x.to_bits().to_ne_bytes();
    owned(bytes.to_vec())
}

/// Dumps the address itself, not the value it points to.
pub fn show_pointer<T>(x: *const T) -> ByteDump<'static> {
    let bytes = (x as usize).to_ne_bytes();
    owned(bytes.to_vec())
}

/// Dumps the string's own storage.
#[inline]
pub fn show_string(s: &str) -> ByteDump {
    show_bytes(s.as_bytes())
}

/// Dumps the bytes before the NUL terminator.
#[inline]
pub fn show_cstr(s: &CStr) -> ByteDump {
    show_bytes(s.to_bytes())
}

/// The int, float and pointer dumps of `value`, in that order.
///
/// The pointer dump is the address of the local copy of `value`, so it
/// changes from run to run.
pub fn sample(value: i32) -> [ByteDump<'static>; 3] {
    let ival = value;
    let fval = ival as f32;
    let pval: *const i32 = &ival;
    debug!(
        "Sampling {} ({} bytes), {} ({} bytes), {:p} ({} bytes)",
        ival,
        mem::size_of::<i32>(),
        fval,
        mem::size_of::<f32>(),
        pval,
        mem::size_of::<*const i32>()
    );
    [show_int(ival), show_float(fval), show_pointer(pval)]
}
