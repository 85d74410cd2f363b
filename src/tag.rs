//! The tag model base: nameless payload encoding per kind, and the generic
//! named-tag codec built on top of it.
//!
//! List elements and compound values are written without per-value headers, so
//! the payload codec is the primitive and the kind-byte + name header is a thin
//! layer above it.

use crate::{Cursor, Decoded, NbtError, Result, TagKind};

/// Nameless payload codec for one wire kind.
///
/// Implementors encode/decode *only* the kind-specific payload — no kind byte,
/// no name — at every level of nesting. `KIND` is the forward half of the kind
/// registry: total, injective, and checked at compile time, so there is no
/// runtime fallback for an unregistered element type.
pub trait Payload: Sized {
    /// The wire kind every value of this type reports.
    const KIND: TagKind;

    /// Writes the kind-specific payload.
    fn write_payload(&self, out: &mut Cursor) -> Result<()>;

    /// Reads the kind-specific payload.
    ///
    /// The caller has already consumed (or suppressed) the header; on error
    /// the cursor is left wherever the failed read stopped, and it is the
    /// *named* layer's job to roll back.
    fn read_payload(input: &mut Cursor) -> Result<Self>;
}

/// Writes a standalone named tag: kind byte, name, payload.
pub(crate) fn write_named<P: Payload>(out: &mut Cursor, name: &str, payload: &P) -> Result<()> {
    out.put_u8(P::KIND.id());
    out.put_string(name)?;
    payload.write_payload(out)
}

/// Speculatively reads a standalone named tag of payload type `P`.
///
/// If the kind byte at the cursor is not `P::KIND`, nothing is consumed. If the
/// payload declares a mismatched element type (lists), the cursor is restored
/// to the pre-attempt mark. Either way the caller sees `NotMatched` and may
/// retry with another candidate at the same position.
pub(crate) fn read_named<P: Payload>(input: &mut Cursor) -> Result<Decoded<(String, P)>> {
    if input.peek()? != P::KIND.id() {
        return Ok(Decoded::NotMatched);
    }
    let anchor = input.cur();
    input.get()?;
    let name = input.get_string()?;
    match P::read_payload(input) {
        Ok(payload) => Ok(Decoded::Matched((name, payload))),
        Err(NbtError::ElementTypeMismatch { .. }) => {
            input.seek(anchor);
            Ok(Decoded::NotMatched)
        }
        Err(err) => Err(err),
    }
}

// --- Scalar payloads ---

/// BYTE: one signed byte.
impl Payload for i8 {
    const KIND: TagKind = TagKind::Byte;

    fn write_payload(&self, out: &mut Cursor) -> Result<()> {
        out.put_i8(*self);
        Ok(())
    }

    fn read_payload(input: &mut Cursor) -> Result<Self> {
        input.get_i8()
    }
}

/// SHORT: 2 bytes, big-endian.
impl Payload for i16 {
    const KIND: TagKind = TagKind::Short;

    fn write_payload(&self, out: &mut Cursor) -> Result<()> {
        out.put_i16(*self);
        Ok(())
    }

    fn read_payload(input: &mut Cursor) -> Result<Self> {
        input.get_i16()
    }
}

/// INT: 4 bytes, big-endian.
impl Payload for i32 {
    const KIND: TagKind = TagKind::Int;

    fn write_payload(&self, out: &mut Cursor) -> Result<()> {
        out.put_i32(*self);
        Ok(())
    }

    fn read_payload(input: &mut Cursor) -> Result<Self> {
        input.get_i32()
    }
}

/// LONG: 8 bytes, big-endian.
impl Payload for i64 {
    const KIND: TagKind = TagKind::Long;

    fn write_payload(&self, out: &mut Cursor) -> Result<()> {
        out.put_i64(*self);
        Ok(())
    }

    fn read_payload(input: &mut Cursor) -> Result<Self> {
        input.get_i64()
    }
}

/// FLOAT: 4 bytes, big-endian IEEE 754.
impl Payload for f32 {
    const KIND: TagKind = TagKind::Float;

    fn write_payload(&self, out: &mut Cursor) -> Result<()> {
        out.put_f32(*self);
        Ok(())
    }

    fn read_payload(input: &mut Cursor) -> Result<Self> {
        input.get_f32()
    }
}

/// DOUBLE: 8 bytes, big-endian IEEE 754.
impl Payload for f64 {
    const KIND: TagKind = TagKind::Double;

    fn write_payload(&self, out: &mut Cursor) -> Result<()> {
        out.put_f64(*self);
        Ok(())
    }

    fn read_payload(input: &mut Cursor) -> Result<Self> {
        input.get_f64()
    }
}

/// STRING: 16-bit big-endian length prefix + UTF-8 bytes.
impl Payload for String {
    const KIND: TagKind = TagKind::String;

    fn write_payload(&self, out: &mut Cursor) -> Result<()> {
        out.put_string(self)
    }

    fn read_payload(input: &mut Cursor) -> Result<Self> {
        input.get_string()
    }
}

// --- Array payloads ---

/// Validates a declared array count against the remaining buffer.
///
/// A negative count reads as zero elements. A count whose byte size exceeds
/// the remaining buffer is refused before any allocation is sized from it.
pub(crate) fn checked_len(input: &Cursor, declared: i32, width: usize) -> Result<usize> {
    if declared <= 0 {
        return Ok(0);
    }
    let len = declared as usize;
    if len.saturating_mul(width) > input.remaining() {
        return Err(NbtError::MalformedLength {
            declared,
            remaining: input.remaining(),
        });
    }
    Ok(len)
}

/// BYTE_ARRAY: 4-byte big-endian signed count, then that many signed bytes.
impl Payload for Vec<i8> {
    const KIND: TagKind = TagKind::ByteArray;

    fn write_payload(&self, out: &mut Cursor) -> Result<()> {
        out.put_i32(self.len() as i32);
        for &byte in self {
            out.put_i8(byte);
        }
        Ok(())
    }

    fn read_payload(input: &mut Cursor) -> Result<Self> {
        let declared = input.get_i32()?;
        let len = checked_len(input, declared, 1)?;
        let bytes = input.get_slice(len)?;
        Ok(bytes.iter().map(|&b| b as i8).collect())
    }
}

/// INT_ARRAY: 4-byte big-endian signed count, then that many big-endian ints.
impl Payload for Vec<i32> {
    const KIND: TagKind = TagKind::IntArray;

    fn write_payload(&self, out: &mut Cursor) -> Result<()> {
        out.put_i32(self.len() as i32);
        for &value in self {
            out.put_i32(value);
        }
        Ok(())
    }

    fn read_payload(input: &mut Cursor) -> Result<Self> {
        let declared = input.get_i32()?;
        let len = checked_len(input, declared, 4)?;
        let mut payload = Vec::with_capacity(len);
        for _ in 0..len {
            payload.push(input.get_i32()?);
        }
        Ok(payload)
    }
}

/// LONG_ARRAY: 4-byte big-endian signed count, then that many big-endian longs.
impl Payload for Vec<i64> {
    const KIND: TagKind = TagKind::LongArray;

    fn write_payload(&self, out: &mut Cursor) -> Result<()> {
        out.put_i32(self.len() as i32);
        for &value in self {
            out.put_i64(value);
        }
        Ok(())
    }

    fn read_payload(input: &mut Cursor) -> Result<Self> {
        let declared = input.get_i32()?;
        let len = checked_len(input, declared, 8)?;
        let mut payload = Vec::with_capacity(len);
        for _ in 0..len {
            payload.push(input.get_i64()?);
        }
        Ok(payload)
    }
}

// --- Named tags ---

/// A standalone named tag over any payload type.
///
/// This is the header layer: the kind byte and the 16-bit-length-prefixed name,
/// followed by the nameless payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTag<P> {
    pub name: String,
    pub payload: P,
}

impl<P: Payload> NamedTag<P> {
    pub fn new(name: impl Into<String>, payload: P) -> Self {
        NamedTag {
            name: name.into(),
            payload,
        }
    }

    /// The wire kind of this tag, fixed by the payload type.
    pub fn kind(&self) -> TagKind {
        P::KIND
    }

    /// Writes the tag as a standalone named value.
    pub fn write(&self, out: &mut Cursor) -> Result<()> {
        write_named(out, &self.name, &self.payload)
    }

    /// Speculatively reads a tag of this payload type.
    ///
    /// Reports `NotMatched` with the cursor unchanged when the bytes belong to
    /// a different kind (or a list of a different element type).
    pub fn read(input: &mut Cursor) -> Result<Decoded<Self>> {
        Ok(match read_named::<P>(input)? {
            Decoded::Matched((name, payload)) => Decoded::Matched(NamedTag { name, payload }),
            Decoded::NotMatched => Decoded::NotMatched,
        })
    }
}
