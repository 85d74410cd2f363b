//! The homogeneous list codec.
//!
//! A list payload is one element-type byte, a 4-byte big-endian signed count,
//! then `count` nameless element payloads. Elements never carry a kind byte or
//! a name — the list's header announces the type once for the whole
//! collection. A nested list is just a list whose element type is LIST: each
//! inner list writes its own element-type byte and count, recursively, still
//! nameless at every level.
//!
//! Decoding is speculative. `ListTag::<i32>::read` on bytes that encode a list
//! of floats reports `NotMatched` and restores the cursor, so the caller can
//! retry with a differently parameterized instantiation.

use crate::tag::{checked_len, read_named, write_named};
use crate::{Cursor, Decoded, NbtError, Payload, Result, TagKind};

/// A named, homogeneous list of nameless element payloads.
///
/// The element type is fixed by the type parameter at construction and never
/// re-derived per element, so a heterogeneous list cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub struct ListTag<T> {
    pub name: String,
    pub payload: Vec<T>,
}

impl<T> ListTag<T> {
    pub fn new(name: impl Into<String>, payload: Vec<T>) -> Self {
        ListTag {
            name: name.into(),
            payload,
        }
    }

    /// A list with an empty name, as it appears inside a nameless context.
    pub fn nameless(payload: Vec<T>) -> Self {
        ListTag {
            name: String::new(),
            payload,
        }
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

impl<T> From<Vec<T>> for ListTag<T> {
    fn from(payload: Vec<T>) -> Self {
        ListTag::nameless(payload)
    }
}

impl<T> FromIterator<T> for ListTag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ListTag::nameless(iter.into_iter().collect())
    }
}

/// Nameless list payload: element-type byte, signed count, elements.
///
/// This impl is what makes lists themselves valid list elements; nesting falls
/// out of the recursion with no dedicated nested-list code path.
impl<T: Payload> Payload for ListTag<T> {
    const KIND: TagKind = TagKind::List;

    fn write_payload(&self, out: &mut Cursor) -> Result<()> {
        out.put_u8(T::KIND.id());
        out.put_i32(self.payload.len() as i32);
        for element in &self.payload {
            element.write_payload(out)?;
        }
        Ok(())
    }

    fn read_payload(input: &mut Cursor) -> Result<Self> {
        let elem = input.get()?;
        if elem != T::KIND.id() {
            return Err(NbtError::ElementTypeMismatch {
                expected: T::KIND,
                found: elem,
            });
        }
        let declared = input.get_i32()?;
        // Every element payload occupies at least one byte, so the count can
        // never legitimately exceed the remaining buffer.
        let len = checked_len(input, declared, 1)?;
        let mut payload = Vec::with_capacity(len);
        for _ in 0..len {
            payload.push(T::read_payload(input)?);
        }
        Ok(ListTag::nameless(payload))
    }
}

impl<T: Payload> ListTag<T> {
    /// Writes the list as a standalone named tag: LIST kind byte, name, then
    /// the nameless payload (element type, count, elements).
    ///
    /// A zero-element list is legal and still writes its declared element
    /// type; only [`TypelessList`] writes the END element type.
    pub fn write(&self, out: &mut Cursor) -> Result<()> {
        write_named(out, &self.name, self)
    }

    /// Speculatively reads a named list of this element type.
    ///
    /// Reports `NotMatched` without consuming anything if the kind byte is not
    /// LIST, and rolls back to the pre-attempt position if the declared
    /// element type (at any nesting level) is not `T::KIND`. A negative count
    /// on the wire yields an empty list, never an error.
    pub fn read(input: &mut Cursor) -> Result<Decoded<Self>> {
        Ok(match read_named::<Self>(input)? {
            Decoded::Matched((name, mut list)) => {
                list.name = name;
                Decoded::Matched(list)
            }
            Decoded::NotMatched => Decoded::NotMatched,
        })
    }
}

// --- Typeless list ---

/// The canonical "empty, element type not yet known" list.
///
/// Encodes as the END element type plus a count, with no elements; this is the
/// conventional wire form for a list with nothing in it. The decoded count is
/// retained (clamped to zero when negative) so re-encoding is byte-identical
/// to a fresh construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypelessList {
    pub name: String,
    pub length: i32,
}

impl TypelessList {
    pub fn new(name: impl Into<String>) -> Self {
        TypelessList {
            name: name.into(),
            length: 0,
        }
    }
}

/// Nameless typeless-list payload: END element-type byte + count, nothing else.
impl Payload for TypelessList {
    const KIND: TagKind = TagKind::List;

    fn write_payload(&self, out: &mut Cursor) -> Result<()> {
        out.put_u8(TagKind::End.id());
        out.put_i32(self.length);
        Ok(())
    }

    fn read_payload(input: &mut Cursor) -> Result<Self> {
        let elem = input.get()?;
        if elem != TagKind::End.id() {
            return Err(NbtError::ElementTypeMismatch {
                expected: TagKind::End,
                found: elem,
            });
        }
        let declared = input.get_i32()?;
        Ok(TypelessList {
            name: String::new(),
            length: declared.max(0),
        })
    }
}

impl TypelessList {
    /// Writes the typeless list as a standalone named tag.
    pub fn write(&self, out: &mut Cursor) -> Result<()> {
        write_named(out, &self.name, self)
    }

    /// Speculatively reads a named typeless list.
    ///
    /// A list with any declared element type other than END reports
    /// `NotMatched` with the cursor restored.
    pub fn read(input: &mut Cursor) -> Result<Decoded<Self>> {
        Ok(match read_named::<Self>(input)? {
            Decoded::Matched((name, mut list)) => {
                list.name = name;
                Decoded::Matched(list)
            }
            Decoded::NotMatched => Decoded::NotMatched,
        })
    }
}
