//! # nbt-codec
//!
//! A speculative, backtracking codec for the NBT tagged binary tree format.
//!
//! Every value on the wire carries a 1-byte kind identifier, an optional name
//! and a kind-specific payload; lists and compounds nest arbitrarily. Decoding
//! is *speculative*: a typed reader peeks at the kind byte and either consumes
//! the value or leaves the cursor exactly where it was, so a dispatcher can try
//! another candidate representation at the same position.
//!
//! - [`Cursor`] — seekable big-endian reader/writer over an in-memory buffer
//! - [`TagKind`] — the closed set of wire kind identifiers
//! - [`Payload`] — nameless (header-free) payload encoding per kind
//! - [`ListTag`] / [`TypelessList`] — statically typed homogeneous lists
//! - [`Tag`] / [`Value`] / [`Compound`] — the dynamic tree model and the
//!   kind-dispatching decoder
//!
//! ## Typed, speculative decoding
//!
//! ```rust
//! use nbt_codec::{Cursor, Decoded, ListTag};
//!
//! let scores = ListTag::new("scores", vec![1i32, 2, 3]);
//! let mut cursor = Cursor::new();
//! scores.write(&mut cursor).unwrap();
//!
//! cursor.rewind();
//! assert_eq!(ListTag::<i32>::read(&mut cursor).unwrap(), Decoded::Matched(scores));
//!
//! // The same bytes do not match a list of floats, and the cursor is untouched.
//! cursor.rewind();
//! assert_eq!(ListTag::<f32>::read(&mut cursor).unwrap(), Decoded::NotMatched);
//! ```
//!
//! ## Dynamic decoding
//!
//! ```rust
//! use nbt_codec::{decode, encode, Compound, Cursor, Decoded, Tag, Value};
//!
//! let mut level = Compound::new();
//! level.insert(Tag::new("seed", Value::Long(-42)));
//! level.insert(Tag::new("label", Value::String("overworld".into())));
//!
//! let bytes = encode(&Tag::new("level", Value::Compound(level))).unwrap();
//! let mut cursor = Cursor::from_slice(&bytes);
//! match decode(&mut cursor).unwrap() {
//!     Decoded::Matched(tag) => assert_eq!(tag.name, "level"),
//!     Decoded::NotMatched => unreachable!(),
//! }
//! ```

pub mod cursor;
pub mod kind;
pub mod list;
pub mod tag;
pub mod value;

use bytes::Bytes;

pub use cursor::{Cursor, Mark};
pub use kind::TagKind;
pub use list::{ListTag, TypelessList};
pub use tag::{NamedTag, Payload};
pub use value::{Compound, ListValue, Tag, Value};

/// Errors that can occur during encoding or decoding operations.
///
/// A kind byte that merely fails to match the variant being attempted is *not*
/// an error: typed readers report it as [`Decoded::NotMatched`] with the
/// cursor restored, so the caller can retry another candidate.
#[derive(Debug, thiserror::Error)]
pub enum NbtError {
    /// The cursor was asked to read past the end of the available bytes.
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    /// A kind byte outside the closed identifier set was encountered.
    #[error("invalid tag kind byte: {0}")]
    InvalidKind(u8),
    /// A list payload declared an element type other than the one the
    /// attempted instantiation expects. Typed readers convert this into a
    /// rollback; it only surfaces from a context that cannot retry.
    #[error("declared element type byte {found} where {expected} was expected")]
    ElementTypeMismatch { expected: TagKind, found: u8 },
    /// A declared count is larger than the remaining buffer could possibly
    /// hold; refused before any allocation is sized from it.
    #[error("declared length {declared} exceeds the {remaining} bytes remaining")]
    MalformedLength { declared: i32, remaining: usize },
    /// String bytes were not valid UTF-8.
    #[error("string payload is not valid UTF-8: {0}")]
    InvalidString(#[from] std::string::FromUtf8Error),
    /// A name or string payload does not fit the 16-bit length prefix.
    #[error("string of {0} bytes does not fit a 16-bit length prefix")]
    StringTooLong(usize),
    /// A value of one kind was pushed into a list declared for another.
    #[error("element of kind {found} cannot join a list of {expected}")]
    HeterogeneousElement { expected: TagKind, found: TagKind },
    /// Dynamic decoding recursed past the nesting limit.
    #[error("nesting depth exceeds the limit of {0}")]
    DepthLimitExceeded(u32),
}

/// The result type used throughout this crate for encode/decode operations.
pub type Result<T> = std::result::Result<T, NbtError>;

/// The outcome of a speculative decode attempt.
///
/// `NotMatched` guarantees the cursor position is unchanged from before the
/// attempt, so a different candidate variant can be tried at the same offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded<T> {
    /// The bytes at the cursor matched and a value was consumed.
    Matched(T),
    /// The bytes belong to some other variant; nothing was consumed.
    NotMatched,
}

impl<T> Decoded<T> {
    /// Returns `true` if a value was decoded.
    pub fn is_matched(&self) -> bool {
        matches!(self, Decoded::Matched(_))
    }

    /// Converts into `Option`, discarding the not-matched case.
    pub fn matched(self) -> Option<T> {
        match self {
            Decoded::Matched(value) => Some(value),
            Decoded::NotMatched => None,
        }
    }
}

/// Convenience function to encode a named tag to bytes.
///
/// # Example
/// ```rust
/// use nbt_codec::{encode, Tag, Value};
///
/// let bytes = encode(&Tag::new("answer", Value::Int(42))).unwrap();
/// assert_eq!(&bytes[..], &[3, 0, 6, b'a', b'n', b's', b'w', b'e', b'r', 0, 0, 0, 42]);
/// ```
pub fn encode(tag: &Tag) -> Result<Bytes> {
    let mut cursor = Cursor::new();
    tag.write(&mut cursor)?;
    Ok(cursor.into_bytes())
}

/// Convenience function to decode the next named tag from a cursor.
///
/// This is the kind-dispatching entry point: the kind byte at the cursor picks
/// the concrete representation. See [`Tag::read`].
pub fn decode(cursor: &mut Cursor) -> Result<Decoded<Tag>> {
    Tag::read(cursor)
}
