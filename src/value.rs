//! The dynamic tag tree: a closed sum type over the kind set, the
//! insertion-ordered compound, and the kind-dispatching decoder.
//!
//! The typed codecs in [`tag`](crate::tag) and [`list`](crate::list) decode
//! *one candidate shape*; this module decodes *whatever is there*, which is
//! what compound values and top-level documents need. Because the shape of
//! untrusted input is unbounded here, dynamic decoding tracks recursion depth
//! and refuses input nested past [`MAX_DEPTH`].

use crate::tag::checked_len;
use crate::{Cursor, Decoded, NbtError, Payload, Result, TagKind};

/// Maximum nesting depth accepted by the dynamic decoder.
///
/// Typed decoding is bounded by the static type and needs no limit; dynamic
/// decoding would otherwise recurse once per byte of adversarial input.
pub const MAX_DEPTH: u32 = 512;

/// A dynamic payload: one variant per wire kind.
///
/// The variant set is closed and exhaustively matched at dispatch time; the
/// kind is a pure function of the variant, never of the contents.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(ListValue),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Value {
    /// The wire kind of this value.
    pub fn kind(&self) -> TagKind {
        match self {
            Value::Byte(_) => TagKind::Byte,
            Value::Short(_) => TagKind::Short,
            Value::Int(_) => TagKind::Int,
            Value::Long(_) => TagKind::Long,
            Value::Float(_) => TagKind::Float,
            Value::Double(_) => TagKind::Double,
            Value::ByteArray(_) => TagKind::ByteArray,
            Value::String(_) => TagKind::String,
            Value::List(_) => TagKind::List,
            Value::Compound(_) => TagKind::Compound,
            Value::IntArray(_) => TagKind::IntArray,
            Value::LongArray(_) => TagKind::LongArray,
        }
    }

    /// Writes the nameless payload of this value.
    pub(crate) fn write_payload(&self, out: &mut Cursor) -> Result<()> {
        match self {
            Value::Byte(v) => v.write_payload(out),
            Value::Short(v) => v.write_payload(out),
            Value::Int(v) => v.write_payload(out),
            Value::Long(v) => v.write_payload(out),
            Value::Float(v) => v.write_payload(out),
            Value::Double(v) => v.write_payload(out),
            Value::ByteArray(v) => v.write_payload(out),
            Value::String(v) => v.write_payload(out),
            Value::List(v) => v.write_payload(out),
            Value::Compound(v) => v.write_payload(out),
            Value::IntArray(v) => v.write_payload(out),
            Value::LongArray(v) => v.write_payload(out),
        }
    }

    /// Reads the nameless payload for an already-known kind.
    pub(crate) fn read_payload(input: &mut Cursor, kind: TagKind, depth: u32) -> Result<Value> {
        if depth >= MAX_DEPTH {
            return Err(NbtError::DepthLimitExceeded(MAX_DEPTH));
        }
        Ok(match kind {
            // END terminates a compound; it is never dispatched as a value.
            TagKind::End => return Err(NbtError::InvalidKind(TagKind::End.id())),
            TagKind::Byte => Value::Byte(input.get_i8()?),
            TagKind::Short => Value::Short(input.get_i16()?),
            TagKind::Int => Value::Int(input.get_i32()?),
            TagKind::Long => Value::Long(input.get_i64()?),
            TagKind::Float => Value::Float(input.get_f32()?),
            TagKind::Double => Value::Double(input.get_f64()?),
            TagKind::ByteArray => Value::ByteArray(Vec::<i8>::read_payload(input)?),
            TagKind::String => Value::String(input.get_string()?),
            TagKind::List => Value::List(ListValue::read_payload_at(input, depth)?),
            TagKind::Compound => Value::Compound(Compound::read_payload_at(input, depth)?),
            TagKind::IntArray => Value::IntArray(Vec::<i32>::read_payload(input)?),
            TagKind::LongArray => Value::LongArray(Vec::<i64>::read_payload(input)?),
        })
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Byte(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Short(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<ListValue> for Value {
    fn from(v: ListValue) -> Self {
        Value::List(v)
    }
}

impl From<Compound> for Value {
    fn from(v: Compound) -> Self {
        Value::Compound(v)
    }
}

// --- Dynamic lists ---

/// A homogeneous list whose element kind is chosen at runtime.
///
/// The declared element kind is fixed at construction; [`ListValue::try_push`]
/// refuses values of any other kind, so a heterogeneous list is never
/// constructed, decoded or otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ListValue {
    elem: TagKind,
    items: Vec<Value>,
}

impl ListValue {
    /// An empty list declared for the given element kind.
    pub fn new(elem: TagKind) -> Self {
        ListValue {
            elem,
            items: Vec::new(),
        }
    }

    /// The canonical empty list with an unknown element type.
    pub fn typeless() -> Self {
        ListValue::new(TagKind::End)
    }

    /// The declared element kind.
    pub fn elem(&self) -> TagKind {
        self.elem
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a value, refusing one whose kind differs from the declared
    /// element kind.
    pub fn try_push(&mut self, value: Value) -> Result<()> {
        if value.kind() != self.elem {
            return Err(NbtError::HeterogeneousElement {
                expected: self.elem,
                found: value.kind(),
            });
        }
        self.items.push(value);
        Ok(())
    }

    pub(crate) fn write_payload(&self, out: &mut Cursor) -> Result<()> {
        out.put_u8(self.elem.id());
        out.put_i32(self.items.len() as i32);
        for item in &self.items {
            item.write_payload(out)?;
        }
        Ok(())
    }

    pub(crate) fn read_payload_at(input: &mut Cursor, depth: u32) -> Result<Self> {
        let byte = input.get()?;
        let elem = TagKind::from_id(byte).ok_or(NbtError::InvalidKind(byte))?;
        let declared = input.get_i32()?;
        if elem == TagKind::End {
            // The typeless sentinel: whatever the count says, there is no
            // element payload to read.
            return Ok(ListValue::typeless());
        }
        let len = checked_len(input, declared, 1)?;
        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            items.push(Value::read_payload(input, elem, depth + 1)?);
        }
        Ok(ListValue { elem, items })
    }
}

// --- Compounds ---

/// An insertion-ordered mapping from name to tag, END-terminated on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compound {
    entries: Vec<Tag>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tag, replacing an existing entry of the same name in place.
    pub fn insert(&mut self, tag: Tag) {
        match self.entries.iter_mut().find(|entry| entry.name == tag.name) {
            Some(slot) => *slot = tag,
            None => self.entries.push(tag),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.entries.iter()
    }

    pub(crate) fn read_payload_at(input: &mut Cursor, depth: u32) -> Result<Self> {
        let mut entries = Vec::new();
        loop {
            let byte = input.get()?;
            if byte == TagKind::End.id() {
                break;
            }
            let kind = TagKind::from_id(byte).ok_or(NbtError::InvalidKind(byte))?;
            let name = input.get_string()?;
            let value = Value::read_payload(input, kind, depth + 1)?;
            entries.push(Tag { name, value });
        }
        Ok(Compound { entries })
    }
}

/// Compound payload: a run of named tags closed by the END sentinel byte.
///
/// Having compounds implement [`Payload`] is what makes `ListTag<Compound>`
/// (a typed list of compounds) work.
impl Payload for Compound {
    const KIND: TagKind = TagKind::Compound;

    fn write_payload(&self, out: &mut Cursor) -> Result<()> {
        for entry in &self.entries {
            entry.write(out)?;
        }
        out.put_u8(TagKind::End.id());
        Ok(())
    }

    fn read_payload(input: &mut Cursor) -> Result<Self> {
        Compound::read_payload_at(input, 0)
    }
}

impl FromIterator<Tag> for Compound {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut compound = Compound::new();
        for tag in iter {
            compound.insert(tag);
        }
        compound
    }
}

// --- Named dynamic tags ---

/// A named dynamic tag: the root of a document or an entry in a compound.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
    pub value: Value,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Tag {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The wire kind of this tag.
    pub fn kind(&self) -> TagKind {
        self.value.kind()
    }

    /// Writes the tag as a standalone named value: kind byte, name, payload.
    pub fn write(&self, out: &mut Cursor) -> Result<()> {
        out.put_u8(self.kind().id());
        out.put_string(&self.name)?;
        self.value.write_payload(out)
    }

    /// The decode dispatcher: peeks the kind byte and decodes whichever
    /// concrete representation it names.
    ///
    /// An END byte is a compound terminator, not a value, and reports
    /// `NotMatched` with nothing consumed. A byte outside the closed kind set
    /// is `InvalidKind`.
    pub fn read(input: &mut Cursor) -> Result<Decoded<Tag>> {
        let byte = input.peek()?;
        let kind = TagKind::from_id(byte).ok_or(NbtError::InvalidKind(byte))?;
        if kind == TagKind::End {
            return Ok(Decoded::NotMatched);
        }
        input.get()?;
        let name = input.get_string()?;
        let value = Value::read_payload(input, kind, 0)?;
        Ok(Decoded::Matched(Tag { name, value }))
    }
}
