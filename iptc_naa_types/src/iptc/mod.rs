//! Types representing parsed IPTC-NAA metadata.
//!
//! IPTC-NAA (also known as IPTC IIM) is a legacy press-metadata standard
//! embedded in image files - captions, keywords, bylines, and so on.
//!
//! Each record in the stream is keyed by a one-byte dataset number. Known
//! numbers resolve to a name from [`application_record`]; unknown ones keep
//! their raw numeric id, so keys are a union of both shapes.

pub mod application_record;

/// A key in parsed IPTC metadata.
///
/// Most keys resolve to a name from the Application Record dictionary, but
/// files may carry datasets we don't know about. Those keep their raw tag
/// id instead of being forced into a made-up name.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum IptcKey {
    /// A dataset we know by name, like `Keywords` or `CaptionAbstract`.
    Name(&'static str),

    /// A dataset absent from the dictionary, kept as its raw tag id.
    Tag(u8),
}

impl core::fmt::Display for IptcKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IptcKey::Name(name) => f.write_str(name),
            IptcKey::Tag(tag) => write!(f, "{tag}"),
        }
    }
}

/// A value in parsed IPTC metadata.
///
/// Most datasets appear once, so their value stays a single string. Some
/// (like `Keywords`) are repeatable - the second occurrence promotes the
/// value to a list, and every further occurrence appends to it.
#[derive(Clone, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum IptcValue {
    /// The dataset appeared exactly once.
    Single(String),

    /// The dataset appeared two or more times. Values are in stream order.
    List(Vec<String>),
}

impl IptcValue {
    /// Adds another occurrence of this dataset's value.
    ///
    /// A `Single` becomes a two-element `List`; a `List` just grows. A value
    /// never goes back to being a `Single`.
    pub fn push(&mut self, value: String) {
        match self {
            IptcValue::Single(first) => {
                let first: String = core::mem::take(first);
                *self = IptcValue::List(vec![first, value]);
            }
            IptcValue::List(list) => list.push(value),
        }
    }

    /// How many occurrences this value holds.
    pub fn count(&self) -> usize {
        match self {
            IptcValue::Single(_) => 1_usize,
            IptcValue::List(list) => list.len(),
        }
    }
}

/// One parsed IPTC pair.
///
/// Parsed metadata is a `Vec` of these, in first-seen stream order.
#[derive(Clone, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct IptcKeyValue {
    /// The resolved key.
    pub key: IptcKey,

    /// The decoded value(s).
    pub value: IptcValue,
}
