//! A bounds-checked, random-access view over segment bytes.
//!
//! The container walker (JPEG segment or TIFF IFD parsing) hands us a byte
//! range and offsets into it. Photoshop resource scanning jumps around that
//! range, so sequential parsing doesn't fit - instead, this view offers
//! absolute-offset reads that fail with a distinct [`OutOfRange`] error
//! rather than wrapping or panicking.
//!
//! An `OutOfRange` escaping a parse indicates a broken caller contract, not
//! a malformed file, which is why it's kept separate from the per-record
//! errors in [`crate::iptc::error`].

use std::borrow::Cow;

/// A read landed (at least partly) outside the buffer.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct OutOfRange {
    /// Where the read started.
    pub offset: usize,

    /// How many bytes it wanted.
    pub wanted: usize,

    /// How long the buffer actually is.
    pub len: usize,
}

impl core::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Read out of range: wanted `{}` byte(s) at offset `{}`, \
            but the buffer is `{}` byte(s) long.",
            self.wanted, self.offset, self.len
        )
    }
}

impl core::error::Error for OutOfRange {}

/// A read-only view over one segment's bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentView<'buf> {
    bytes: &'buf [u8],
}

impl<'buf> SegmentView<'buf> {
    /// Wraps the given bytes.
    pub fn new(bytes: &'buf [u8]) -> Self {
        Self { bytes }
    }

    /// The view's length, in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the view has no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reads the unsigned byte at `offset`.
    pub fn u8_at(&self, offset: usize) -> Result<u8, OutOfRange> {
        self.bytes.get(offset).copied().ok_or(OutOfRange {
            offset,
            wanted: 1_usize,
            len: self.bytes.len(),
        })
    }

    /// Reads a big-endian unsigned 16-bit integer at `offset`.
    pub fn u16_be_at(&self, offset: usize) -> Result<u16, OutOfRange> {
        let bytes: &[u8] = self.bytes_at(offset, 2_usize)?;

        // note: `bytes_at` just checked the length, so this can't miss.
        let Ok(pair) = TryInto::<[u8; 2]>::try_into(bytes) else {
            unreachable!("slice is known to be two bytes long. please report this - it's a bug!");
        };

        Ok(u16::from_be_bytes(pair))
    }

    /// Reads `len` bytes starting at `offset`.
    pub fn bytes_at(&self, offset: usize, len: usize) -> Result<&'buf [u8], OutOfRange> {
        let end: usize = offset.checked_add(len).ok_or(OutOfRange {
            offset,
            wanted: len,
            len: self.bytes.len(),
        })?;

        self.bytes.get(offset..end).ok_or(OutOfRange {
            offset,
            wanted: len,
            len: self.bytes.len(),
        })
    }

    /// Reads `len` bytes starting at `offset` as text.
    ///
    /// Bytes that aren't valid UTF-8 are replaced, not rejected - IPTC
    /// predates any sane charset signaling, so rejecting would throw away
    /// half the files out there.
    pub fn str_at(&self, offset: usize, len: usize) -> Result<Cow<'buf, str>, OutOfRange> {
        Ok(String::from_utf8_lossy(self.bytes_at(offset, len)?))
    }
}
