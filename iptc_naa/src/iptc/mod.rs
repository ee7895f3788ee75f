//! IPTC-NAA parsing.
//!
//! IPTC-NAA is the old press-wire metadata standard: captions, keywords,
//! bylines, credits. In image files it travels inside a Photoshop Image
//! Resources block - in a JPEG file, that's an APP13 marker with a
//! `Photoshop` identifier; in a TIFF file, tag 34377.
//!
//! Resource id `0x0404` holds the IPTC data. `0x040C` may hold a
//! JPEG-format thumbnail, `0x040F` an ICC profile, `0x0422` Exif, and
//! `0x0424` XMP - all handled elsewhere (or not at all).

use iptc_naa_types::iptc::{
    IptcKey, IptcKeyValue, IptcValue,
    application_record::{self, ApplicationRecordMap},
};

use crate::buffer::{OutOfRange, SegmentView};

pub mod error;
pub mod resources;
pub mod scan;

/// Parsed IPTC.
///
/// Pairs keep the stream's first-seen order; repeated tags fold into one
/// pair whose value is a list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Iptc {
    pub pairs: Vec<IptcKeyValue>,
}

impl Iptc {
    /// Parses an IPTC payload (the tagged-data-set stream itself, already
    /// located by [`resources::header_length`]).
    ///
    /// Truncated records are logged and skipped; use [`scan::scan`]
    /// directly if you need to see them. The result is a pure function of
    /// the payload bytes.
    pub fn parse<B: AsRef<[u8]>>(payload: B) -> Self {
        Self::parse_with_dict(payload, &application_record::APPLICATION_RECORD_MAP)
    }

    /// Like [`Iptc::parse`], but with a caller-supplied tag dictionary.
    pub fn parse_with_dict<B: AsRef<[u8]>>(payload: B, dict: &ApplicationRecordMap) -> Self {
        let mut pairs: Vec<IptcKeyValue> = Vec::new();

        for result in scan::scan(payload.as_ref()) {
            match result {
                Ok(data_set) => {
                    accumulate(&mut pairs, resolve(dict, data_set.tag), data_set.value);
                }
                Err(e) => {
                    log::warn!("Skipping unreadable data set. err: {e}");
                }
            }
        }

        Iptc { pairs }
    }

    /// Parses IPTC straight out of a Photoshop resource segment.
    ///
    /// Composes [`resources::header_length`] with [`Iptc::parse`]: finds
    /// the IPTC resource within `length` bytes at `offset`, then parses
    /// everything from the payload start to the end of that range.
    /// `Ok(None)` means the segment has no IPTC resource at all.
    ///
    /// # Errors
    ///
    /// `OutOfRange` when `offset`/`length` reach past the segment's actual
    /// bytes - a caller contract violation, not a property of the file.
    pub fn from_segment(
        segment: &SegmentView,
        offset: usize,
        length: usize,
    ) -> Result<Option<Self>, OutOfRange> {
        let Some(header_len) = resources::header_length(segment, offset, length)? else {
            return Ok(None);
        };

        // a resource head at the very end of the range leaves nothing to scan
        let payload_len: usize = length.saturating_sub(header_len);
        if payload_len == 0 {
            log::trace!("IPTC resource found, but its payload is empty.");
            return Ok(Some(Self::default()));
        }

        let payload: &[u8] = segment.bytes_at(offset + header_len, payload_len)?;
        Ok(Some(Self::parse(payload)))
    }
}

/// Resolves a tag id against the dictionary.
///
/// Unknown ids stay numeric - the output keeps both key shapes rather than
/// inventing names for datasets we don't know.
fn resolve(dict: &ApplicationRecordMap, tag: u8) -> IptcKey {
    match dict.get(&tag) {
        Some(name) => IptcKey::Name(name),
        None => IptcKey::Tag(tag),
    }
}

/// Folds one decoded value into the pair list.
///
/// A new key is inserted as a scalar at the end of the list; a repeated key
/// promotes (or appends) in place, so first-seen order is preserved.
fn accumulate(pairs: &mut Vec<IptcKeyValue>, key: IptcKey, value: String) {
    match pairs.iter_mut().find(|pair| pair.key == key) {
        Some(existing) => existing.value.push(value),
        None => pairs.push(IptcKeyValue {
            key,
            value: IptcValue::Single(value),
        }),
    }
}
