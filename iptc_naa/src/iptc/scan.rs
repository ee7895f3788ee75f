//! Scanning an IPTC payload for tagged data sets.
//!
//! The payload is an unbounded run of records, each shaped like:
//!
//! - marker: `0x1C 0x02` (2 bytes)
//! - tag id: 1 byte
//! - size: unsigned 16-bit, big-endian
//! - value: `size` bytes of text
//!
//! There's no record count and no end marker, so the scanner walks the
//! whole payload one byte at a time, looking for the marker pair. It does
//! NOT jump ahead by `size` after a record: streams in the wild carry
//! misaligned or corrupt leading bytes, and a one-byte cursor still finds
//! every record after the garbage. The cost is that a `1C 02` pair sitting
//! *inside* a value's text is indistinguishable from a real marker and
//! produces a bogus record. That tradeoff is deliberate - don't "fix" it.

use winnow::{
    Parser as _,
    binary::{be_u16, u8},
    error::EmptyError,
    token::take,
};

use super::error::{IptcDataSetError, IptcDataSetResult};

/// The two marker bytes opening every Application Record data set.
const DATA_SET_MARKER: [u8; 2] = [0x1C, 0x02];

/// One raw record pulled out of the payload - not yet resolved to a key.
#[derive(Clone, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct RawDataSet {
    /// The record's one-byte tag id.
    pub tag: u8,

    /// The record's value, decoded as text.
    pub value: String,
}

/// Walks the whole payload and returns every recognized data set, in
/// stream order.
///
/// Truncated records come back as `Err` entries rather than aborting the
/// scan - the cursor just moves on to the next byte, per the recovery
/// policy above.
pub fn scan(payload: &[u8]) -> Vec<IptcDataSetResult> {
    let mut found: Vec<IptcDataSetResult> = Vec::new();

    for offset in 0..payload.len() {
        // reading one byte, then the other, to avoid re-reading pairs while
        // iterating
        if payload[offset] != DATA_SET_MARKER[0] {
            continue;
        }
        if payload.get(offset + 1) != Some(&DATA_SET_MARKER[1]) {
            continue;
        }

        found.push(data_set(&payload[offset + 2..]));
    }

    found
}

/// Reads one data set's header and value, starting just past its marker.
fn data_set(input: &[u8]) -> IptcDataSetResult {
    let remaining: usize = input.len();
    let input: &mut &[u8] = &mut &*input;

    let tag: u8 = u8.parse_next(input).map_err(|_: EmptyError| {
        log::warn!("Data set marker at end of stream - no tag id. Skipping.");
        IptcDataSetError::TruncatedHeader { remaining }
    })?;

    let declared: u16 = be_u16.parse_next(input).map_err(|_: EmptyError| {
        log::warn!("Data set with tag `{tag}` has no size field. Skipping.");
        IptcDataSetError::TruncatedHeader { remaining }
    })?;

    let left: usize = input.len();
    let raw: &[u8] = take(declared).parse_next(input).map_err(|_: EmptyError| {
        log::warn!(
            "Data set with tag `{tag}` declared `{declared}` byte(s), \
            but only `{left}` remain. Skipping."
        );
        IptcDataSetError::TruncatedValue {
            tag,
            declared,
            remaining: left,
        }
    })?;

    Ok(RawDataSet {
        tag,
        value: String::from_utf8_lossy(raw).into_owned(),
    })
}
