//! Locating IPTC inside a Photoshop Image Resources block.
//!
//! Photoshop stores auxiliary data as a run of `8BIM` resources inside a
//! JPEG APP13 segment (or TIFF tag 34377). Each resource has a two-byte id;
//! `0x0404` is IPTC-NAA. There's much more in the Photoshop format than
//! just IPTC - thumbnails, ICC profiles, even nested Exif - but those other
//! resource ids are none of our business here.
//!
//! The functions in this module are what the external dispatcher calls
//! before parsing: [`can_handle`] to route the segment to this parser at
//! all, then [`header_length`] to find where the tagged data sets start.

use crate::buffer::{OutOfRange, SegmentView};

/// The marker code of a JPEG APP13 segment.
const APP13_MARKER_CODE: u8 = 0xED;

/// The identifier text following an APP13 marker ("Photoshop 3.0\0", but
/// only the part every known writer agrees on).
const PHOTOSHOP_IDENTIFIER: &[u8] = b"Photoshop";

/// The start of an IPTC-NAA resource: the `8BIM` resource signature
/// followed by resource id `0x0404`.
const IPTC_RESOURCE_HEAD: &[u8] = &[0x38, 0x42, 0x49, 0x4D, 0x04, 0x04];

/// Checks whether the segment at `offset` is one this parser understands.
///
/// True iff the byte at `offset + 1` is the APP13 marker code and the
/// identifier text `Photoshop` sits at `offset + 4`. Pure predicate - no
/// partial matches, and a read past the end just means "no".
pub fn can_handle(segment: &SegmentView, offset: usize) -> bool {
    let Ok(marker_code) = segment.u8_at(offset + 1) else {
        return false;
    };
    if marker_code != APP13_MARKER_CODE {
        return false;
    }

    match segment.bytes_at(offset + 4, PHOTOSHOP_IDENTIFIER.len()) {
        Ok(identifier) => identifier == PHOTOSHOP_IDENTIFIER,
        Err(_) => false,
    }
}

/// Finds where the IPTC tagged data sets begin inside the segment.
///
/// Scans `length` bytes from `offset` for the first IPTC-NAA resource head.
/// On a hit, skips the resource's padded name field and returns the payload
/// start, relative to `offset`. `Ok(None)` means the segment simply has no
/// IPTC resource - callers should skip this parser, not report an error.
///
/// # Errors
///
/// `OutOfRange` only when a resource head is found but the name-length byte
/// sits past the buffer end. That means the caller handed us a `length`
/// extending beyond its buffer, which is a contract violation.
pub fn header_length(
    segment: &SegmentView,
    offset: usize,
    length: usize,
) -> Result<Option<usize>, OutOfRange> {
    for i in 0..length {
        // windows that would cross the buffer end can't match anything.
        match segment.bytes_at(offset + i, IPTC_RESOURCE_HEAD.len()) {
            Ok(head) if head == IPTC_RESOURCE_HEAD => (),
            Ok(_) | Err(_) => continue,
        }

        // get the length of the name header, which is padded to an even
        // number of bytes
        let mut name_header_len: usize = segment.u8_at(offset + i + 7)?.into();
        if name_header_len % 2 != 0 {
            name_header_len += 1;
        }

        // check for the pre-Photoshop 6 format: no name was written, but
        // four bytes are reserved for it anyway
        if name_header_len == 0 {
            log::trace!("Zero-length resource name. Assuming pre-Photoshop 6 format.");
            name_header_len = 4;
        }

        return Ok(Some(i + 8 + name_header_len));
    }

    log::trace!("No IPTC-NAA resource found in `{length}` byte(s). Segment has no IPTC.");
    Ok(None)
}
