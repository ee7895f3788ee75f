//! # `iptc_naa`
//!
//! A library to parse IPTC-NAA press metadata (captions, keywords, bylines,
//! and friends) out of Photoshop Image Resources blocks.
//!
//! ## Where does this data live?
//!
//! In a JPEG file, an APP13 marker with an identifier of `Photoshop 3.0`
//! contains Photoshop Image Resources. In a TIFF file, tag 34377 contains
//! the same block. Within that block, resource id `0x0404` holds IPTC-NAA
//! data.
//!
//! This crate does NOT walk JPEG segments or TIFF IFDs itself - a container
//! parser hands it the segment bytes, and gets back a structured mapping.
//! That split keeps this crate a good citizen inside a larger metadata
//! extraction stack, next to sibling Exif/XMP/ICC parsers.
//!
//! ## Usage
//!
//! The dispatcher-facing flow is three calls:
//!
//! ```
//! use iptc_naa::buffer::SegmentView;
//! use iptc_naa::iptc::{Iptc, resources};
//!
//! // a tiny APP13 segment: marker, identifier, one IPTC resource with a
//! // single Keywords record
//! let mut segment: Vec<u8> = vec![0xFF, 0xED, 0x00, 0x00];
//! segment.extend_from_slice(b"Photoshop 3.0\0");
//! segment.extend_from_slice(&[0x38, 0x42, 0x49, 0x4D, 0x04, 0x04]); // 8BIM + 0x0404
//! segment.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00]); // legacy name + size
//! segment.extend_from_slice(&[0x1C, 0x02, 25, 0x00, 0x04]);
//! segment.extend_from_slice(b"news");
//!
//! let view = SegmentView::new(&segment);
//! assert!(resources::can_handle(&view, 0));
//!
//! let iptc: Iptc = Iptc::from_segment(&view, 0, segment.len())
//!     .expect("offsets are in range")
//!     .expect("segment carries an IPTC resource");
//! assert_eq!(iptc.pairs[0].value, iptc_naa_types::iptc::IptcValue::Single("news".into()));
//! ```

#![forbid(unsafe_code)]

pub mod buffer;
pub mod iptc;

/// Internal utility methods.
pub(crate) mod util {
    /// Helper function to initialize the logger for testing.
    #[cfg(test)]
    pub fn logger() {
        _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::max())
            .format_file(true)
            .format_line_number(true)
            .try_init();
    }
}
