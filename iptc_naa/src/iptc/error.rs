/// The result of scanning one tagged data set.
///
/// A scan as a whole doesn't fail - each recognized marker either yields a
/// data set or an error describing why that one record couldn't be read.
/// For more info, see [`crate::iptc::scan`].
pub type IptcDataSetResult = Result<crate::iptc::scan::RawDataSet, IptcDataSetError>;

/// A single tagged data set couldn't be read.
///
/// These are recoverable: the scanner reports the broken record and keeps
/// scanning from the next byte. Only buffer-contract violations
/// ([`crate::buffer::OutOfRange`]) are fatal.
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum IptcDataSetError {
    /// A marker was found, but the buffer ended before the record's tag id
    /// and size could be read.
    TruncatedHeader {
        /// Bytes left after the marker.
        remaining: usize,
    },

    /// The record declared more value bytes than the buffer has left.
    TruncatedValue {
        /// The record's tag id.
        tag: u8,

        /// How many value bytes the record declared.
        declared: u16,

        /// How many bytes were actually left.
        remaining: usize,
    },
}

impl core::fmt::Display for IptcDataSetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IptcDataSetError::TruncatedHeader { remaining } => write!(
                f,
                "Found a data set marker, but the stream ended before its \
                header. remaining: `{remaining}` byte(s)"
            ),

            IptcDataSetError::TruncatedValue {
                tag,
                declared,
                remaining,
            } => write!(
                f,
                "Data set with tag `{tag}` declared `{declared}` value \
                byte(s), but only `{remaining}` remain in the stream."
            ),
        }
    }
}

impl core::error::Error for IptcDataSetError {}
