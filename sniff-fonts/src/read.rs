//! Errors produced while reading font headers

use crate::tag::Tag;

/// An error that occurs while decoding a font header.
///
/// None of these are fatal: a detector that hits one simply does not match,
/// and the next detector is tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// Fewer bytes remained than a field requires, or a computed offset
    /// points outside the data.
    OutOfBounds,
    /// The bytes did not match an expected literal.
    Mismatch,
    /// A CFF header declared a header size smaller than the fixed header.
    InvalidHeaderSize(u8),
    /// The `offSize` field in a CFF header or INDEX was not in `1..=4`.
    InvalidIndexOffsetSize(u8),
    /// An integer width wider than the decode target was requested.
    InvalidIntegerWidth(usize),
    TableIsMissing(Tag),
    MalformedData(&'static str),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "An offset was out of bounds"),
            ReadError::Mismatch => write!(f, "Unexpected bytes"),
            ReadError::InvalidHeaderSize(size) => {
                write!(f, "Invalid header size {size} (must be >= 4)")
            }
            ReadError::InvalidIndexOffsetSize(size) => {
                write!(f, "Invalid offset size {size} (expected 1-4)")
            }
            ReadError::InvalidIntegerWidth(width) => {
                write!(f, "Cannot decode a {width} byte integer")
            }
            ReadError::TableIsMissing(tag) => write!(f, "the {tag} table is missing"),
            ReadError::MalformedData(msg) => write!(f, "Malformed data: '{msg}'"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {}

/// The data did not match the structure of any supported font format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotIdentified;

impl std::fmt::Display for NotIdentified {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "font format could not be identified")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NotIdentified {}
