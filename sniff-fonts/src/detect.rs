//! Format detectors and the order they are tried in.
//!
//! Each detector inspects the data at the cursor's position and either
//! returns the format it recognized or fails, leaving the cursor in place.

use crate::{font_data::Cursor, format::FontFormat, read::ReadError, tables};

pub use tables::sfnt::{opentype, truetype};
pub use tables::type1::{pfa, pfb};

/// A function that recognizes one family of font formats.
pub type Detector = fn(&mut Cursor<'_>) -> Result<FontFormat, ReadError>;

/// Every detector, paired with a name for logging, in the order they are
/// tried.
///
/// Bare CFF comes last: its two signature bytes are the weakest evidence of
/// any format here.
pub const DETECTORS: [(&str, Detector); 5] = [
    ("PFA", pfa),
    ("PFB", pfb),
    ("TrueType", truetype),
    ("OpenType", opentype),
    ("CFF", cff),
];

/// Identify a bare CFF font.
pub fn cff(cursor: &mut Cursor) -> Result<FontFormat, ReadError> {
    tables::cff::classify(cursor).map(tables::cff::CffKind::bare)
}

/// Run each detector at the cursor's position, returning the first match.
///
/// The cursor is moved past the recognized header on success, and left where
/// it was otherwise.
pub fn identify_at(cursor: &mut Cursor) -> Option<FontFormat> {
    for (name, detector) in DETECTORS {
        match detector(cursor) {
            Ok(format) => {
                log::debug!("identified {format}");
                return Some(format);
            }
            Err(e) => log::trace!("not {name}: {e}"),
        }
    }
    None
}
