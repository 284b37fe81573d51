//! Type 1 fonts in PFA and PFB form
//!
//! Both serializations begin with the PostScript comment that identifies the
//! font program. PFB wraps it in a segment header.
//!
//! See <https://adobe-type-tools.github.io/font-tech-notes/pdfs/T1_SPEC.pdf>

use crate::{font_data::Cursor, format::FontFormat, read::ReadError};

/// The two comments a Type 1 font program may begin with.
pub const SIGNATURES: [&[u8]; 2] = [b"%!PS-AdobeFont-1", b"%!FontType1"];

/// Marker byte and ASCII segment type at the start of a PFB file.
pub const PFB_SEGMENT_HEADER: [u8; 2] = [0x80, 0x01];

/// Identify a PFA font, which begins directly with a signature.
pub fn pfa(cursor: &mut Cursor) -> Result<FontFormat, ReadError> {
    match_signature(cursor, u32::MAX)?;
    Ok(FontFormat::Type1Pfa)
}

/// Identify a PFB font, whose first segment is the ASCII part of the font.
pub fn pfb(cursor: &mut Cursor) -> Result<FontFormat, ReadError> {
    let mut tentative = cursor.speculate();
    tentative.expect_bytes(&PFB_SEGMENT_HEADER)?;
    let segment_len = tentative.read_u32_le()?;
    match_signature(&mut tentative, segment_len)?;
    tentative.commit();
    Ok(FontFormat::Type1Pfb)
}

/// Match the first signature that fits in `max_len` bytes.
fn match_signature(cursor: &mut Cursor, max_len: u32) -> Result<(), ReadError> {
    let mut last_err = ReadError::Mismatch;
    for signature in SIGNATURES {
        if signature.len() as u64 > max_len as u64 {
            continue;
        }
        match cursor.expect_bytes(signature) {
            Ok(()) => return Ok(()),
            Err(e) => last_err = e,
        }
    }
    Err(last_err)
}
