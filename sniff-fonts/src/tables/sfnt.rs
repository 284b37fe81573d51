//! TrueType and OpenType table directories
//!
//! See <https://learn.microsoft.com/en-us/typography/opentype/spec/otff>

use crate::{font_data::Cursor, format::FontFormat, read::ReadError, tag::Tag};

use super::cff;

/// `sfntVersion` of a font with TrueType outlines.
pub const TT_SFNT_VERSION: u32 = 0x00010000;
/// `sfntVersion` used by some Apple fonts.
pub const TRUE_SFNT_VERSION: u32 = u32::from_be_bytes(*b"true");
/// `sfntVersion` of a font with CFF outlines.
pub const CFF_SFNT_VERSION: u32 = u32::from_be_bytes(*b"OTTO");
/// `ttcTag` at the start of a font collection.
pub const TTC_HEADER_TAG: u32 = u32::from_be_bytes(*b"ttcf");

pub const CFF_TABLE_TAG: Tag = Tag::new(b"CFF ");

/// searchRange, entrySelector, rangeShift
const DIRECTORY_SEARCH_FIELDS_LEN: i64 = 6;
/// checksum, offset, length
const TABLE_RECORD_TAIL_LEN: i64 = 12;

/// Table offsets at or above this are treated as corrupt.
const MAX_TABLE_OFFSET: u32 = 0x7FFF_FFFF;

/// Identify a TrueType font or font collection by its leading magic number.
pub fn truetype(cursor: &mut Cursor) -> Result<FontFormat, ReadError> {
    let mut tentative = cursor.speculate();
    let format = match tentative.read_u32()? {
        TT_SFNT_VERSION | TRUE_SFNT_VERSION => FontFormat::TrueType,
        TTC_HEADER_TAG => FontFormat::TrueTypeCollection,
        _ => return Err(ReadError::Mismatch),
    };
    tentative.commit();
    Ok(format)
}

/// Identify an OpenType font with CFF outlines.
///
/// The table directory is searched for a `CFF ` table, which is then
/// classified in place. Offsets in the directory are relative to the
/// position of the cursor on entry.
pub fn opentype(cursor: &mut Cursor) -> Result<FontFormat, ReadError> {
    let font_start = cursor.clone();
    let mut tentative = cursor.speculate();
    if tentative.read_u32()? != CFF_SFNT_VERSION {
        return Err(ReadError::Mismatch);
    }
    let num_tables = tentative.read_u16()?;
    skip(&mut tentative, DIRECTORY_SEARCH_FIELDS_LEN)?;
    for _ in 0..num_tables {
        let tag = tentative.read_tag()?;
        if tag != CFF_TABLE_TAG {
            skip(&mut tentative, TABLE_RECORD_TAIL_LEN)?;
            continue;
        }
        let _checksum = tentative.read_u32()?;
        let offset = tentative.read_u32()?;
        let _length = tentative.read_u32()?;
        match classify_table(&font_start, offset) {
            Ok(kind) => {
                tentative.commit();
                return Ok(kind.wrapped());
            }
            Err(e) => log::trace!("'{tag}' table at offset {offset} is not CFF: {e}"),
        }
    }
    Err(ReadError::TableIsMissing(CFF_TABLE_TAG))
}

fn classify_table(font_start: &Cursor, offset: u32) -> Result<cff::CffKind, ReadError> {
    if offset >= MAX_TABLE_OFFSET {
        return Err(ReadError::MalformedData("table offset too large"));
    }
    let mut table = font_start.clone();
    skip(&mut table, offset as i64)?;
    cff::classify(&mut table)
}

fn skip(cursor: &mut Cursor, distance: i64) -> Result<(), ReadError> {
    if cursor.advance_by(distance) {
        Ok(())
    } else {
        Err(ReadError::OutOfBounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tests::test_helpers::BeBuffer, FontData};

    fn sfnt_header(version: &[u8; 4], num_tables: u16) -> BeBuffer {
        BeBuffer::new()
            .extend(version)
            .push(num_tables)
            .push(0u16) // searchRange
            .push(0u16) // entrySelector
            .push(0u16) // rangeShift
    }

    fn table_record(buf: BeBuffer, tag: &[u8; 4], offset: u32, length: u32) -> BeBuffer {
        buf.push(Tag::new(tag))
            .push(0u32) // checksum
            .push(offset)
            .push(length)
    }

    #[test]
    fn truetype_magic() {
        for (bytes, expected) in [
            (&[0u8, 1, 0, 0][..], FontFormat::TrueType),
            (&b"true"[..], FontFormat::TrueType),
            (&b"ttcf"[..], FontFormat::TrueTypeCollection),
        ] {
            let mut cursor = FontData::new(bytes).cursor();
            assert_eq!(truetype(&mut cursor), Ok(expected));
            assert_eq!(cursor.position(), 4);
        }
    }

    #[test]
    fn not_truetype() {
        for bytes in [&b"OTTO"[..], &b"ttc"[..], &[0u8, 1, 0, 1][..], &[][..]] {
            let mut cursor = FontData::new(bytes).cursor();
            assert!(truetype(&mut cursor).is_err());
            assert_eq!(cursor.position(), 0);
        }
    }

    #[test]
    fn opentype_cid() {
        let data = FontData::new(sniff_test_data::sfnt::OTF_CID);
        let mut cursor = data.cursor();
        assert_eq!(opentype(&mut cursor), Ok(FontFormat::OpenTypeCffCid));
    }

    #[test]
    fn opentype_eight_bit() {
        let data = FontData::new(sniff_test_data::sfnt::OTF_8BIT);
        let mut cursor = data.cursor();
        assert_eq!(opentype(&mut cursor), Ok(FontFormat::OpenTypeCff8Bit));
    }

    #[test]
    fn cff_table_after_other_tables() {
        let data = FontData::new(sniff_test_data::sfnt::OTF_CID_SECOND_TABLE);
        let mut cursor = data.cursor();
        assert_eq!(opentype(&mut cursor), Ok(FontFormat::OpenTypeCffCid));
    }

    #[test]
    fn missing_cff_table() {
        let buf = sfnt_header(b"OTTO", 2);
        let buf = table_record(buf, b"head", 44, 0);
        let buf = table_record(buf, b"cmap", 44, 0);
        let mut cursor = buf.font_data().cursor();
        assert_eq!(
            opentype(&mut cursor),
            Err(ReadError::TableIsMissing(CFF_TABLE_TAG))
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn no_tables() {
        let buf = sfnt_header(b"OTTO", 0);
        let mut cursor = buf.font_data().cursor();
        assert!(opentype(&mut cursor).is_err());
    }

    #[test]
    fn truncated_directory() {
        // claims three tables but only has one record
        let buf = sfnt_header(b"OTTO", 3);
        let buf = table_record(buf, b"head", 0, 0);
        let mut cursor = buf.font_data().cursor();
        assert_eq!(opentype(&mut cursor), Err(ReadError::OutOfBounds));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn bad_cff_table_does_not_end_search() {
        let cff = sniff_test_data::cff::CFF_CID;
        let buf = sfnt_header(b"OTTO", 3);
        // points past the end of the font
        let buf = table_record(buf, b"CFF ", 0x1000, 0);
        // points at the directory
        let buf = table_record(buf, b"CFF ", 0, 0);
        let buf = table_record(buf, b"CFF ", 60, cff.len() as u32).extend(cff);
        assert_eq!(buf.len(), 60 + cff.len());
        let mut cursor = buf.font_data().cursor();
        assert_eq!(opentype(&mut cursor), Ok(FontFormat::OpenTypeCffCid));
    }

    #[test]
    fn huge_table_offset() {
        let buf = sfnt_header(b"OTTO", 1);
        let buf = table_record(buf, b"CFF ", MAX_TABLE_OFFSET, 0);
        let mut cursor = buf.font_data().cursor();
        assert!(opentype(&mut cursor).is_err());
    }

    #[test]
    fn offsets_relative_to_font_start() {
        let font = sniff_test_data::sfnt::OTF_CID;
        let buf = BeBuffer::new().extend(b"prefix").extend(font);
        let mut cursor = buf.font_data().cursor();
        assert!(cursor.advance_by(6));
        assert_eq!(opentype(&mut cursor), Ok(FontFormat::OpenTypeCffCid));
    }

    #[test]
    fn truetype_is_not_opentype() {
        let mut cursor = FontData::new(sniff_test_data::sfnt::TRUETYPE).cursor();
        assert_eq!(opentype(&mut cursor), Err(ReadError::Mismatch));
        assert_eq!(cursor.position(), 0);
    }
}
