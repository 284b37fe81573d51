//! Structural classification of CFF data.
//!
//! This walks just enough of a CFF header to tell an 8-bit font from a
//! CID-keyed one: the header, the Name INDEX and the offsets of the Top DICT
//! INDEX, followed by a short scan of the first Top DICT.
//!
//! See <https://adobe-type-tools.github.io/font-tech-notes/pdfs/5176.CFF.pdf>

use crate::{font_data::Cursor, format::FontFormat, read::ReadError};

/// Major and minor version of the only CFF version this understands.
const CFF_VERSION: [u8; 2] = [1, 0];

/// major, minor, hdrSize, offSize
const MIN_HEADER_SIZE: u8 = 4;

/// The two-byte `ROS` operator, which must be the first entry of the Top DICT
/// of a CID-keyed font.
const ROS_OPERATOR: [u8; 2] = [12, 30];

/// How many operands are scanned before checking for [`ROS_OPERATOR`].
///
/// `ROS` takes exactly three operands (registry, ordering, supplement).
const ROS_OPERAND_COUNT: usize = 3;

/// The two kinds of CFF font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CffKind {
    EightBit,
    CidKeyed,
}

impl CffKind {
    /// The format of a bare CFF font of this kind.
    pub fn bare(self) -> FontFormat {
        match self {
            CffKind::EightBit => FontFormat::Cff8Bit,
            CffKind::CidKeyed => FontFormat::CffCid,
        }
    }

    /// The format of an OpenType font wrapping CFF data of this kind.
    pub fn wrapped(self) -> FontFormat {
        match self {
            CffKind::EightBit => FontFormat::OpenTypeCff8Bit,
            CffKind::CidKeyed => FontFormat::OpenTypeCffCid,
        }
    }
}

/// Classify the CFF data starting at the cursor's position.
///
/// On failure the cursor is left where it was.
pub fn classify(cursor: &mut Cursor) -> Result<CffKind, ReadError> {
    let mut tentative = cursor.speculate();
    skip_header(&mut tentative)?;
    skip_name_index(&mut tentative)?;
    let mut top_dict = first_top_dict(&mut tentative)?;
    let kind = scan_top_dict(&mut top_dict)?;
    tentative.commit();
    Ok(kind)
}

fn skip_header(cursor: &mut Cursor) -> Result<(), ReadError> {
    cursor.expect_bytes(&CFF_VERSION)?;
    let header_size = cursor.read_u8()?;
    let off_size = cursor.read_u8()?;
    if !(1..=4).contains(&off_size) {
        return Err(ReadError::InvalidIndexOffsetSize(off_size));
    }
    if header_size < MIN_HEADER_SIZE {
        return Err(ReadError::InvalidHeaderSize(header_size));
    }
    advance(cursor, (header_size - MIN_HEADER_SIZE) as i64)
}

fn skip_name_index(cursor: &mut Cursor) -> Result<(), ReadError> {
    let count = cursor.read_u16()?;
    // an empty INDEX is only its count field
    if count == 0 {
        return Ok(());
    }
    let off_size = cursor.read_u8()?;
    // the offset array has count + 1 entries; the last one is one past the
    // size of the object data.
    advance(cursor, count as i64 * off_size as i64)?;
    let data_end = cursor.read_uint(off_size as usize)?;
    advance(cursor, to_distance(data_end)? - 1)
}

/// Returns a cursor over the bytes of the first Top DICT.
fn first_top_dict<'a>(cursor: &mut Cursor<'a>) -> Result<Cursor<'a>, ReadError> {
    let count = cursor.read_u16()?;
    if count == 0 {
        return Err(ReadError::MalformedData("Top DICT INDEX is empty"));
    }
    let off_size = cursor.read_u8()?;
    let start = cursor.read_uint(off_size as usize)?;
    let end = cursor.read_uint(off_size as usize)?;
    if start > end {
        return Err(ReadError::MalformedData("Top DICT offsets are not ascending"));
    }
    // Offsets are relative to the byte preceding the object data, which
    // follows the count - 1 offsets we have not read.
    let unread_offsets = (count as i64 - 1) * off_size as i64;
    let mut dict_start = cursor.clone();
    let mut dict_end = cursor.clone();
    advance(&mut dict_start, object_distance(unread_offsets, start)?)?;
    advance(&mut dict_end, object_distance(unread_offsets, end)?)?;
    let dict = cursor
        .data()
        .slice(dict_start.position()..dict_end.position())
        .ok_or(ReadError::OutOfBounds)?;
    Ok(dict.cursor_with(cursor.capability()))
}

/// Look for `ROS` after the leading operands of a Top DICT.
///
/// Only the first three operands are considered. Anything other than an
/// integer operand in that range means the dict starts with some other
/// operator, so the font is 8-bit.
fn scan_top_dict(dict: &mut Cursor) -> Result<CffKind, ReadError> {
    for _ in 0..ROS_OPERAND_COUNT {
        let operand_len = match dict.read_u8()? {
            // shortint, longint
            28 => 2,
            29 => 4,
            32..=246 => 0,
            247..=254 => 1,
            // operators, reals and reserved bytes
            _ => return Ok(CffKind::EightBit),
        };
        advance(dict, operand_len)?;
        if dict.is_at_end() {
            return Ok(CffKind::EightBit);
        }
    }
    if dict.expect_bytes(&ROS_OPERATOR).is_ok() {
        Ok(CffKind::CidKeyed)
    } else {
        Ok(CffKind::EightBit)
    }
}

fn advance(cursor: &mut Cursor, distance: i64) -> Result<(), ReadError> {
    if cursor.advance_by(distance) {
        Ok(())
    } else {
        Err(ReadError::OutOfBounds)
    }
}

fn to_distance(offset: u64) -> Result<i64, ReadError> {
    i64::try_from(offset).map_err(|_| ReadError::OutOfBounds)
}

/// The distance from the last offset read from an INDEX to the object data at
/// `offset`, skipping the `unread_offsets` bytes of offsets in between.
fn object_distance(unread_offsets: i64, offset: u64) -> Result<i64, ReadError> {
    unread_offsets
        .checked_add(to_distance(offset)?)
        .and_then(|distance| distance.checked_sub(1))
        .ok_or(ReadError::OutOfBounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tests::test_helpers::BeBuffer, Capability, FontData};

    const EIGHT_BIT_DICT: &[u8] = &[
        0xf8, 0x1b, 0x00, // 391 version
        0x8b, 0x8b, 0x8b, 0x8b, 0x05, // 0 0 0 0 FontBBox
    ];

    const CID_DICT: &[u8] = &[
        0xf8, 0x1b, 0xf8, 0x1c, 0x8b, 0x0c, 0x1e, // 391 392 0 ROS
        0xf8, 0x1d, 0x00, // 393 version
    ];

    fn make_index(mut buf: BeBuffer, off_size: u8, objects: &[&[u8]]) -> BeBuffer {
        buf = buf.push(objects.len() as u16);
        if objects.is_empty() {
            return buf;
        }
        buf = buf.push(off_size);
        // Offsets start at 1.
        let mut offset = 1u64;
        buf = buf.push_uint(offset, off_size as usize);
        for object in objects {
            offset += object.len() as u64;
            buf = buf.push_uint(offset, off_size as usize);
        }
        for object in objects {
            buf = buf.extend(object);
        }
        buf
    }

    fn make_cff(off_size: u8, top_dicts: &[&[u8]]) -> BeBuffer {
        let buf = BeBuffer::new().extend(&[1, 0, 4, off_size]);
        let buf = make_index(buf, 1, &[&b"Test"[..]]);
        let buf = make_index(buf, off_size, top_dicts);
        // String INDEX
        make_index(buf, 1, &[])
    }

    fn classify_bytes(bytes: &[u8]) -> Result<CffKind, ReadError> {
        let mut cursor = FontData::new(bytes).cursor();
        let result = classify(&mut cursor);
        if result.is_err() {
            assert_eq!(cursor.position(), 0, "cursor not restored");
        }
        result
    }

    #[test]
    fn eight_bit() {
        let buf = make_cff(1, &[EIGHT_BIT_DICT]);
        assert_eq!(classify_bytes(&buf), Ok(CffKind::EightBit));
    }

    #[test]
    fn cid_keyed() {
        let buf = make_cff(1, &[CID_DICT]);
        assert_eq!(classify_bytes(&buf), Ok(CffKind::CidKeyed));
    }

    #[test]
    fn top_dict_offset_sizes() {
        for off_size in 1..=4 {
            let buf = make_cff(off_size, &[CID_DICT]);
            assert_eq!(classify_bytes(&buf), Ok(CffKind::CidKeyed), "{off_size}");
            let buf = make_cff(off_size, &[EIGHT_BIT_DICT]);
            assert_eq!(classify_bytes(&buf), Ok(CffKind::EightBit), "{off_size}");
        }
    }

    #[test]
    fn name_index_offset_sizes() {
        for off_size in 1..=4 {
            let buf = BeBuffer::new().extend(&[1, 0, 4, 1]);
            let buf = make_index(buf, off_size, &[&b"First"[..], &b"Second"[..]]);
            let buf = make_index(buf, 1, &[CID_DICT]);
            assert_eq!(classify_bytes(&buf), Ok(CffKind::CidKeyed), "{off_size}");
        }
    }

    #[test]
    fn empty_name_index() {
        let buf = BeBuffer::new().extend(&[1, 0, 4, 1]);
        let buf = make_index(buf, 1, &[]);
        let buf = make_index(buf, 1, &[CID_DICT]);
        assert_eq!(classify_bytes(&buf), Ok(CffKind::CidKeyed));
    }

    #[test]
    fn extended_header() {
        // a header size of 6 leaves two bytes of padding to skip
        let buf = BeBuffer::new().extend(&[1, 0, 6, 1, 0xaa, 0xbb]);
        let buf = make_index(buf, 1, &[&b"Test"[..]]);
        let buf = make_index(buf, 1, &[CID_DICT]);
        assert_eq!(classify_bytes(&buf), Ok(CffKind::CidKeyed));
    }

    #[test]
    fn operand_encodings() {
        let dict: &[u8] = &[
            0x1c, 0x00, 0x01, // shortint
            0x1d, 0x00, 0x00, 0x00, 0x02, // longint
            0xfb, 0x10, // negative two byte int
            0x0c, 0x1e, // ROS
        ];
        let buf = make_cff(1, &[dict]);
        assert_eq!(classify_bytes(&buf), Ok(CffKind::CidKeyed));
    }

    #[test]
    fn ros_after_fourth_operand_is_not_seen() {
        let dict: &[u8] = &[0x8b, 0x8b, 0x8b, 0x8b, 0x0c, 0x1e];
        let buf = make_cff(1, &[dict]);
        assert_eq!(classify_bytes(&buf), Ok(CffKind::EightBit));
    }

    #[test]
    fn real_number_operand_ends_scan() {
        let dict: &[u8] = &[0x8b, 0x1e, 0x1f, 0x0c, 0x1e];
        let buf = make_cff(1, &[dict]);
        assert_eq!(classify_bytes(&buf), Ok(CffKind::EightBit));
    }

    #[test]
    fn scan_stops_at_end_of_first_dict() {
        // the first dict runs out after three operands; ROS begins the second
        let first: &[u8] = &[0x8b, 0x8b, 0x8b];
        let second: &[u8] = &[0x0c, 0x1e, 0x8b];
        let buf = make_cff(1, &[first, second]);
        assert_eq!(classify_bytes(&buf), Ok(CffKind::EightBit));
    }

    #[test]
    fn first_of_several_dicts() {
        let buf = make_cff(2, &[CID_DICT, EIGHT_BIT_DICT, EIGHT_BIT_DICT]);
        assert_eq!(classify_bytes(&buf), Ok(CffKind::CidKeyed));
    }

    #[test]
    fn bad_version() {
        let mut buf = make_cff(1, &[CID_DICT]).to_vec();
        buf[0] = 2;
        assert_eq!(classify_bytes(&buf), Err(ReadError::Mismatch));
    }

    #[test]
    fn bad_header_fields() {
        for (header_size, off_size, err) in [
            (4, 0, ReadError::InvalidIndexOffsetSize(0)),
            (4, 5, ReadError::InvalidIndexOffsetSize(5)),
            (3, 1, ReadError::InvalidHeaderSize(3)),
        ] {
            let mut buf = make_cff(1, &[CID_DICT]).to_vec();
            buf[2] = header_size;
            buf[3] = off_size;
            assert_eq!(classify_bytes(&buf), Err(err));
        }
    }

    #[test]
    fn empty_top_dict_index() {
        let buf = BeBuffer::new().extend(&[1, 0, 4, 1]);
        let buf = make_index(buf, 1, &[&b"Test"[..]]);
        let buf = make_index(buf, 1, &[]);
        assert!(matches!(
            classify_bytes(&buf),
            Err(ReadError::MalformedData(_))
        ));
    }

    #[test]
    fn descending_top_dict_offsets() {
        let buf = BeBuffer::new().extend(&[1, 0, 4, 1]);
        let buf = make_index(buf, 1, &[&b"Test"[..]])
            .push(1u16) // count
            .push(1u8) // off_size
            .push(5u8)
            .push(1u8)
            .extend(CID_DICT);
        assert!(matches!(
            classify_bytes(&buf),
            Err(ReadError::MalformedData(_))
        ));
    }

    #[test]
    fn top_dict_past_end_of_data() {
        let buf = BeBuffer::new().extend(&[1, 0, 4, 1]);
        let buf = make_index(buf, 1, &[&b"Test"[..]])
            .push(1u16)
            .push(2u8)
            .push(1u16)
            .push(0x1000u16)
            .extend(CID_DICT);
        assert_eq!(classify_bytes(&buf), Err(ReadError::OutOfBounds));
    }

    #[test]
    fn huge_top_dict_offsets() {
        for (count, offset) in [
            (1u16, i64::MAX as u64),
            (2, i64::MAX as u64),
            (2, u64::MAX),
        ] {
            let buf = BeBuffer::new()
                .extend(&[1, 0, 4, 1])
                .push(0u16) // empty Name INDEX
                .push(count)
                .push(8u8)
                .push_uint(offset, 8)
                .push_uint(offset, 8)
                .extend(&[0; 16]);
            assert_eq!(
                classify_bytes(&buf),
                Err(ReadError::OutOfBounds),
                "{count} {offset}"
            );
            assert_eq!(crate::identify(&buf), Err(crate::NotIdentified));
        }
    }

    #[test]
    fn name_index_ending_at_zero_steps_back() {
        // The last Name INDEX offset is 0, so the data "ends" one byte before
        // the start of the data and the Top DICT INDEX count overlaps it.
        let buf = BeBuffer::new()
            .extend(&[1, 0, 4, 1])
            .push(1u16) // Name INDEX count
            .push(1u8) // off_size
            .push(1u8)
            .push(0u8) // also the high byte of the Top DICT INDEX count
            .push(1u8) // low byte of the count
            .push(1u8) // off_size
            .push(1u8)
            .push(CID_DICT.len() as u8 + 1)
            .extend(CID_DICT);
        for capability in [Capability::Bidirectional, Capability::RandomAccess] {
            let mut cursor = buf.font_data().cursor_with(capability);
            assert_eq!(classify(&mut cursor), Ok(CffKind::CidKeyed), "{capability:?}");
        }
        let mut cursor = buf.font_data().cursor_with(Capability::Forward);
        assert_eq!(classify(&mut cursor), Err(ReadError::OutOfBounds));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn empty_top_dict() {
        let empty: &[u8] = &[];
        let buf = make_cff(1, &[empty, CID_DICT]);
        assert_eq!(classify_bytes(&buf), Err(ReadError::OutOfBounds));
    }

    #[test]
    fn operand_runs_past_dict() {
        let dict: &[u8] = &[0x8b, 0x1c, 0x00];
        let buf = make_cff(1, &[dict, CID_DICT]);
        assert_eq!(classify_bytes(&buf), Err(ReadError::OutOfBounds));
    }

    #[test]
    fn truncated() {
        let buf = make_cff(1, &[CID_DICT]);
        let dict_end = buf.len() - 2;
        for len in 0..dict_end {
            assert!(classify_bytes(&buf[..len]).is_err(), "{len}");
        }
        assert_eq!(classify_bytes(&buf[..dict_end]), Ok(CffKind::CidKeyed));
    }

    #[test]
    fn classify_at_offset() {
        let buf = BeBuffer::new()
            .extend(b"junk")
            .extend(&make_cff(1, &[CID_DICT]));
        let mut cursor = buf.font_data().cursor();
        assert!(classify(&mut cursor).is_err());
        assert!(cursor.advance_by(4));
        assert_eq!(classify(&mut cursor), Ok(CffKind::CidKeyed));
    }

    #[test]
    fn bidirectional_cursor() {
        let buf = make_cff(3, &[CID_DICT]);
        let mut cursor = buf.font_data().cursor_with(Capability::Bidirectional);
        assert_eq!(classify(&mut cursor), Ok(CffKind::CidKeyed));
    }

    #[test]
    fn kinds_map_to_formats() {
        assert_eq!(CffKind::EightBit.bare(), FontFormat::Cff8Bit);
        assert_eq!(CffKind::CidKeyed.bare(), FontFormat::CffCid);
        assert_eq!(CffKind::EightBit.wrapped(), FontFormat::OpenTypeCff8Bit);
        assert_eq!(CffKind::CidKeyed.wrapped(), FontFormat::OpenTypeCffCid);
    }
}
