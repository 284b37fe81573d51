//! Hand-assembled font headers shared by the sniff-fonts tests and benchmarks.
//!
//! Only the structures format identification looks at are filled in. None of
//! these are usable fonts.

pub mod cff;

/// Thirteen bytes that match no supported signature.
pub static UNRECOGNIZED: &[u8] = b"Hello, world!";

pub mod type1 {

    pub static PFA: &[u8] = b"%!PS-AdobeFont-1.0: TestFont 001.000
%%Title: TestFont
%%CreationDate: Thu Jan 1 00:00:00 1998
11 dict begin
/FontName /TestFont def
/PaintType 0 def
/FontType 1 def
end
";

    pub static PFA_FONTTYPE1: &[u8] = b"%!FontType1-1.1: TestFont 001.000
11 dict begin
/FontName /TestFont def
end
";

    #[rustfmt::skip]
    pub static PFB: &[u8] = &[
        0x80, 0x01,             // ASCII segment
        0x2d, 0x00, 0x00, 0x00, // length 45, little-endian
        // %!PS-AdobeFont-1.0: TestFont 001.000\n
        0x25, 0x21, 0x50, 0x53, 0x2d, 0x41, 0x64, 0x6f, 0x62, 0x65,
        0x46, 0x6f, 0x6e, 0x74, 0x2d, 0x31, 0x2e, 0x30, 0x3a, 0x20,
        0x54, 0x65, 0x73, 0x74, 0x46, 0x6f, 0x6e, 0x74, 0x20, 0x30,
        0x30, 0x31, 0x2e, 0x30, 0x30, 0x30, 0x0a,
        // end\n
        0x65, 0x6e, 0x64, 0x0a,
        // /a/b
        0x2f, 0x61, 0x2f, 0x62,
        0x80, 0x03,             // EOF segment
    ];
}

pub mod sfnt {

    #[rustfmt::skip]
    pub static TRUETYPE: &[u8] = &[
        0x00, 0x01, 0x00, 0x00, // sfntVersion
        0x00, 0x00,             // numTables
        0x00, 0x00,             // searchRange
        0x00, 0x00,             // entrySelector
        0x00, 0x00,             // rangeShift
    ];

    #[rustfmt::skip]
    pub static TTC: &[u8] = &[
        0x74, 0x74, 0x63, 0x66, // ttcf
        0x00, 0x01, 0x00, 0x00, // version 1.0
        0x00, 0x00, 0x00, 0x00, // numFonts
    ];

    /// An OpenType font whose only table is [`crate::cff::CFF_8BIT`].
    #[rustfmt::skip]
    pub static OTF_8BIT: &[u8] = &[
        0x4f, 0x54, 0x54, 0x4f, // OTTO
        0x00, 0x01,             // numTables
        0x00, 0x10,             // searchRange
        0x00, 0x00,             // entrySelector
        0x00, 0x00,             // rangeShift
        0x43, 0x46, 0x46, 0x20, // CFF
        0x00, 0x00, 0x00, 0x00, // checksum
        0x00, 0x00, 0x00, 0x1c, // offset 28
        0x00, 0x00, 0x00, 0x1e, // length 30
        // CFF table
        0x01, 0x00, 0x04, 0x01,
        0x00, 0x01, 0x01, 0x01, 0x05, 0x54, 0x65, 0x73, 0x74,
        0x00, 0x01, 0x01, 0x01, 0x09,
        0xf8, 0x1b, 0x00, 0x8b, 0x8b, 0x8b, 0x8b, 0x05,
        0x00, 0x00,
        0x00, 0x00,
    ];

    /// An OpenType font whose only table is [`crate::cff::CFF_CID`].
    #[rustfmt::skip]
    pub static OTF_CID: &[u8] = &[
        0x4f, 0x54, 0x54, 0x4f, // OTTO
        0x00, 0x01,             // numTables
        0x00, 0x10,             // searchRange
        0x00, 0x00,             // entrySelector
        0x00, 0x00,             // rangeShift
        0x43, 0x46, 0x46, 0x20, // CFF
        0x00, 0x00, 0x00, 0x00, // checksum
        0x00, 0x00, 0x00, 0x1c, // offset 28
        0x00, 0x00, 0x00, 0x20, // length 32
        // CFF table
        0x01, 0x00, 0x04, 0x01,
        0x00, 0x01, 0x01, 0x01, 0x05, 0x54, 0x65, 0x73, 0x74,
        0x00, 0x01, 0x01, 0x01, 0x0b,
        0xf8, 0x1b, 0xf8, 0x1c, 0x8b, 0x0c, 0x1e, 0xf8, 0x1d, 0x00,
        0x00, 0x00,
        0x00, 0x00,
    ];

    /// A CID-keyed OpenType font with a `BASE` table record before the
    /// `CFF ` record.
    #[rustfmt::skip]
    pub static OTF_CID_SECOND_TABLE: &[u8] = &[
        0x4f, 0x54, 0x54, 0x4f, // OTTO
        0x00, 0x02,             // numTables
        0x00, 0x20,             // searchRange
        0x00, 0x01,             // entrySelector
        0x00, 0x00,             // rangeShift
        0x42, 0x41, 0x53, 0x45, // BASE
        0x00, 0x00, 0x00, 0x00, // checksum
        0x00, 0x00, 0x00, 0x4c, // offset 76
        0x00, 0x00, 0x00, 0x08, // length 8
        0x43, 0x46, 0x46, 0x20, // CFF
        0x00, 0x00, 0x00, 0x00, // checksum
        0x00, 0x00, 0x00, 0x2c, // offset 44
        0x00, 0x00, 0x00, 0x20, // length 32
        // CFF table
        0x01, 0x00, 0x04, 0x01,
        0x00, 0x01, 0x01, 0x01, 0x05, 0x54, 0x65, 0x73, 0x74,
        0x00, 0x01, 0x01, 0x01, 0x0b,
        0xf8, 0x1b, 0xf8, 0x1c, 0x8b, 0x0c, 0x1e, 0xf8, 0x1d, 0x00,
        0x00, 0x00,
        0x00, 0x00,
        // BASE table
        0x00, 0x01, 0x00, 0x00, // version 1.0
        0x00, 0x00,             // horizAxisOffset
        0x00, 0x00,             // vertAxisOffset
    ];
}
