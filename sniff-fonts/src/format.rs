//! The result of identification

use std::fmt;

/// The format of a font file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontFormat {
    /// Type 1 font in PFA (ASCII) format
    Type1Pfa,
    /// Type 1 font in PFB (binary segmented) format
    Type1Pfb,
    /// 8-bit CFF font
    Cff8Bit,
    /// CID-keyed CFF font
    CffCid,
    /// TrueType font
    TrueType,
    /// TrueType collection
    TrueTypeCollection,
    /// OpenType wrapper around an 8-bit CFF font
    OpenTypeCff8Bit,
    /// OpenType wrapper around a CID-keyed CFF font
    OpenTypeCffCid,
    /// Mac OS X dfont; only ever produced from a file extension
    DFont,
    Unknown,
}

impl FontFormat {
    /// The format implied by a file extension, without looking at contents.
    ///
    /// Only `.dfont` is recognized: its resource-fork layout has no
    /// signature that content inspection could rely on. The extension may be
    /// given with or without the leading dot.
    pub fn from_extension(extension: &str) -> Option<FontFormat> {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        extension
            .eq_ignore_ascii_case("dfont")
            .then_some(FontFormat::DFont)
    }

    /// A human-readable name for this format.
    pub fn label(self) -> &'static str {
        match self {
            FontFormat::Type1Pfa => "Type1 font in PFA format",
            FontFormat::Type1Pfb => "Type1 font in PFB format",
            FontFormat::Cff8Bit => "8-bit CFF font",
            FontFormat::CffCid => "CID CFF font",
            FontFormat::TrueType => "TrueType font",
            FontFormat::TrueTypeCollection => "TrueType collection",
            FontFormat::OpenTypeCff8Bit => "OpenType container of 8-bit CFF font",
            FontFormat::OpenTypeCffCid => "OpenType container of CID-keyed CFF font",
            FontFormat::DFont => "Mac OS X dfont",
            FontFormat::Unknown => "(unknown)",
        }
    }

    pub fn is_type1(self) -> bool {
        matches!(self, FontFormat::Type1Pfa | FontFormat::Type1Pfb)
    }

    /// `true` for CFF data, whether bare or wrapped in an OpenType container.
    pub fn is_cff(self) -> bool {
        matches!(
            self,
            FontFormat::Cff8Bit
                | FontFormat::CffCid
                | FontFormat::OpenTypeCff8Bit
                | FontFormat::OpenTypeCffCid
        )
    }

    pub fn is_opentype(self) -> bool {
        matches!(
            self,
            FontFormat::OpenTypeCff8Bit | FontFormat::OpenTypeCffCid
        )
    }

    pub fn is_cid_keyed(self) -> bool {
        matches!(self, FontFormat::CffCid | FontFormat::OpenTypeCffCid)
    }
}

impl fmt::Display for FontFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
