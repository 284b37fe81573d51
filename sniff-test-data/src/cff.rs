//! Bare CFF fonts

/// An 8-bit CFF font named "Test".
#[rustfmt::skip]
pub static CFF_8BIT: &[u8] = &[
    // Header
    0x01, 0x00,             // major 1, minor 0
    0x04,                   // hdrSize
    0x01,                   // offSize
    // Name INDEX
    0x00, 0x01,             // count
    0x01,                   // offSize
    0x01, 0x05,             // offsets
    0x54, 0x65, 0x73, 0x74, // Test
    // Top DICT INDEX
    0x00, 0x01,             // count
    0x01,                   // offSize
    0x01, 0x09,             // offsets
    0xf8, 0x1b, 0x00,       // 391 version
    0x8b, 0x8b, 0x8b, 0x8b, // 0 0 0 0
    0x05,                   // FontBBox
    // String INDEX
    0x00, 0x00,
    // Global Subr INDEX
    0x00, 0x00,
];

/// A CID-keyed CFF font named "Test".
#[rustfmt::skip]
pub static CFF_CID: &[u8] = &[
    // Header
    0x01, 0x00,             // major 1, minor 0
    0x04,                   // hdrSize
    0x01,                   // offSize
    // Name INDEX
    0x00, 0x01,             // count
    0x01,                   // offSize
    0x01, 0x05,             // offsets
    0x54, 0x65, 0x73, 0x74, // Test
    // Top DICT INDEX
    0x00, 0x01,             // count
    0x01,                   // offSize
    0x01, 0x0b,             // offsets
    0xf8, 0x1b,             // 391 "Adobe"
    0xf8, 0x1c,             // 392 "Identity"
    0x8b,                   // 0
    0x0c, 0x1e,             // ROS
    0xf8, 0x1d, 0x00,       // 393 version
    // String INDEX
    0x00, 0x00,
    // Global Subr INDEX
    0x00, 0x00,
];

/// A CID-keyed CFF font with a longer header and two-byte offsets.
#[rustfmt::skip]
pub static CFF_CID_WIDE_OFFSETS: &[u8] = &[
    // Header
    0x01, 0x00,             // major 1, minor 0
    0x05,                   // hdrSize
    0x02,                   // offSize
    0x00,                   // padding
    // Name INDEX
    0x00, 0x01,             // count
    0x02,                   // offSize
    0x00, 0x01, 0x00, 0x05, // offsets
    0x54, 0x65, 0x73, 0x74, // Test
    // Top DICT INDEX
    0x00, 0x01,             // count
    0x02,                   // offSize
    0x00, 0x01, 0x00, 0x0a, // offsets
    0x1c, 0x01, 0x87,       // 391 "Adobe"
    0x1c, 0x01, 0x88,       // 392 "Identity"
    0x8b,                   // 0
    0x0c, 0x1e,             // ROS
    // String INDEX
    0x00, 0x00,
    // Global Subr INDEX
    0x00, 0x00,
];
