//! Identifying font file formats
//!
//! This crate recognizes the container format of a font file by inspecting
//! its leading bytes. It understands Type 1 fonts (PFA and PFB), bare CFF,
//! TrueType fonts and collections, and OpenType fonts with CFF outlines. For
//! CFF data it also distinguishes 8-bit fonts from CID-keyed ones.
//!
//! Identification never reads more than a small, bounded prefix of the
//! relevant structures, never allocates, and never fails with anything worse
//! than [`NotIdentified`].
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! use sniff_fonts::FontFormat;
//! let font_bytes = std::fs::read(path_to_my_font_file).unwrap();
//! match sniff_fonts::identify(&font_bytes) {
//!     Ok(FontFormat::OpenTypeCffCid) => println!("a CID-keyed OpenType font"),
//!     Ok(format) => println!("{format}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```
//!
//! The building blocks are public as well: [`FontData`] and [`Cursor`] for
//! bounded reading, [`Speculation`] for parses that may need to back out, and
//! the individual detectors in [`detect`].

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
extern crate core as std;

mod decode;
pub mod detect;
mod font_data;
mod format;
mod read;
mod speculate;
pub mod tables;
mod tag;


pub use decode::MAX_INT_WIDTH;
pub use font_data::{Capability, Cursor, FontData};
pub use format::FontFormat;
pub use read::{NotIdentified, ReadError};
pub use speculate::Speculation;
pub use tag::Tag;

/// Identify the format of a font file.
pub fn identify(data: &[u8]) -> Result<FontFormat, NotIdentified> {
    let mut cursor = FontData::new(data).cursor();
    detect::identify_at(&mut cursor).ok_or(NotIdentified)
}

/// Identify the format of a font file, using [`FontFormat::Unknown`] for
/// anything unrecognized.
pub fn identify_or_unknown(data: &[u8]) -> FontFormat {
    identify(data).unwrap_or(FontFormat::Unknown)
}
