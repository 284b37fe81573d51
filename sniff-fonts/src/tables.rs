//! Header parsers for the supported container formats.

pub mod cff;
pub mod sfnt;
pub mod type1;
