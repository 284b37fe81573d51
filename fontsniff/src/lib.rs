//! Identifying font files on disk
//!
//! This is the filesystem side of `fontsniff`: mapping files into memory,
//! the file extension shortcut and formatting of results. Identification
//! itself is done by [`sniff_fonts`].

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use memmap2::Mmap;
use sniff_fonts::FontFormat;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to identify the format of '{}'", path.display())]
    NotIdentified { path: PathBuf },
}

impl Error {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_owned(),
            source,
        }
    }
}

/// Settings for [`identify_path`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    /// Always inspect file contents, even when the extension implies a format.
    pub ignore_extension: bool,
}

/// How results are written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// The format's label.
    #[default]
    Label,
    /// The path followed by the format's label.
    PathAndLabel,
    /// A JSON object per file.
    Json,
}

/// The bytes of a font file.
pub enum FontSource {
    Mapped(Mmap),
    /// Zero-length files cannot be mapped.
    Empty,
}

impl FontSource {
    pub fn open(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let len = file.metadata().map_err(|e| Error::io(path, e))?.len();
        if len == 0 {
            return Ok(FontSource::Empty);
        }
        // SAFETY: the map is only ever read. Modifying the file while it is
        // mapped can change what we read but not cause us to read out of
        // bounds of the mapping.
        let map = unsafe { Mmap::map(&file) }.map_err(|e| Error::io(path, e))?;
        Ok(FontSource::Mapped(map))
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FontSource::Mapped(map) => &map[..],
            FontSource::Empty => &[],
        }
    }
}

/// Identify the format of the font file at `path`.
///
/// Unless disabled in `options`, a recognized file extension decides the
/// format without the file being opened.
pub fn identify_path(path: &Path, options: Options) -> Result<FontFormat, Error> {
    if !options.ignore_extension {
        if let Some(format) = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(FontFormat::from_extension)
        {
            log::debug!("{}: identified by extension", path.display());
            return Ok(format);
        }
    }
    let source = FontSource::open(path)?;
    sniff_fonts::identify(source.as_bytes()).map_err(|_| Error::NotIdentified {
        path: path.to_owned(),
    })
}

/// The line of output for a successfully identified file.
///
/// In JSON mode, failures produce a line as well, with a null format; in the
/// other styles they produce `None` and are reported as errors instead.
pub fn format_result(
    path: &Path,
    result: &Result<FontFormat, Error>,
    style: OutputStyle,
) -> Option<String> {
    match (style, result) {
        (OutputStyle::Json, result) => {
            let format = result.as_ref().ok();
            let line = serde_json::json!({
                "path": path.display().to_string(),
                "format": format,
            });
            Some(line.to_string())
        }
        (OutputStyle::Label, Ok(format)) => Some(format.label().to_string()),
        (OutputStyle::PathAndLabel, Ok(format)) => {
            Some(format!("{}: {}", path.display(), format.label()))
        }
        (_, Err(_)) => None,
    }
}
