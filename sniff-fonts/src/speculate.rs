//! Tentative parsing with automatic rollback

use std::ops::{Deref, DerefMut};

use crate::font_data::Cursor;

/// A guard around a [`Cursor`] for a parse that may fail part way through.
///
/// The guard remembers where the cursor was when it was created. Unless
/// [`commit`](Speculation::commit) is called, dropping the guard moves the
/// cursor back to that position, so returning early with `?` leaves the
/// caller's cursor untouched.
///
/// The guard derefs to the cursor, so all reading happens through it.
///
/// ```
/// # use sniff_fonts::{FontData, ReadError};
/// let data = FontData::new(b"OTTO\x00\x01");
/// let mut cursor = data.cursor();
/// let attempt = (|| -> Result<(), ReadError> {
///     let mut tentative = cursor.speculate();
///     tentative.expect_bytes(b"OTTO")?;
///     tentative.read_u32()?; // only two bytes left
///     tentative.commit();
///     Ok(())
/// })();
/// assert!(attempt.is_err());
/// assert_eq!(cursor.position(), 0);
/// ```
pub struct Speculation<'c, 'a> {
    cursor: &'c mut Cursor<'a>,
    saved: usize,
    committed: bool,
}

impl<'c, 'a> Speculation<'c, 'a> {
    pub(crate) fn new(cursor: &'c mut Cursor<'a>) -> Self {
        let saved = cursor.position();
        Speculation {
            cursor,
            saved,
            committed: false,
        }
    }

    /// The position of the cursor when this speculation began.
    pub fn start(&self) -> usize {
        self.saved
    }

    /// Keep the cursor where it is.
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl<'a> Deref for Speculation<'_, 'a> {
    type Target = Cursor<'a>;

    fn deref(&self) -> &Self::Target {
        self.cursor
    }
}

impl DerefMut for Speculation<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cursor
    }
}

impl Drop for Speculation<'_, '_> {
    fn drop(&mut self) {
        if !self.committed {
            self.cursor.set_position(self.saved);
        }
    }
}
