//! raw font bytes

use std::ops::{Bound, RangeBounds};

use crate::speculate::Speculation;

/// A reference to raw binary font data.
///
/// This is a wrapper around a byte slice owned by the caller (usually a
/// memory-mapped file or an in-memory buffer). It never copies the bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontData<'a> {
    bytes: &'a [u8],
}

/// How a [`Cursor`] is able to move over its data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Only forward movement, one byte at a time.
    Forward,
    /// Forward or backward movement, one byte at a time.
    Bidirectional,
    /// Movement by any distance in a single step.
    #[default]
    RandomAccess,
}

/// A read-only position within some [`FontData`].
///
/// The position is always within `0..=data.len()`. Moves that would leave
/// that range are clamped to the boundary and reported as failures; the
/// cursor is *not* restored after such a move. Callers that need to undo a
/// failed move should work inside a [`Speculation`] (see [`Cursor::speculate`]).
///
/// Cloning a cursor creates an independent position over the same bytes.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    pos: usize,
    data: FontData<'a>,
    capability: Capability,
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData { bytes }
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `self[pos..]`, or `None` if `pos` is past the end.
    pub fn split_off(&self, pos: usize) -> Option<FontData<'a>> {
        self.bytes.get(pos..).map(|bytes| FontData { bytes })
    }

    /// Returns `self[range]`, or `None` if the range is out of bounds.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<FontData<'a>> {
        let bounds: (Bound<usize>, Bound<usize>) =
            (range.start_bound().cloned(), range.end_bound().cloned());
        self.bytes.get(bounds).map(|bytes| FontData { bytes })
    }

    /// Return the data as a byte slice
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// A random-access cursor positioned at the start of the data.
    pub fn cursor(&self) -> Cursor<'a> {
        self.cursor_with(Capability::RandomAccess)
    }

    /// A cursor with the given movement capability, positioned at the start
    /// of the data.
    pub fn cursor_with(&self, capability: Capability) -> Cursor<'a> {
        Cursor {
            pos: 0,
            data: *self,
            capability,
        }
    }
}

impl<'a> Cursor<'a> {
    /// The current position, as an offset from the start of the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// How this cursor is able to move.
    pub fn capability(&self) -> Capability {
        self.capability
    }

    /// The data this cursor moves over.
    pub fn data(&self) -> FontData<'a> {
        self.data
    }

    /// The number of bytes between the current position and the end.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// The unread tail of the data.
    pub fn remaining_data(&self) -> FontData<'a> {
        self.data.split_off(self.pos).unwrap_or_default()
    }

    /// `true` if there is nothing left to read.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// The byte at the current position, without moving.
    pub fn peek(&self) -> Option<u8> {
        self.data.bytes.get(self.pos).copied()
    }

    /// The byte at the current position; moves past it if there is one.
    pub fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    /// Move by `distance` bytes, which may be negative for cursors that can
    /// move backwards.
    ///
    /// Returns `true` if the full distance was covered. Otherwise the cursor
    /// stops at the boundary it ran into and `false` is returned.
    pub fn advance_by(&mut self, distance: i64) -> bool {
        match self.capability {
            Capability::Forward => self.step_forward(distance),
            Capability::Bidirectional => self.step(distance),
            Capability::RandomAccess => self.jump(distance),
        }
    }

    /// Begin a tentative parse. See [`Speculation`].
    pub fn speculate(&mut self) -> Speculation<'_, 'a> {
        Speculation::new(self)
    }

    pub(crate) fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.data.len());
    }

    fn step_forward(&mut self, distance: i64) -> bool {
        if distance < 0 {
            log::warn!("cannot move a forward-only cursor by {distance}");
            return false;
        }
        self.step(distance)
    }

    fn step(&mut self, mut distance: i64) -> bool {
        while distance > 0 && self.pos < self.data.len() {
            self.pos += 1;
            distance -= 1;
        }
        while distance < 0 && self.pos > 0 {
            self.pos -= 1;
            distance += 1;
        }
        distance == 0
    }

    fn jump(&mut self, distance: i64) -> bool {
        let to_first = -i64::try_from(self.pos).unwrap_or(i64::MAX);
        let to_last = i64::try_from(self.remaining()).unwrap_or(i64::MAX);
        let offset = distance.clamp(to_first, to_last);
        // `offset` is within `-pos..=remaining`, so the new position is in bounds
        self.pos = (self.pos as i64 + offset) as usize;
        offset == distance
    }
}

impl AsRef<[u8]> for FontData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}
