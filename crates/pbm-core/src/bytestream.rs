/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A byte cursor for whitespace separated text formats
//!
//! The reader never fails, reading past the end returns `None`,
//! callers decide what end of stream means for them.

/// An in-memory reader over a byte slice
pub struct PbmByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> PbmByteReader<'a> {
    /// Create a new reader positioned at the start of `buf`
    pub const fn new(buf: &'a [u8]) -> PbmByteReader<'a> {
        PbmByteReader {
            stream:   buf,
            position: 0
        }
    }

    /// Get number of bytes remaining in the stream
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }

    /// Return true if we have no more bytes to read
    #[inline]
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }

    /// Look at the next byte without consuming it
    #[inline(always)]
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }

    /// Consume all ASCII whitespace up to the next
    /// non-space byte or the end of the stream
    pub fn skip_whitespace(&mut self) {
        while let Some(byte) = self.peek_u8() {
            if !byte.is_ascii_whitespace() {
                break;
            }
            self.position += 1;
        }
    }

    /// Return the next run of non whitespace bytes, skipping any
    /// whitespace before it.
    ///
    /// Returns `None` once the stream holds nothing but whitespace.
    pub fn next_token(&mut self) -> Option<&'a [u8]> {
        self.skip_whitespace();

        let start = self.position;

        while let Some(byte) = self.peek_u8() {
            if byte.is_ascii_whitespace() {
                break;
            }
            self.position += 1;
        }
        if start == self.position {
            return None;
        }
        Some(&self.stream[start..self.position])
    }
}
