/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use pbm_core::log::trace;

use crate::bitmap::Bitmap;
use crate::errors::PbmErrors;
use crate::header::PbmHeader;

/// A plain bitmap encoder
///
/// The output is laid out as
/// ```text
/// <magic number>
/// <width> <height>
/// 1 0 1
/// 0 1 0
/// ```
/// with every pixel token followed by a single space,
/// so each row line ends in a space before the newline.
pub struct PbmEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PbmEncoder<'a, W> {
    /// Create a new encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PbmEncoder<'a, W> {
        Self { writer }
    }

    fn write_headers(&mut self, header: &PbmHeader) -> Result<(), PbmErrors> {
        writeln!(self.writer, "{}", header.magic_number)?;
        writeln!(self.writer, "{} {}", header.width, header.height)?;

        Ok(())
    }

    /// Encode a bitmap, then flush the writer
    pub fn encode(&mut self, bitmap: &Bitmap) -> Result<(), PbmErrors> {
        self.encode_raw(bitmap.header(), bitmap.pixels())
    }

    /// Encode row-major `pixels` described by `header`, then flush the writer
    ///
    /// # Errors
    /// - [`PbmErrors::DimensionMismatch`] if `pixels` does not hold
    ///   exactly `width*height` values
    /// - [`PbmErrors::IoErrors`] if writing or flushing fails
    pub fn encode_raw(&mut self, header: &PbmHeader, pixels: &[bool]) -> Result<(), PbmErrors> {
        let expected = header.num_pixels().unwrap_or(usize::MAX);

        if expected != pixels.len() {
            return Err(PbmErrors::DimensionMismatch(expected, pixels.len()));
        }
        self.write_headers(header)?;

        // one "x " pair per pixel and a newline
        let mut line = Vec::with_capacity(header.width * 2 + 1);

        for y in 0..header.height {
            let row = &pixels[y * header.width..(y + 1) * header.width];

            line.clear();
            for pixel in row {
                line.extend_from_slice(if *pixel { b"1 " } else { b"0 " });
            }
            line.push(b'\n');

            self.writer.write_all(&line)?;
        }
        self.writer.flush()?;

        trace!("Wrote {} rows", header.height);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::PbmErrors;
    use crate::{Bitmap, PbmEncoder, PbmHeader};

    #[test]
    fn rows_end_with_a_space() {
        let mut bitmap = Bitmap::from_bytes(b"P1\n3 2\n1 0 1\n0 1 0\n").unwrap();
        bitmap.invert();

        let mut out = vec![];
        PbmEncoder::new(&mut out).encode(&bitmap).unwrap();

        assert_eq!(out, b"P1\n3 2\n0 1 0 \n1 0 1 \n");
    }

    #[test]
    fn input_whitespace_is_normalized() {
        let bitmap = Bitmap::from_bytes(b"  P1   2\n\n1\t1 \r\n0 0 1").unwrap();

        assert_eq!(bitmap.to_bytes().unwrap(), b"P1\n2 1\n1 0 \n");
    }

    #[test]
    fn custom_magic_number_is_written() {
        let mut bitmap = Bitmap::from_bytes(b"P1 1 1 1").unwrap();
        bitmap.set_magic_number("PX");

        assert_eq!(bitmap.to_bytes().unwrap(), b"PX\n1 1\n1 \n");
    }

    #[test]
    fn zero_width_writes_empty_rows() {
        let bitmap = Bitmap::from_bytes(b"P1 0 2").unwrap();

        assert_eq!(bitmap.to_bytes().unwrap(), b"P1\n0 2\n\n\n");
    }

    #[test]
    fn mismatched_buffers_are_rejected() {
        let header = PbmHeader::new("P1", 2, 2);
        let mut out = vec![];

        let err = PbmEncoder::new(&mut out)
            .encode_raw(&header, &[true, false, true])
            .unwrap_err();

        assert!(matches!(err, PbmErrors::DimensionMismatch(4, 3)));
        assert!(out.is_empty());
    }
}
