/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pbm_core::bytestream::PbmByteReader;
use pbm_core::log::{info, trace};
use pbm_core::options::DecoderOptions;

use crate::bitmap::Bitmap;
use crate::errors::PbmErrors;
use crate::header::PbmHeader;

/// An instance of a plain bitmap decoder
///
/// The decoder reads whitespace separated tokens: a magic number,
/// the width, the height and then `width*height` pixel tokens in
/// row-major order. A pixel is set if its token is exactly `1`.
pub struct PbmDecoder<'a> {
    reader:  PbmByteReader<'a>,
    header:  Option<PbmHeader>,
    options: DecoderOptions
}

impl<'a> PbmDecoder<'a> {
    /// Create a new decoder with default options
    ///
    /// # Arguments
    /// - data: plain bitmap text
    ///
    /// # Example
    /// ```
    /// use pbm::PbmDecoder;
    /// let mut decoder = PbmDecoder::new(b"P1 2 1 1");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PbmDecoder<'a> {
        PbmDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new decoder with the specified options
    ///
    /// # Example
    /// ```
    /// use pbm_core::options::DecoderOptions;
    /// use pbm::PbmDecoder;
    ///
    /// let options = DecoderOptions::default().set_max_width(2);
    /// let mut decoder = PbmDecoder::new_with_options(options, b"P1 3 1 1 0 1");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PbmDecoder<'a> {
        PbmDecoder {
            reader: PbmByteReader::new(data),
            header: None,
            options
        }
    }

    /// Read the magic number and dimensions and store them
    /// in internal state
    ///
    /// Calling this more than once is a no-op
    pub fn decode_headers(&mut self) -> Result<(), PbmErrors> {
        self.decode_headers_inner().map(|_| ())
    }

    fn decode_headers_inner(&mut self) -> Result<PbmHeader, PbmErrors> {
        if let Some(header) = &self.header {
            return Ok(header.clone());
        }
        let magic = self
            .reader
            .next_token()
            .ok_or(PbmErrors::NotEnoughTokens("magic number", 1, 0))?;

        let magic_number = String::from_utf8_lossy(magic).into_owned();

        let width = self.get_integer("width")?;

        if width > self.options.get_max_width() {
            return Err(PbmErrors::LargeDimensions(
                "width",
                self.options.get_max_width(),
                width
            ));
        }
        let height = self.get_integer("height")?;

        if height > self.options.get_max_height() {
            return Err(PbmErrors::LargeDimensions(
                "height",
                self.options.get_max_height(),
                height
            ));
        }

        info!("Magic number: {}", magic_number);
        info!("Width: {}, height: {}", width, height);

        let header = PbmHeader::new(magic_number, width, height);
        self.header = Some(header.clone());

        Ok(header)
    }

    fn get_integer(&mut self, field: &'static str) -> Result<usize, PbmErrors> {
        let token = self
            .reader
            .next_token()
            .ok_or(PbmErrors::NotEnoughTokens(field, 1, 0))?;

        core::str::from_utf8(token)
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .ok_or_else(|| {
                PbmErrors::InvalidInteger(field, String::from_utf8_lossy(token).into_owned())
            })
    }

    /// Return the decoded header or none if headers
    /// are not decoded
    pub const fn header(&self) -> Option<&PbmHeader> {
        self.header.as_ref()
    }

    /// Return image dimensions or none if headers aren't decoded
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.header.as_ref().map(|h| (h.width, h.height))
    }

    /// Decode the stream into a [`Bitmap`]
    ///
    /// Tokens after the last pixel are ignored.
    pub fn decode(&mut self) -> Result<Bitmap, PbmErrors> {
        let header = self.decode_headers_inner()?;
        // both dimensions are below the configured maximums,
        // so this only overflows with absurd options
        let size = header.num_pixels().ok_or(PbmErrors::LargeDimensions(
            "width * height",
            usize::MAX,
            header.width
        ))?;

        let strict = self.options.get_strict_mode();
        // every pixel token is one byte plus a separator, so a short
        // stream cannot hold more than this many
        let capacity = size.min(self.reader.remaining().div_ceil(2));
        let mut pixels = Vec::with_capacity(capacity);

        for index in 0..size {
            let token = self
                .reader
                .next_token()
                .ok_or_else(|| PbmErrors::NotEnoughTokens("pixels", size, index))?;

            let pixel = match token {
                b"1" => true,
                b"0" => false,
                _ if strict => {
                    return Err(PbmErrors::InvalidPixel(
                        index,
                        String::from_utf8_lossy(token).into_owned()
                    ));
                }
                _ => false
            };
            pixels.push(pixel);
        }
        trace!("Decoded {} pixels", size);

        Ok(Bitmap::from_parts(header, pixels))
    }
}
