/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The bitmap representation
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use pbm_core::log::trace;
use pbm_core::options::DecoderOptions;

use crate::decoder::PbmDecoder;
use crate::encoder::PbmEncoder;
use crate::errors::PbmErrors;
use crate::header::PbmHeader;
use crate::ops;

/// A black and white image
///
/// Pixels are stored row-major, `true` is a set (black) pixel
/// and `false` a clear (white) one.
///
/// The dimensions are fixed once the bitmap is read
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bitmap {
    header: PbmHeader,
    pixels: Vec<bool>
}

impl Bitmap {
    /// Invariant: `pixels.len() == header.width * header.height`
    pub(crate) fn from_parts(header: PbmHeader, pixels: Vec<bool>) -> Bitmap {
        debug_assert_eq!(header.num_pixels(), Some(pixels.len()));

        Bitmap { header, pixels }
    }

    /// Read a bitmap from a file with default decoder options
    ///
    /// # Errors
    /// An I/O error if the file cannot be opened or read,
    /// or a format error if its content is not a valid bitmap
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Bitmap, PbmErrors> {
        Self::open_with_options(path, DecoderOptions::default())
    }

    /// Read a bitmap from a file with the given decoder options
    pub fn open_with_options<P: AsRef<Path>>(
        path: P, options: DecoderOptions
    ) -> Result<Bitmap, PbmErrors> {
        let path = path.as_ref();

        trace!("Opening {:?}", path);

        let fd = BufReader::new(File::open(path)?);

        Self::read_with_options(fd, options)
    }

    /// Read a bitmap from any reader
    pub fn read<R: Read>(reader: R) -> Result<Bitmap, PbmErrors> {
        Self::read_with_options(reader, DecoderOptions::default())
    }

    /// Read a bitmap from any reader with the given decoder options
    ///
    /// The whole stream is consumed before decoding starts
    pub fn read_with_options<R: Read>(
        mut reader: R, options: DecoderOptions
    ) -> Result<Bitmap, PbmErrors> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;

        Self::from_bytes_with_options(&data, options)
    }

    /// Decode a bitmap held in memory
    pub fn from_bytes(data: &[u8]) -> Result<Bitmap, PbmErrors> {
        Self::from_bytes_with_options(data, DecoderOptions::default())
    }

    /// Decode a bitmap held in memory with the given decoder options
    pub fn from_bytes_with_options(
        data: &[u8], options: DecoderOptions
    ) -> Result<Bitmap, PbmErrors> {
        PbmDecoder::new_with_options(options, data).decode()
    }

    /// Write the bitmap to `path`, creating or truncating the file
    ///
    /// The file is flushed before returning and closed on every path.
    /// A failure midway may leave a truncated file behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PbmErrors> {
        let path = path.as_ref();

        trace!("Saving to {:?}", path);

        let mut writer = BufWriter::new(File::create(path)?);

        self.write_to(&mut writer)
    }

    /// Serialize the bitmap into `writer`, flushing it afterwards
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), PbmErrors> {
        PbmEncoder::new(writer).encode(self)
    }

    /// Serialize the bitmap into a new buffer
    pub fn to_bytes(&self) -> Result<Vec<u8>, PbmErrors> {
        let mut data = Vec::with_capacity(self.pixels.len() * 2 + 32);
        self.write_to(&mut data)?;
        Ok(data)
    }

    /// Return `(width, height)`
    pub const fn size(&self) -> (usize, usize) {
        (self.header.width, self.header.height)
    }

    pub const fn header(&self) -> &PbmHeader {
        &self.header
    }

    pub fn magic_number(&self) -> &str {
        &self.header.magic_number
    }

    /// Replace the magic number, it is written verbatim on save
    pub fn set_magic_number(&mut self, magic_number: impl Into<String>) {
        self.header.magic_number = magic_number.into();
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, PbmErrors> {
        let (width, height) = self.size();

        if x >= width || y >= height {
            return Err(PbmErrors::OutOfBounds(x, y, width, height));
        }
        Ok(y * width + x)
    }

    /// Return the pixel at column `x`, row `y`
    ///
    /// # Errors
    /// [`PbmErrors::OutOfBounds`] if the coordinate lies outside the image
    pub fn at(&self, x: usize, y: usize) -> Result<bool, PbmErrors> {
        let index = self.index(x, y)?;
        Ok(self.pixels[index])
    }

    /// Set the pixel at column `x`, row `y`
    ///
    /// # Errors
    /// [`PbmErrors::OutOfBounds`] if the coordinate lies outside the image
    pub fn set(&mut self, x: usize, y: usize, value: bool) -> Result<(), PbmErrors> {
        let index = self.index(x, y)?;
        self.pixels[index] = value;
        Ok(())
    }

    /// All pixels, row-major
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    /// Iterate over rows from top to bottom
    ///
    /// A zero width image still yields `height` empty rows
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        let width = self.header.width;

        (0..self.header.height).map(move |y| &self.pixels[y * width..(y + 1) * width])
    }

    /// Number of set pixels
    pub fn count_set(&self) -> usize {
        self.pixels.iter().filter(|x| **x).count()
    }

    /// Invert every pixel
    pub fn invert(&mut self) {
        ops::invert(&mut self.pixels);
    }

    /// Mirror the image horizontally, reversing each row
    pub fn flip(&mut self) {
        ops::flip_rows(&mut self.pixels, self.header.width);
    }

    /// Mirror the image vertically, reversing the row order
    pub fn flop(&mut self) {
        ops::flop_rows(&mut self.pixels, self.header.width);
    }
}
